//! API layers

pub mod native;
pub mod rest;
