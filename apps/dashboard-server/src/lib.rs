//! Dashboard server assembly: configuration, logging and the HTTP app

pub mod app;
pub mod config;
pub mod logging;
