//! Dashboard Service Module
//!
//! Mock backend for the retail display-management dashboard: randomly
//! generated locations and team rosters, canned reports, a mutable settings
//! record and a string-matching product family catalog.

// Public exports
pub mod contract;
pub use contract::{client::DashboardApi, error::DashboardError, Settings};

pub mod module;
pub use module::DashboardServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
