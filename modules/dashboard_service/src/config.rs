//! Configuration for the dashboard service module

use serde::{Deserialize, Serialize};

/// Dashboard service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed for the mock data generator; unset means OS entropy
    #[serde(default)]
    pub mock_seed: Option<u64>,
}
