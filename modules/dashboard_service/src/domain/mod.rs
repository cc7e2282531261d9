//! Domain layer - business logic and services

pub mod mock_data;
pub mod product_catalog;
pub mod reports;
pub mod service;
pub mod settings_store;
pub mod validation;

pub use mock_data::MockDataset;
pub use product_catalog::ProductCatalog;
pub use service::Service;
pub use settings_store::SettingsStore;
