//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::DashboardApi;
use crate::domain::Service;
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Dashboard service module
#[derive(Default)]
pub struct DashboardServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl DashboardServiceModule {
    /// Build the domain service from typed configuration
    pub fn init(&self, cfg: Config) -> Result<()> {
        let service = Arc::new(Service::new(&cfg));
        *self.config.write() = cfg;
        *self.service.write() = Some(service);

        tracing::info!(
            seeded = self.config.read().mock_seed.is_some(),
            "Dashboard service initialized"
        );
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client sharing state with the REST routes
    pub fn client(&self) -> Result<Arc<dyn DashboardApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    /// Register REST routes onto `router`; mount the result under `/api`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        tracing::info!("Registering dashboard REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        crate::api::rest::openapi::openapi()
    }
}
