//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    DashboardApi, DashboardError, DisplayPreferences, DisplayPreferencesPatch, NewProduct,
    Notifications, NotificationsPatch, ProductMatch, ProductSearchHit, ProductVerification,
    Settings, Thresholds, ThresholdsPatch, VerificationInput,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Shares state with the REST handlers when built from the same `Service`.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl DashboardApi for NativeClient {
    async fn get_settings(&self) -> Result<Settings, DashboardError> {
        Ok(self.service.settings())
    }

    async fn update_notifications(
        &self,
        patch: NotificationsPatch,
    ) -> Result<Notifications, DashboardError> {
        Ok(self.service.update_notifications(patch))
    }

    async fn update_thresholds(&self, patch: ThresholdsPatch) -> Result<Thresholds, DashboardError> {
        Ok(self.service.update_thresholds(patch))
    }

    async fn set_default_wilaya(&self, wilaya: Option<String>) -> Result<String, DashboardError> {
        self.service.set_default_wilaya(wilaya)
    }

    async fn update_display_preferences(
        &self,
        patch: DisplayPreferencesPatch,
    ) -> Result<DisplayPreferences, DashboardError> {
        Ok(self.service.update_display_preferences(patch))
    }

    async fn reset_settings(&self) -> Result<Settings, DashboardError> {
        Ok(self.service.reset_settings())
    }

    async fn find_product_family(
        &self,
        product_name: &str,
    ) -> Result<Option<ProductMatch>, DashboardError> {
        Ok(self.service.find_product_family(product_name))
    }

    async fn search_products(
        &self,
        description: &str,
    ) -> Result<Vec<ProductSearchHit>, DashboardError> {
        Ok(self.service.search_products(description))
    }

    async fn verify_product(
        &self,
        input: VerificationInput,
    ) -> Result<ProductVerification, DashboardError> {
        Ok(self.service.verify_product(input))
    }

    async fn add_product(&self, product: NewProduct) -> Result<usize, DashboardError> {
        Ok(self.service.add_product(product))
    }

    async fn list_product_families(&self) -> Result<Vec<String>, DashboardError> {
        Ok(self.service.product_families())
    }
}
