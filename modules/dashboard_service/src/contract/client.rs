//! Native client trait for inter-module communication
//!
//! Covers the stateful parts of the service (settings and product catalog).
//! NO HTTP - direct function calls.

use super::{
    error::DashboardError,
    model::{
        DisplayPreferences, DisplayPreferencesPatch, NewProduct, Notifications,
        NotificationsPatch, ProductMatch, ProductSearchHit, ProductVerification, Settings,
        Thresholds, ThresholdsPatch, VerificationInput,
    },
};
use async_trait::async_trait;

/// Dashboard service API for inter-module communication
#[async_trait]
pub trait DashboardApi: Send + Sync {
    // ===== Settings Operations =====

    /// Snapshot of the current settings
    async fn get_settings(&self) -> Result<Settings, DashboardError>;

    async fn update_notifications(
        &self,
        patch: NotificationsPatch,
    ) -> Result<Notifications, DashboardError>;

    async fn update_thresholds(&self, patch: ThresholdsPatch) -> Result<Thresholds, DashboardError>;

    /// Fails with [`DashboardError::Validation`] when `wilaya` is empty or absent
    async fn set_default_wilaya(&self, wilaya: Option<String>) -> Result<String, DashboardError>;

    async fn update_display_preferences(
        &self,
        patch: DisplayPreferencesPatch,
    ) -> Result<DisplayPreferences, DashboardError>;

    /// Restore the default settings literal
    async fn reset_settings(&self) -> Result<Settings, DashboardError>;

    // ===== Product Operations =====

    async fn find_product_family(
        &self,
        product_name: &str,
    ) -> Result<Option<ProductMatch>, DashboardError>;

    async fn search_products(
        &self,
        description: &str,
    ) -> Result<Vec<ProductSearchHit>, DashboardError>;

    async fn verify_product(
        &self,
        input: VerificationInput,
    ) -> Result<ProductVerification, DashboardError>;

    /// Append the product's category to the family list, returning the new list length
    async fn add_product(&self, product: NewProduct) -> Result<usize, DashboardError>;

    async fn list_product_families(&self) -> Result<Vec<String>, DashboardError>;
}
