//! Domain service - owns all dashboard state and hands it to the API layers

use crate::config::Config;
use crate::contract::{
    DailyReport, DashboardError, DisplayIssue, DisplayPreferences, DisplayPreferencesPatch,
    DisplayStats, Merchandiser, MonthlyReport, NewProduct, Notifications, NotificationsPatch,
    Overview, ProductMatch, ProductSearchHit, ProductVerification, SalesPoint, Settings,
    StockIssue, Supervisor, Thresholds, ThresholdsPatch, VerificationInput, WeeklyReport, Wilaya,
};
use super::mock_data::{self, MockDataset};
use super::product_catalog::ProductCatalog;
use super::reports;
use super::settings_store::SettingsStore;
use super::validation::require_non_empty;
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Domain service for the dashboard
///
/// Location and team collections are fixed at construction. Settings and the
/// product catalog are the only mutable state.
pub struct Service {
    dataset: MockDataset,
    settings: SettingsStore,
    catalog: ProductCatalog,
    rng: Mutex<StdRng>,
}

impl Service {
    pub fn new(config: &Config) -> Self {
        let rng = match config.mock_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_parts(rng, SettingsStore::default(), ProductCatalog::default())
    }

    /// Build a service from explicit parts; the dataset is drawn from `rng`
    pub fn with_parts(mut rng: StdRng, settings: SettingsStore, catalog: ProductCatalog) -> Self {
        let dataset = MockDataset::generate(&mut rng, Utc::now());
        tracing::debug!(
            sales_points = dataset.sales_points.len(),
            wilayas = dataset.wilayas.len(),
            merchandisers = dataset.merchandisers.len(),
            supervisors = dataset.supervisors.len(),
            "Mock dataset generated"
        );
        Self {
            dataset,
            settings,
            catalog,
            rng: Mutex::new(rng),
        }
    }

    // ===== Read-only dashboard data =====

    pub fn overview(&self) -> Overview {
        reports::overview()
    }

    pub fn display_stats(&self) -> DisplayStats {
        reports::display_stats(&self.dataset.wilayas)
    }

    pub fn sales_points(&self) -> &[SalesPoint] {
        &self.dataset.sales_points
    }

    pub fn wilayas(&self) -> &[Wilaya] {
        &self.dataset.wilayas
    }

    pub fn merchandisers(&self) -> &[Merchandiser] {
        &self.dataset.merchandisers
    }

    pub fn supervisors(&self) -> &[Supervisor] {
        &self.dataset.supervisors
    }

    pub fn daily_report(&self) -> DailyReport {
        reports::daily_report(Utc::now())
    }

    pub fn weekly_report(&self) -> WeeklyReport {
        reports::weekly_report()
    }

    pub fn monthly_report(&self) -> MonthlyReport {
        reports::monthly_report(Utc::now())
    }

    /// New random issues on every call
    pub fn display_issues(&self) -> Vec<DisplayIssue> {
        mock_data::display_issues(&mut *self.rng.lock(), Utc::now())
    }

    pub fn stock_issues(&self) -> Vec<StockIssue> {
        mock_data::stock_issues(&mut *self.rng.lock())
    }

    // ===== Settings Operations =====

    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    pub fn update_notifications(&self, patch: NotificationsPatch) -> Notifications {
        self.settings.update_notifications(patch)
    }

    pub fn update_thresholds(&self, patch: ThresholdsPatch) -> Thresholds {
        self.settings.update_thresholds(patch)
    }

    pub fn set_default_wilaya(&self, wilaya: Option<String>) -> Result<String, DashboardError> {
        self.settings.set_default_wilaya(wilaya)
    }

    pub fn update_display_preferences(&self, patch: DisplayPreferencesPatch) -> DisplayPreferences {
        self.settings.update_display_preferences(patch)
    }

    pub fn reset_settings(&self) -> Settings {
        let settings = self.settings.reset();
        tracing::info!("Settings reset to default values");
        settings
    }

    // ===== Product Operations =====

    pub fn find_product_family(&self, product_name: &str) -> Option<ProductMatch> {
        self.catalog.find_product_family(product_name)
    }

    /// Domain-level search; an empty description returns the whole catalog
    pub fn search_products(&self, description: &str) -> Vec<ProductSearchHit> {
        self.catalog.search_product(description)
    }

    /// Search as exposed over HTTP, where the description is mandatory
    pub fn search_products_required(
        &self,
        description: Option<String>,
    ) -> Result<Vec<ProductSearchHit>, DashboardError> {
        let description = require_non_empty(description, "Description is required")?;
        Ok(self.catalog.search_product(&description))
    }

    pub fn verify_product(&self, input: VerificationInput) -> ProductVerification {
        self.catalog.verify_product(input)
    }

    pub fn add_product(&self, product: NewProduct) -> usize {
        let len = self.catalog.add_product(product);
        tracing::info!(families = len, "Product family appended");
        len
    }

    pub fn product_families(&self) -> Vec<String> {
        self.catalog.families()
    }
}
