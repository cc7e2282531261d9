//! Route registration

use super::{error, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes, relative to the `/api` prefix
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Overview & stats
        .route("/overview", get(handlers::get_overview))
        .route("/stats/display", get(handlers::get_display_stats))
        // Locations
        .route("/locations/sales-points", get(handlers::list_sales_points))
        .route("/locations/wilayas", get(handlers::list_wilayas))
        // Team
        .route("/team/merchandisers", get(handlers::list_merchandisers))
        .route("/team/supervisors", get(handlers::list_supervisors))
        // Reports
        .route("/reports/daily", get(handlers::get_daily_report))
        .route("/reports/weekly", get(handlers::get_weekly_report))
        .route("/reports/monthly", get(handlers::get_monthly_report))
        // Issues
        .route("/issues/display", get(handlers::list_display_issues))
        .route("/issues/stock", get(handlers::list_stock_issues))
        // Settings
        .route("/settings", get(handlers::get_settings))
        .route("/settings/notifications", put(handlers::update_notifications))
        .route("/settings/thresholds", put(handlers::update_thresholds))
        .route("/settings/default-wilaya", put(handlers::set_default_wilaya))
        .route(
            "/settings/display-preferences",
            put(handlers::update_display_preferences),
        )
        .route("/settings/reset", post(handlers::reset_settings))
        // Products
        .route("/products/search", post(handlers::search_products))
        .route("/products/verify", post(handlers::verify_product))
        .route("/products/families", get(handlers::list_product_families))
        .route("/products/add", post(handlers::add_product))
        .route("/product/family", post(handlers::find_product_family))
        .method_not_allowed_fallback(error::method_not_allowed)
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}
