//! OpenAPI document assembled from the handler annotations

use super::{dto::*, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Display Management Dashboard API",
        version = "1.0.0",
        description = "Mock data, settings and product lookup for the display-management dashboard"
    ),
    paths(
        handlers::get_overview,
        handlers::get_display_stats,
        handlers::list_sales_points,
        handlers::list_wilayas,
        handlers::list_merchandisers,
        handlers::list_supervisors,
        handlers::get_daily_report,
        handlers::get_weekly_report,
        handlers::get_monthly_report,
        handlers::list_display_issues,
        handlers::list_stock_issues,
        handlers::get_settings,
        handlers::update_notifications,
        handlers::update_thresholds,
        handlers::set_default_wilaya,
        handlers::update_display_preferences,
        handlers::reset_settings,
        handlers::search_products,
        handlers::verify_product,
        handlers::find_product_family,
        handlers::list_product_families,
        handlers::add_product,
    ),
    components(schemas(
        ApiResponseSchema,
        ResponseStatus,
        OverviewDto,
        DisplayStatsDto,
        SalesPointDto,
        WilayaDto,
        MerchandiserDto,
        SupervisorDto,
        DailyReportDto,
        WeeklyReportDto,
        MonthlyReportDto,
        DisplayIssueDto,
        StockIssueDto,
        SettingsDto,
        NotificationsDto,
        ThresholdsDto,
        DisplayPreferencesDto,
        DefaultWilayaDto,
        ProductSearchHitDto,
        ProductMatchDto,
        ProductVerificationDto,
        EchoValueDto,
        AddedProductDto,
    )),
    tags(
        (name = "Overview"),
        (name = "Stats"),
        (name = "Locations"),
        (name = "Team"),
        (name = "Reports"),
        (name = "Issues"),
        (name = "Settings"),
        (name = "Products"),
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
