//! HTTP request handlers - thin layer that delegates to domain service
//!
//! Query filters are logged but not applied: every list endpoint returns the
//! full mock collection.

use super::{
    dto::*,
    error::ApiError,
    extract::{JsonBody, QueryParams},
};
use crate::contract::{NewProduct, VerificationInput};
use crate::domain::Service;
use axum::{Extension, Json};
use std::sync::Arc;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ===== Overview & stats =====

/// Headline dashboard metrics
#[utoipa::path(
    get,
    path = "/api/overview",
    tag = "Overview",
    responses((status = 200, description = "Overview metrics", body = ApiResponseSchema))
)]
pub async fn get_overview(Extension(service): Extension<Arc<Service>>) -> ApiResult<OverviewDto> {
    tracing::info!("GET /api/overview");
    ok(service.overview().into())
}

/// Display counts per tier and per wilaya
#[utoipa::path(
    get,
    path = "/api/stats/display",
    tag = "Stats",
    responses((status = 200, description = "Display statistics", body = ApiResponseSchema))
)]
pub async fn get_display_stats(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<DisplayStatsDto> {
    tracing::info!("GET /api/stats/display");
    ok(service.display_stats().into())
}

// ===== Locations =====

#[utoipa::path(
    get,
    path = "/api/locations/sales-points",
    tag = "Locations",
    params(SalesPointsQuery),
    responses((status = 200, description = "All sales points", body = ApiResponseSchema))
)]
pub async fn list_sales_points(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<SalesPointsQuery>,
) -> ApiResult<Vec<SalesPointDto>> {
    tracing::info!(
        wilaya = ?query.wilaya,
        point_type = ?query.point_type,
        "GET /api/locations/sales-points"
    );
    ok(service.sales_points().iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/api/locations/wilayas",
    tag = "Locations",
    responses((status = 200, description = "All wilayas", body = ApiResponseSchema))
)]
pub async fn list_wilayas(Extension(service): Extension<Arc<Service>>) -> ApiResult<Vec<WilayaDto>> {
    tracing::info!("GET /api/locations/wilayas");
    ok(service.wilayas().iter().map(Into::into).collect())
}

// ===== Team =====

#[utoipa::path(
    get,
    path = "/api/team/merchandisers",
    tag = "Team",
    params(MerchandisersQuery),
    responses((status = 200, description = "All merchandisers", body = ApiResponseSchema))
)]
pub async fn list_merchandisers(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<MerchandisersQuery>,
) -> ApiResult<Vec<MerchandiserDto>> {
    tracing::info!(wilaya = ?query.wilaya, "GET /api/team/merchandisers");
    ok(service.merchandisers().iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/api/team/supervisors",
    tag = "Team",
    responses((status = 200, description = "All supervisors", body = ApiResponseSchema))
)]
pub async fn list_supervisors(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<SupervisorDto>> {
    tracing::info!("GET /api/team/supervisors");
    ok(service.supervisors().iter().map(Into::into).collect())
}

// ===== Reports =====

#[utoipa::path(
    get,
    path = "/api/reports/daily",
    tag = "Reports",
    params(DailyReportQuery),
    responses((status = 200, description = "Report for today", body = ApiResponseSchema))
)]
pub async fn get_daily_report(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<DailyReportQuery>,
) -> ApiResult<DailyReportDto> {
    tracing::info!(date = ?query.date, wilaya = ?query.wilaya, "GET /api/reports/daily");
    ok(service.daily_report().into())
}

#[utoipa::path(
    get,
    path = "/api/reports/weekly",
    tag = "Reports",
    params(WeeklyReportQuery),
    responses((status = 200, description = "Weekly report", body = ApiResponseSchema))
)]
pub async fn get_weekly_report(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<WeeklyReportQuery>,
) -> ApiResult<WeeklyReportDto> {
    tracing::info!(start_date = ?query.start_date, "GET /api/reports/weekly");
    ok(service.weekly_report().into())
}

#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    tag = "Reports",
    params(MonthlyReportQuery),
    responses((status = 200, description = "Report for the current month", body = ApiResponseSchema))
)]
pub async fn get_monthly_report(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<MonthlyReportQuery>,
) -> ApiResult<MonthlyReportDto> {
    tracing::info!(month = ?query.month, year = ?query.year, "GET /api/reports/monthly");
    ok(service.monthly_report().into())
}

// ===== Issues =====

/// Ten freshly generated display issues
#[utoipa::path(
    get,
    path = "/api/issues/display",
    tag = "Issues",
    params(DisplayIssuesQuery),
    responses((status = 200, description = "Display issues", body = ApiResponseSchema))
)]
pub async fn list_display_issues(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<DisplayIssuesQuery>,
) -> ApiResult<Vec<DisplayIssueDto>> {
    tracing::info!(
        status = ?query.status,
        priority = ?query.priority,
        wilaya = ?query.wilaya,
        "GET /api/issues/display"
    );
    ok(service.display_issues().into_iter().map(Into::into).collect())
}

/// Ten freshly generated stock issues
#[utoipa::path(
    get,
    path = "/api/issues/stock",
    tag = "Issues",
    params(StockIssuesQuery),
    responses((status = 200, description = "Stock issues", body = ApiResponseSchema))
)]
pub async fn list_stock_issues(
    Extension(service): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<StockIssuesQuery>,
) -> ApiResult<Vec<StockIssueDto>> {
    tracing::info!(priority = ?query.priority, wilaya = ?query.wilaya, "GET /api/issues/stock");
    ok(service.stock_issues().into_iter().map(Into::into).collect())
}

// ===== Settings =====

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses((status = 200, description = "Current settings", body = ApiResponseSchema))
)]
pub async fn get_settings(Extension(service): Extension<Arc<Service>>) -> ApiResult<SettingsDto> {
    tracing::info!("GET /api/settings");
    ok(service.settings().into())
}

#[utoipa::path(
    put,
    path = "/api/settings/notifications",
    tag = "Settings",
    request_body = UpdateNotificationsRequest,
    responses(
        (status = 200, description = "Updated notification settings", body = ApiResponseSchema),
        (status = 400, description = "Malformed body", body = ApiResponseSchema)
    )
)]
pub async fn update_notifications(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<UpdateNotificationsRequest>,
) -> ApiResult<NotificationsDto> {
    tracing::info!(body = ?req, "PUT /api/settings/notifications");
    ok(service.update_notifications(req.into()).into())
}

#[utoipa::path(
    put,
    path = "/api/settings/thresholds",
    tag = "Settings",
    request_body = UpdateThresholdsRequest,
    responses(
        (status = 200, description = "Updated thresholds", body = ApiResponseSchema),
        (status = 400, description = "Malformed body", body = ApiResponseSchema)
    )
)]
pub async fn update_thresholds(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<UpdateThresholdsRequest>,
) -> ApiResult<ThresholdsDto> {
    tracing::info!(body = ?req, "PUT /api/settings/thresholds");
    ok(service.update_thresholds(req.into()).into())
}

#[utoipa::path(
    put,
    path = "/api/settings/default-wilaya",
    tag = "Settings",
    request_body = DefaultWilayaRequest,
    responses(
        (status = 200, description = "Updated default wilaya", body = ApiResponseSchema),
        (status = 400, description = "Wilaya is required", body = ApiResponseSchema)
    )
)]
pub async fn set_default_wilaya(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<DefaultWilayaRequest>,
) -> ApiResult<DefaultWilayaDto> {
    tracing::info!(body = ?req, "PUT /api/settings/default-wilaya");
    let default_wilaya = service.set_default_wilaya(req.wilaya)?;
    ok(DefaultWilayaDto { default_wilaya })
}

#[utoipa::path(
    put,
    path = "/api/settings/display-preferences",
    tag = "Settings",
    request_body = UpdateDisplayPreferencesRequest,
    responses(
        (status = 200, description = "Updated display preferences", body = ApiResponseSchema),
        (status = 400, description = "Malformed body", body = ApiResponseSchema)
    )
)]
pub async fn update_display_preferences(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<UpdateDisplayPreferencesRequest>,
) -> ApiResult<DisplayPreferencesDto> {
    tracing::info!(body = ?req, "PUT /api/settings/display-preferences");
    ok(service.update_display_preferences(req.into()).into())
}

#[utoipa::path(
    post,
    path = "/api/settings/reset",
    tag = "Settings",
    responses((status = 200, description = "Default settings", body = ApiResponseSchema))
)]
pub async fn reset_settings(Extension(service): Extension<Arc<Service>>) -> ApiResult<SettingsDto> {
    tracing::info!("POST /api/settings/reset");
    let settings: SettingsDto = service.reset_settings().into();
    Ok(Json(
        ApiResponse::success(settings).with_message("Settings reset to default values"),
    ))
}

// ===== Products =====

#[utoipa::path(
    post,
    path = "/api/products/search",
    tag = "Products",
    request_body = ProductSearchRequest,
    responses(
        (status = 200, description = "Matching product families", body = ApiResponseSchema),
        (status = 400, description = "Description is required", body = ApiResponseSchema)
    )
)]
pub async fn search_products(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<ProductSearchRequest>,
) -> ApiResult<Vec<ProductSearchHitDto>> {
    tracing::info!(description = ?req.description, "POST /api/products/search");
    let hits = service.search_products_required(req.description)?;
    ok(hits.into_iter().map(Into::into).collect())
}

/// Echo product fields back as verified
#[utoipa::path(
    post,
    path = "/api/products/verify",
    tag = "Products",
    request_body = VerifyProductRequest,
    responses((status = 200, description = "Verification result", body = ApiResponseSchema))
)]
pub async fn verify_product(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<VerifyProductRequest>,
) -> ApiResult<ProductVerificationDto> {
    tracing::info!(input = ?req.input, "POST /api/products/verify");
    let input: VerificationInput = req.input.into();
    ok(service.verify_product(input).into())
}

/// Classify a product name; `data` is null when no family matches
#[utoipa::path(
    post,
    path = "/api/product/family",
    tag = "Products",
    request_body = ProductFamilyRequest,
    responses((status = 200, description = "Matched family or null", body = ApiResponseSchema))
)]
pub async fn find_product_family(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<ProductFamilyRequest>,
) -> ApiResult<Option<ProductMatchDto>> {
    tracing::info!(product_name = ?req.product_name, "POST /api/product/family");
    let product_name = req.product_name.unwrap_or_default();
    ok(service.find_product_family(&product_name).map(Into::into))
}

#[utoipa::path(
    get,
    path = "/api/products/families",
    tag = "Products",
    responses((status = 200, description = "Product family names in catalog order", body = ApiResponseSchema))
)]
pub async fn list_product_families(
    Extension(service): Extension<Arc<Service>>,
) -> ApiResult<Vec<String>> {
    tracing::info!("GET /api/products/families");
    ok(service.product_families())
}

#[utoipa::path(
    post,
    path = "/api/products/add",
    tag = "Products",
    request_body = AddProductRequest,
    responses((status = 200, description = "Category appended to the families", body = ApiResponseSchema))
)]
pub async fn add_product(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<AddProductRequest>,
) -> ApiResult<AddedProductDto> {
    tracing::info!(body = ?req, "POST /api/products/add");
    let product: NewProduct = req.into();
    let family = product.category.clone().unwrap_or_default();
    let total_families = service.add_product(product);
    Ok(Json(
        ApiResponse::success(AddedProductDto {
            family,
            total_families,
        })
        .with_message("Product added"),
    ))
}
