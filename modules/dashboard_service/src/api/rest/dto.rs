//! REST DTOs with serde derives for HTTP API
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Envelope =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// OpenAPI shape of [`ApiResponse`]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiResponseSchema {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[schema(value_type = Object)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ===== Query DTOs =====
// Filters are accepted and logged but never applied.

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SalesPointsQuery {
    /// Filter by wilaya
    pub wilaya: Option<String>,
    /// Filter by sales point type
    #[serde(rename = "type")]
    pub point_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MerchandisersQuery {
    /// Filter by wilaya
    pub wilaya: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailyReportQuery {
    /// Report date (YYYY-MM-DD)
    pub date: Option<String>,
    pub wilaya: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WeeklyReportQuery {
    /// Week start date (YYYY-MM-DD)
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthlyReportQuery {
    /// Month (1-12)
    pub month: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DisplayIssuesQuery {
    /// open, in_progress or resolved
    pub status: Option<String>,
    /// high, medium or low
    pub priority: Option<String>,
    pub wilaya: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockIssuesQuery {
    pub priority: Option<String>,
    pub wilaya: Option<String>,
}

// ===== Location & team DTOs =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SalesPointTypeDto {
    Premium,
    Standard,
    Basic,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesPointDto {
    pub id: u32,
    #[schema(example = "Sales Point 1")]
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub point_type: SalesPointTypeDto,
    #[schema(example = "Wilaya 16")]
    pub wilaya: String,
    pub last_visit: DateTime<Utc>,
    pub display_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WilayaDto {
    pub id: u32,
    pub name: String,
    pub sales_points_count: u32,
    pub active_displays: u32,
    pub compliance_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiserDto {
    pub id: u32,
    pub name: String,
    pub wilaya: String,
    pub assigned_areas: u32,
    pub performance_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorDto {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub team_size: u32,
    pub performance_score: u32,
}

// ===== Overview & stats DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub display_presence_count: u32,
    pub active_sales_points: u32,
    pub shelf_share_percentage: f64,
    pub display_compliance_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrendBucketDto {
    pub count: u32,
    pub compliance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisplayTrendsDto {
    pub premium: TrendBucketDto,
    pub standard: TrendBucketDto,
    pub basic: TrendBucketDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WilayaDisplayCountDto {
    pub wilaya: String,
    pub display_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStatsDto {
    pub trends: DisplayTrendsDto,
    pub wilaya_distribution: Vec<WilayaDisplayCountDto>,
}

// ===== Report DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityCountDto {
    #[serde(rename = "type")]
    #[schema(example = "display_setup")]
    pub kind: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportDto {
    pub date: NaiveDate,
    pub display_checks: u32,
    pub compliance_rate: u32,
    pub activities: Vec<ActivityCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyTrendsDto {
    pub compliance: u32,
    pub resolution: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportDto {
    pub week_number: u32,
    pub trends: WeeklyTrendsDto,
    pub total_checks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetricsDto {
    pub total_displays: u32,
    pub average_compliance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyReportDto {
    pub month: u32,
    pub year: i32,
    pub metrics: MonthlyMetricsDto,
}

// ===== Issue DTOs =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisplayIssueKindDto {
    Broken,
    Misplaced,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriorityDto {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatusDto {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayIssueDto {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: DisplayIssueKindDto,
    pub priority: IssuePriorityDto,
    pub status: IssueStatusDto,
    pub location: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockIssueDto {
    pub id: u32,
    pub product: String,
    pub current_stock: u32,
    pub required_stock: u32,
    pub location: String,
    pub priority: IssuePriorityDto,
}

// ===== Settings DTOs =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyDto {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationsDto {
    pub email: bool,
    pub push: bool,
    pub frequency: FrequencyDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdsDto {
    pub compliance: f64,
    pub stock_level: f64,
    pub display_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisplayPreferencesDto {
    #[schema(example = "en")]
    pub language: String,
    #[schema(example = "light")]
    pub theme: String,
    #[schema(example = "Africa/Algiers")]
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub notifications: NotificationsDto,
    pub default_wilaya: String,
    pub thresholds: ThresholdsDto,
    pub display_preferences: DisplayPreferencesDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefaultWilayaDto {
    pub default_wilaya: String,
}

/// Notification settings update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateNotificationsRequest {
    pub email: Option<bool>,
    pub push: Option<bool>,
    pub frequency: Option<FrequencyDto>,
}

/// Threshold update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThresholdsRequest {
    pub compliance: Option<f64>,
    pub stock_level: Option<f64>,
    pub display_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DefaultWilayaRequest {
    #[schema(example = "Wilaya 16")]
    pub wilaya: Option<String>,
}

/// Display preference update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateDisplayPreferencesRequest {
    pub language: Option<String>,
    pub theme: Option<String>,
    pub timezone: Option<String>,
}

// ===== Product DTOs =====

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductSearchRequest {
    #[schema(example = "ramy")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSearchHitDto {
    pub name: String,
    pub family: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFamilyRequest {
    #[schema(example = "PET Extra Peche 30 CL")]
    pub product_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductMatchDto {
    pub product_name: String,
    pub family: String,
    pub confidence: f64,
}

/// Any JSON scalar; echoed back unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EchoValueDto {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VerificationInputDto {
    pub id: Option<EchoValueDto>,
    pub name: Option<EchoValueDto>,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub flavor: Option<String>,
    pub brand: Option<String>,
}

/// Structured product fields, or a free-text description carrying none
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum VerificationInputBody {
    Fields(VerificationInputDto),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VerifyProductRequest {
    pub input: Option<VerificationInputBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDetailsDto {
    pub quantity: u32,
    pub size: String,
    pub flavor: String,
    pub brand: String,
    pub match_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductVerificationDto {
    pub id: Option<EchoValueDto>,
    pub name: Option<EchoValueDto>,
    pub verified: bool,
    pub details: VerificationDetailsDto,
}

/// Product to add; only `category` is stored, as a new family name
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddProductRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "Ramy Orange 1 L")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddedProductDto {
    pub family: String,
    pub total_families: usize,
}

// Note: Conversion implementations live in mapper.rs
