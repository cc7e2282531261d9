//! Contract models for the dashboard service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - REST DTOs live in `api::rest::dto`.

use chrono::{DateTime, NaiveDate, Utc};

// ===== Locations =====

/// Retail location tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesPointType {
    Premium,
    Standard,
    Basic,
}

impl SalesPointType {
    pub const ALL: [SalesPointType; 3] = [Self::Premium, Self::Standard, Self::Basic];
}

/// Retail location record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesPoint {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub point_type: SalesPointType,
    /// Opaque wilaya label, not checked against the wilaya list
    pub wilaya: String,
    pub last_visit: DateTime<Utc>,
    /// 0..100
    pub display_score: u32,
}

/// Administrative region summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wilaya {
    pub id: u32,
    pub name: String,
    pub sales_points_count: u32,
    pub active_displays: u32,
    /// 0..100
    pub compliance_rate: u32,
}

// ===== Team =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merchandiser {
    pub id: u32,
    pub name: String,
    pub wilaya: String,
    pub assigned_areas: u32,
    pub performance_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supervisor {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub team_size: u32,
    pub performance_score: u32,
}

// ===== Overview & stats =====

/// Headline dashboard metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub display_presence_count: u32,
    pub active_sales_points: u32,
    pub shelf_share_percentage: f64,
    pub display_compliance_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendBucket {
    pub count: u32,
    pub compliance: u32,
}

/// Display counts per sales point tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTrends {
    pub premium: TrendBucket,
    pub standard: TrendBucket,
    pub basic: TrendBucket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WilayaDisplayCount {
    pub wilaya: String,
    pub display_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStats {
    pub trends: DisplayTrends,
    pub wilaya_distribution: Vec<WilayaDisplayCount>,
}

// ===== Reports =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCount {
    /// Activity kind, e.g. `display_setup`
    pub kind: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub display_checks: u32,
    pub compliance_rate: u32,
    pub activities: Vec<ActivityCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyTrends {
    pub compliance: u32,
    pub resolution: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyReport {
    pub week_number: u32,
    pub trends: WeeklyTrends,
    pub total_checks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyMetrics {
    pub total_displays: u32,
    pub average_compliance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    /// 1..=12
    pub month: u32,
    pub year: i32,
    pub metrics: MonthlyMetrics,
}

// ===== Issues =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayIssueKind {
    Broken,
    Misplaced,
    Missing,
}

impl DisplayIssueKind {
    pub const ALL: [DisplayIssueKind; 3] = [Self::Broken, Self::Misplaced, Self::Missing];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuePriority {
    High,
    Medium,
    Low,
}

impl IssuePriority {
    pub const ALL: [IssuePriority; 3] = [Self::High, Self::Medium, Self::Low];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [Self::Open, Self::InProgress, Self::Resolved];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIssue {
    pub id: u32,
    pub kind: DisplayIssueKind,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub location: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockIssue {
    pub id: u32,
    pub product: String,
    pub current_stock: u32,
    pub required_stock: u32,
    pub location: String,
    pub priority: IssuePriority,
}

// ===== Settings =====

/// Notification digest frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    pub email: bool,
    pub push: bool,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub compliance: f64,
    pub stock_level: f64,
    pub display_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub language: String,
    pub theme: String,
    pub timezone: String,
}

/// Dashboard-wide user settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub notifications: Notifications,
    pub default_wilaya: String,
    pub thresholds: Thresholds,
    pub display_preferences: DisplayPreferences,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: Notifications {
                email: true,
                push: true,
                frequency: Frequency::Daily,
            },
            default_wilaya: "Wilaya 16".to_string(),
            thresholds: Thresholds {
                compliance: 75.0,
                stock_level: 25.0,
                display_score: 80.0,
            },
            display_preferences: DisplayPreferences {
                language: "en".to_string(),
                theme: "light".to_string(),
                timezone: "Africa/Algiers".to_string(),
            },
        }
    }
}

/// Partial update for [`Notifications`]; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationsPatch {
    pub email: Option<bool>,
    pub push: Option<bool>,
    pub frequency: Option<Frequency>,
}

/// Partial update for [`Thresholds`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdsPatch {
    pub compliance: Option<f64>,
    pub stock_level: Option<f64>,
    pub display_score: Option<f64>,
}

/// Partial update for [`DisplayPreferences`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPreferencesPatch {
    pub language: Option<String>,
    pub theme: Option<String>,
    pub timezone: Option<String>,
}

// ===== Products =====

/// Result of classifying a free-form product name
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMatch {
    pub product_name: String,
    pub family: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchHit {
    pub name: String,
    pub family: String,
    pub confidence: f64,
}

/// Scalar value echoed back exactly as submitted
#[derive(Debug, Clone, PartialEq)]
pub enum EchoValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

impl From<&str> for EchoValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EchoValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for EchoValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Product fields submitted for verification; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationInput {
    pub id: Option<EchoValue>,
    pub name: Option<EchoValue>,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub flavor: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDetails {
    pub quantity: u32,
    pub size: String,
    pub flavor: String,
    pub brand: String,
    pub match_confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductVerification {
    pub id: Option<EchoValue>,
    pub name: Option<EchoValue>,
    pub verified: bool,
    pub details: VerificationDetails,
}

/// Product submitted to the catalog; only `category` is retained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
