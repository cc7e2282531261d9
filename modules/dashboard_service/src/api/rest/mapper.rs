//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Location & team conversions =====

impl From<contract::SalesPointType> for SalesPointTypeDto {
    fn from(value: contract::SalesPointType) -> Self {
        match value {
            contract::SalesPointType::Premium => Self::Premium,
            contract::SalesPointType::Standard => Self::Standard,
            contract::SalesPointType::Basic => Self::Basic,
        }
    }
}

impl From<&contract::SalesPoint> for SalesPointDto {
    fn from(sp: &contract::SalesPoint) -> Self {
        Self {
            id: sp.id,
            name: sp.name.clone(),
            address: sp.address.clone(),
            point_type: sp.point_type.into(),
            wilaya: sp.wilaya.clone(),
            last_visit: sp.last_visit,
            display_score: sp.display_score,
        }
    }
}

impl From<&contract::Wilaya> for WilayaDto {
    fn from(w: &contract::Wilaya) -> Self {
        Self {
            id: w.id,
            name: w.name.clone(),
            sales_points_count: w.sales_points_count,
            active_displays: w.active_displays,
            compliance_rate: w.compliance_rate,
        }
    }
}

impl From<&contract::Merchandiser> for MerchandiserDto {
    fn from(m: &contract::Merchandiser) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            wilaya: m.wilaya.clone(),
            assigned_areas: m.assigned_areas,
            performance_score: m.performance_score,
        }
    }
}

impl From<&contract::Supervisor> for SupervisorDto {
    fn from(s: &contract::Supervisor) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            region: s.region.clone(),
            team_size: s.team_size,
            performance_score: s.performance_score,
        }
    }
}

// ===== Overview, stats & report conversions =====

impl From<contract::Overview> for OverviewDto {
    fn from(o: contract::Overview) -> Self {
        Self {
            display_presence_count: o.display_presence_count,
            active_sales_points: o.active_sales_points,
            shelf_share_percentage: o.shelf_share_percentage,
            display_compliance_rate: o.display_compliance_rate,
        }
    }
}

impl From<contract::TrendBucket> for TrendBucketDto {
    fn from(b: contract::TrendBucket) -> Self {
        Self {
            count: b.count,
            compliance: b.compliance,
        }
    }
}

impl From<contract::DisplayStats> for DisplayStatsDto {
    fn from(stats: contract::DisplayStats) -> Self {
        Self {
            trends: DisplayTrendsDto {
                premium: stats.trends.premium.into(),
                standard: stats.trends.standard.into(),
                basic: stats.trends.basic.into(),
            },
            wilaya_distribution: stats
                .wilaya_distribution
                .into_iter()
                .map(|d| WilayaDisplayCountDto {
                    wilaya: d.wilaya,
                    display_count: d.display_count,
                })
                .collect(),
        }
    }
}

impl From<contract::DailyReport> for DailyReportDto {
    fn from(r: contract::DailyReport) -> Self {
        Self {
            date: r.date,
            display_checks: r.display_checks,
            compliance_rate: r.compliance_rate,
            activities: r
                .activities
                .into_iter()
                .map(|a| ActivityCountDto {
                    kind: a.kind,
                    count: a.count,
                })
                .collect(),
        }
    }
}

impl From<contract::WeeklyReport> for WeeklyReportDto {
    fn from(r: contract::WeeklyReport) -> Self {
        Self {
            week_number: r.week_number,
            trends: WeeklyTrendsDto {
                compliance: r.trends.compliance,
                resolution: r.trends.resolution,
            },
            total_checks: r.total_checks,
        }
    }
}

impl From<contract::MonthlyReport> for MonthlyReportDto {
    fn from(r: contract::MonthlyReport) -> Self {
        Self {
            month: r.month,
            year: r.year,
            metrics: MonthlyMetricsDto {
                total_displays: r.metrics.total_displays,
                average_compliance: r.metrics.average_compliance,
            },
        }
    }
}

// ===== Issue conversions =====

impl From<contract::IssuePriority> for IssuePriorityDto {
    fn from(p: contract::IssuePriority) -> Self {
        match p {
            contract::IssuePriority::High => Self::High,
            contract::IssuePriority::Medium => Self::Medium,
            contract::IssuePriority::Low => Self::Low,
        }
    }
}

impl From<contract::DisplayIssue> for DisplayIssueDto {
    fn from(issue: contract::DisplayIssue) -> Self {
        Self {
            id: issue.id,
            kind: match issue.kind {
                contract::DisplayIssueKind::Broken => DisplayIssueKindDto::Broken,
                contract::DisplayIssueKind::Misplaced => DisplayIssueKindDto::Misplaced,
                contract::DisplayIssueKind::Missing => DisplayIssueKindDto::Missing,
            },
            priority: issue.priority.into(),
            status: match issue.status {
                contract::IssueStatus::Open => IssueStatusDto::Open,
                contract::IssueStatus::InProgress => IssueStatusDto::InProgress,
                contract::IssueStatus::Resolved => IssueStatusDto::Resolved,
            },
            location: issue.location,
            reported_at: issue.reported_at,
        }
    }
}

impl From<contract::StockIssue> for StockIssueDto {
    fn from(issue: contract::StockIssue) -> Self {
        Self {
            id: issue.id,
            product: issue.product,
            current_stock: issue.current_stock,
            required_stock: issue.required_stock,
            location: issue.location,
            priority: issue.priority.into(),
        }
    }
}

// ===== Settings conversions =====

impl From<contract::Frequency> for FrequencyDto {
    fn from(f: contract::Frequency) -> Self {
        match f {
            contract::Frequency::Daily => Self::Daily,
            contract::Frequency::Weekly => Self::Weekly,
            contract::Frequency::Monthly => Self::Monthly,
        }
    }
}

impl From<FrequencyDto> for contract::Frequency {
    fn from(f: FrequencyDto) -> Self {
        match f {
            FrequencyDto::Daily => Self::Daily,
            FrequencyDto::Weekly => Self::Weekly,
            FrequencyDto::Monthly => Self::Monthly,
        }
    }
}

impl From<contract::Notifications> for NotificationsDto {
    fn from(n: contract::Notifications) -> Self {
        Self {
            email: n.email,
            push: n.push,
            frequency: n.frequency.into(),
        }
    }
}

impl From<contract::Thresholds> for ThresholdsDto {
    fn from(t: contract::Thresholds) -> Self {
        Self {
            compliance: t.compliance,
            stock_level: t.stock_level,
            display_score: t.display_score,
        }
    }
}

impl From<contract::DisplayPreferences> for DisplayPreferencesDto {
    fn from(p: contract::DisplayPreferences) -> Self {
        Self {
            language: p.language,
            theme: p.theme,
            timezone: p.timezone,
        }
    }
}

impl From<contract::Settings> for SettingsDto {
    fn from(s: contract::Settings) -> Self {
        Self {
            notifications: s.notifications.into(),
            default_wilaya: s.default_wilaya,
            thresholds: s.thresholds.into(),
            display_preferences: s.display_preferences.into(),
        }
    }
}

impl From<UpdateNotificationsRequest> for contract::NotificationsPatch {
    fn from(req: UpdateNotificationsRequest) -> Self {
        Self {
            email: req.email,
            push: req.push,
            frequency: req.frequency.map(Into::into),
        }
    }
}

impl From<UpdateThresholdsRequest> for contract::ThresholdsPatch {
    fn from(req: UpdateThresholdsRequest) -> Self {
        Self {
            compliance: req.compliance,
            stock_level: req.stock_level,
            display_score: req.display_score,
        }
    }
}

impl From<UpdateDisplayPreferencesRequest> for contract::DisplayPreferencesPatch {
    fn from(req: UpdateDisplayPreferencesRequest) -> Self {
        Self {
            language: req.language,
            theme: req.theme,
            timezone: req.timezone,
        }
    }
}

// ===== Product conversions =====

impl From<contract::ProductMatch> for ProductMatchDto {
    fn from(m: contract::ProductMatch) -> Self {
        Self {
            product_name: m.product_name,
            family: m.family,
            confidence: m.confidence,
        }
    }
}

impl From<contract::ProductSearchHit> for ProductSearchHitDto {
    fn from(hit: contract::ProductSearchHit) -> Self {
        Self {
            name: hit.name,
            family: hit.family,
            confidence: hit.confidence,
        }
    }
}

impl From<EchoValueDto> for contract::EchoValue {
    fn from(value: EchoValueDto) -> Self {
        match value {
            EchoValueDto::Text(s) => Self::Text(s),
            EchoValueDto::Integer(n) => Self::Integer(n),
            EchoValueDto::Number(n) => Self::Number(n),
            EchoValueDto::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<contract::EchoValue> for EchoValueDto {
    fn from(value: contract::EchoValue) -> Self {
        match value {
            contract::EchoValue::Text(s) => Self::Text(s),
            contract::EchoValue::Integer(n) => Self::Integer(n),
            contract::EchoValue::Number(n) => Self::Number(n),
            contract::EchoValue::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<Option<VerificationInputBody>> for contract::VerificationInput {
    fn from(body: Option<VerificationInputBody>) -> Self {
        match body {
            Some(VerificationInputBody::Fields(dto)) => Self {
                id: dto.id.map(Into::into),
                name: dto.name.map(Into::into),
                quantity: dto.quantity,
                size: dto.size,
                flavor: dto.flavor,
                brand: dto.brand,
            },
            Some(VerificationInputBody::Text(_)) | None => Self::default(),
        }
    }
}

impl From<contract::ProductVerification> for ProductVerificationDto {
    fn from(v: contract::ProductVerification) -> Self {
        Self {
            id: v.id.map(Into::into),
            name: v.name.map(Into::into),
            verified: v.verified,
            details: VerificationDetailsDto {
                quantity: v.details.quantity,
                size: v.details.size,
                flavor: v.details.flavor,
                brand: v.details.brand,
                match_confidence: v.details.match_confidence,
            },
        }
    }
}

impl From<AddProductRequest> for contract::NewProduct {
    fn from(req: AddProductRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            description: req.description,
            category: req.category,
        }
    }
}
