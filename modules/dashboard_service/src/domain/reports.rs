//! Canned overview, stats and report payloads

use crate::contract::{
    ActivityCount, DailyReport, DisplayStats, DisplayTrends, MonthlyMetrics, MonthlyReport,
    Overview, TrendBucket, WeeklyReport, WeeklyTrends, Wilaya, WilayaDisplayCount,
};
use chrono::{DateTime, Datelike, Utc};

pub fn overview() -> Overview {
    Overview {
        display_presence_count: 1250,
        active_sales_points: 850,
        shelf_share_percentage: 65.5,
        display_compliance_rate: 78.2,
    }
}

/// Fixed tier trends plus the active display count of each wilaya
pub fn display_stats(wilayas: &[Wilaya]) -> DisplayStats {
    DisplayStats {
        trends: DisplayTrends {
            premium: TrendBucket {
                count: 450,
                compliance: 85,
            },
            standard: TrendBucket {
                count: 550,
                compliance: 75,
            },
            basic: TrendBucket {
                count: 250,
                compliance: 65,
            },
        },
        wilaya_distribution: wilayas
            .iter()
            .map(|w| WilayaDisplayCount {
                wilaya: w.name.clone(),
                display_count: w.active_displays,
            })
            .collect(),
    }
}

/// Report for the current UTC day; the requested date is not honoured
pub fn daily_report(now: DateTime<Utc>) -> DailyReport {
    let activity = |kind: &str, count| ActivityCount {
        kind: kind.to_string(),
        count,
    };
    DailyReport {
        date: now.date_naive(),
        display_checks: 125,
        compliance_rate: 82,
        activities: vec![
            activity("display_setup", 45),
            activity("maintenance", 65),
            activity("compliance_check", 15),
        ],
    }
}

pub fn weekly_report() -> WeeklyReport {
    WeeklyReport {
        week_number: 15,
        trends: WeeklyTrends {
            compliance: 78,
            resolution: 85,
        },
        total_checks: 875,
    }
}

/// Report for the current month regardless of the requested month/year
pub fn monthly_report(now: DateTime<Utc>) -> MonthlyReport {
    MonthlyReport {
        month: now.month(),
        year: now.year(),
        metrics: MonthlyMetrics {
            total_displays: 1250,
            average_compliance: 80,
        },
    }
}
