//! Randomized mock data
//!
//! The [`MockDataset`] is generated once when the service starts and served
//! unchanged afterwards. Issue lists are synthesized per request.

use crate::contract::{
    DisplayIssue, DisplayIssueKind, IssuePriority, IssueStatus, Merchandiser, SalesPoint,
    SalesPointType, StockIssue, Supervisor, Wilaya,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const SALES_POINT_COUNT: u32 = 50;
pub const WILAYA_COUNT: u32 = 48;
pub const MERCHANDISER_COUNT: u32 = 20;
pub const SUPERVISOR_COUNT: u32 = 10;
pub const REGION_COUNT: u32 = 5;
pub const ISSUES_PER_REQUEST: u32 = 10;
pub const REQUIRED_STOCK: u32 = 100;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Collections generated at startup
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub sales_points: Vec<SalesPoint>,
    pub wilayas: Vec<Wilaya>,
    pub merchandisers: Vec<Merchandiser>,
    pub supervisors: Vec<Supervisor>,
}

impl MockDataset {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        let sales_points = (1..=SALES_POINT_COUNT)
            .map(|id| SalesPoint {
                id,
                name: format!("Sales Point {id}"),
                address: format!("Address {id}, Algeria"),
                point_type: pick(rng, &SalesPointType::ALL),
                wilaya: random_wilaya(rng),
                last_visit: now - Duration::milliseconds(rng.random_range(0..30 * DAY_MS)),
                display_score: rng.random_range(0..100),
            })
            .collect();

        let wilayas = (1..=WILAYA_COUNT)
            .map(|id| Wilaya {
                id,
                name: format!("Wilaya {id}"),
                sales_points_count: rng.random_range(0..100),
                active_displays: rng.random_range(0..80),
                compliance_rate: rng.random_range(0..100),
            })
            .collect();

        let merchandisers = (1..=MERCHANDISER_COUNT)
            .map(|id| Merchandiser {
                id,
                name: format!("Merchandiser {id}"),
                wilaya: random_wilaya(rng),
                assigned_areas: rng.random_range(1..=5),
                performance_score: rng.random_range(0..100),
            })
            .collect();

        let supervisors = (1..=SUPERVISOR_COUNT)
            .map(|id| Supervisor {
                id,
                name: format!("Supervisor {id}"),
                region: format!("Region {}", rng.random_range(1..=REGION_COUNT)),
                team_size: rng.random_range(1..=10),
                performance_score: rng.random_range(0..100),
            })
            .collect();

        Self {
            sales_points,
            wilayas,
            merchandisers,
            supervisors,
        }
    }
}

/// Fresh display issues reported within the last week
pub fn display_issues<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<DisplayIssue> {
    (1..=ISSUES_PER_REQUEST)
        .map(|id| DisplayIssue {
            id,
            kind: pick(rng, &DisplayIssueKind::ALL),
            priority: pick(rng, &IssuePriority::ALL),
            status: pick(rng, &IssueStatus::ALL),
            location: random_sales_point(rng),
            reported_at: now - Duration::milliseconds(rng.random_range(0..7 * DAY_MS)),
        })
        .collect()
}

pub fn stock_issues<R: Rng + ?Sized>(rng: &mut R) -> Vec<StockIssue> {
    (1..=ISSUES_PER_REQUEST)
        .map(|id| StockIssue {
            id,
            product: format!("Product {id}"),
            current_stock: rng.random_range(0..50),
            required_stock: REQUIRED_STOCK,
            location: random_sales_point(rng),
            priority: pick(rng, &IssuePriority::ALL),
        })
        .collect()
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, values: &[T]) -> T {
    values[rng.random_range(0..values.len())]
}

fn random_wilaya<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Wilaya {}", rng.random_range(1..=WILAYA_COUNT))
}

fn random_sales_point<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Sales Point {}", rng.random_range(1..=SALES_POINT_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(seed: u64) -> MockDataset {
        let mut rng = StdRng::seed_from_u64(seed);
        MockDataset::generate(&mut rng, Utc::now())
    }

    #[test]
    fn test_cardinalities() {
        let data = dataset(7);
        assert_eq!(data.sales_points.len(), 50);
        assert_eq!(data.wilayas.len(), 48);
        assert_eq!(data.merchandisers.len(), 20);
        assert_eq!(data.supervisors.len(), 10);
    }

    #[test]
    fn test_same_seed_same_data() {
        let now = Utc::now();
        let a = MockDataset::generate(&mut StdRng::seed_from_u64(42), now);
        let b = MockDataset::generate(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(a.sales_points, b.sales_points);
        assert_eq!(a.wilayas, b.wilayas);
        assert_eq!(a.merchandisers, b.merchandisers);
        assert_eq!(a.supervisors, b.supervisors);
    }

    #[test]
    fn test_field_ranges() {
        let now = Utc::now();
        let data = MockDataset::generate(&mut StdRng::seed_from_u64(3), now);

        for (i, sp) in data.sales_points.iter().enumerate() {
            assert_eq!(sp.id as usize, i + 1);
            assert_eq!(sp.name, format!("Sales Point {}", i + 1));
            assert!(sp.display_score < 100);
            assert!(sp.last_visit <= now);
            assert!(sp.last_visit > now - Duration::days(30));
            let n: u32 = sp.wilaya.trim_start_matches("Wilaya ").parse().unwrap();
            assert!((1..=48).contains(&n));
        }
        for (i, w) in data.wilayas.iter().enumerate() {
            assert_eq!(w.name, format!("Wilaya {}", i + 1));
            assert!(w.sales_points_count < 100);
            assert!(w.active_displays < 80);
            assert!(w.compliance_rate < 100);
        }
        for m in &data.merchandisers {
            assert!((1..=5).contains(&m.assigned_areas));
            assert!(m.performance_score < 100);
        }
        for s in &data.supervisors {
            assert!((1..=10).contains(&s.team_size));
            assert!(s.region.starts_with("Region "));
        }
    }

    #[test]
    fn test_issue_shapes() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);

        let display = display_issues(&mut rng, now);
        assert_eq!(display.len(), 10);
        assert!(display
            .iter()
            .all(|i| i.reported_at <= now && i.reported_at > now - Duration::days(7)));

        let stock = stock_issues(&mut rng);
        assert_eq!(stock.len(), 10);
        assert_eq!(stock[2].product, "Product 3");
        assert!(stock
            .iter()
            .all(|i| i.current_stock < 50 && i.required_stock == 100));
    }
}
