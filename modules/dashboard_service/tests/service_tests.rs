//! Integration tests for the dashboard domain service and native client
//!
//! Mock collections are shape-checked, not value-checked.

use dashboard_service::contract::*;
use dashboard_service::domain::product_catalog::DEFAULT_FAMILIES;
use dashboard_service::domain::{ProductCatalog, Service, SettingsStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

mod common;
use common::{print_test_header, seeded_module, TEST_SEED};

fn seeded_service() -> Service {
    Service::with_parts(
        StdRng::seed_from_u64(TEST_SEED),
        SettingsStore::default(),
        ProductCatalog::default(),
    )
}

#[tokio::test]
async fn test_mock_cardinalities() {
    print_test_header(
        "test_mock_cardinalities",
        "Startup collections have fixed sizes",
    );
    let service = Service::new(&dashboard_service::config::Config::default());

    assert_eq!(service.sales_points().len(), 50);
    assert_eq!(service.wilayas().len(), 48);
    assert_eq!(service.merchandisers().len(), 20);
    assert_eq!(service.supervisors().len(), 10);
    assert_eq!(service.display_stats().wilaya_distribution.len(), 48);
}

#[tokio::test]
async fn test_dataset_is_stable_but_issues_are_fresh() {
    print_test_header(
        "test_dataset_is_stable_but_issues_are_fresh",
        "Locations are generated once; issues are regenerated per call",
    );
    let service = seeded_service();

    let first = service.sales_points().to_vec();
    let _ = service.display_issues();
    assert_eq!(service.sales_points(), &first[..]);

    let batches: Vec<Vec<StockIssue>> = (0..5).map(|_| service.stock_issues()).collect();
    assert!(batches.iter().all(|b| b.len() == 10));
    assert!(
        batches.windows(2).any(|w| w[0] != w[1]),
        "stock issues should vary between calls"
    );
}

#[tokio::test]
async fn test_same_seed_same_dataset() {
    print_test_header(
        "test_same_seed_same_dataset",
        "A pinned seed reproduces the team and wilaya data",
    );
    let a = seeded_service();
    let b = seeded_service();
    assert_eq!(a.wilayas(), b.wilayas());
    assert_eq!(a.merchandisers(), b.merchandisers());
    assert_eq!(a.supervisors(), b.supervisors());
}

#[tokio::test]
async fn test_settings_partial_merge() {
    print_test_header(
        "test_settings_partial_merge",
        "Fields absent from an update keep their previous values",
    );
    let service = seeded_service();

    service.update_notifications(NotificationsPatch {
        frequency: Some(Frequency::Weekly),
        ..Default::default()
    });
    service.update_thresholds(ThresholdsPatch {
        compliance: Some(60.0),
        display_score: Some(90.0),
        ..Default::default()
    });
    service.update_display_preferences(DisplayPreferencesPatch {
        language: Some("fr".into()),
        ..Default::default()
    });

    let settings = service.settings();
    let defaults = Settings::default();
    assert_eq!(settings.notifications.email, defaults.notifications.email);
    assert_eq!(settings.notifications.push, defaults.notifications.push);
    assert_eq!(settings.notifications.frequency, Frequency::Weekly);
    assert_eq!(settings.thresholds.compliance, 60.0);
    assert_eq!(settings.thresholds.stock_level, 25.0);
    assert_eq!(settings.thresholds.display_score, 90.0);
    assert_eq!(settings.display_preferences.language, "fr");
    assert_eq!(settings.display_preferences.theme, "light");
    assert_eq!(settings.display_preferences.timezone, "Africa/Algiers");
    assert_eq!(settings.default_wilaya, "Wilaya 16");
}

#[tokio::test]
async fn test_reset_after_changes() {
    print_test_header("test_reset_after_changes", "reset() always yields the defaults");
    let service = seeded_service();
    service.set_default_wilaya(Some("Wilaya 9".into())).unwrap();
    service.update_notifications(NotificationsPatch {
        email: Some(false),
        push: Some(false),
        frequency: Some(Frequency::Monthly),
    });

    assert_eq!(service.reset_settings(), Settings::default());
    assert_eq!(service.reset_settings(), Settings::default());
    assert_eq!(service.settings(), Settings::default());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_are_not_lost() {
    print_test_header(
        "test_concurrent_updates_are_not_lost",
        "Merges on different fields from many tasks all land",
    );
    let service = Arc::new(seeded_service());

    let mut handles = Vec::new();
    for i in 0..50 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                service.update_thresholds(ThresholdsPatch {
                    compliance: Some(1.0),
                    ..Default::default()
                });
            } else {
                service.update_thresholds(ThresholdsPatch {
                    stock_level: Some(2.0),
                    ..Default::default()
                });
            }
            service.add_product(NewProduct {
                category: Some(format!("Family {i}")),
                ..Default::default()
            });
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let thresholds = service.settings().thresholds;
    assert_eq!(thresholds.compliance, 1.0);
    assert_eq!(thresholds.stock_level, 2.0);
    assert_eq!(thresholds.display_score, 80.0);
    assert_eq!(service.product_families().len(), DEFAULT_FAMILIES.len() + 50);
}

#[tokio::test]
async fn test_product_matching_properties() {
    print_test_header(
        "test_product_matching_properties",
        "Keyword-subset match, no-match, and search behaviour",
    );
    let service = seeded_service();

    let m = service.find_product_family("PET Extra Peche 30 CL").unwrap();
    assert_eq!(m.family, "PET Extra 30 CL");
    assert_eq!(m.confidence, 1.0);
    assert!(service.find_product_family("nonexistent item xyz").is_none());

    assert_eq!(service.search_products("").len(), DEFAULT_FAMILIES.len());
    let ramy = service.search_products("ramy");
    assert!(ramy.iter().all(|h| h.name.to_lowercase().contains("ramy")));
    assert!(ramy.iter().any(|h| h.name == "Ramy UP 20 CL"));

    assert!(service.search_products_required(None).is_err());
    assert!(service.search_products_required(Some(String::new())).is_err());
    assert_eq!(
        service.search_products_required(Some("ramy".into())).unwrap(),
        ramy
    );
}

#[tokio::test]
async fn test_added_family_becomes_matchable() {
    print_test_header(
        "test_added_family_becomes_matchable",
        "add_product appends to the end of the catalog in order",
    );
    let service = seeded_service();
    let before = service.product_families();

    let len = service.add_product(NewProduct {
        name: Some("Ramy Orange 1L".into()),
        category: Some("X".into()),
        ..Default::default()
    });

    let after = service.product_families();
    assert_eq!(len, before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap(), "X");
    assert!(service.search_products("x").iter().any(|h| h.family == "X"));
}

#[tokio::test]
async fn test_native_client_shares_state_with_module() {
    print_test_header(
        "test_native_client_shares_state_with_module",
        "The DashboardApi client and a second client observe the same store",
    );
    let module = seeded_module();
    let client = module.client().unwrap();
    let other = module.client().unwrap();

    let err = client.set_default_wilaya(Some(String::new())).await.unwrap_err();
    assert_eq!(err, DashboardError::validation("Wilaya is required"));

    let wilaya = client
        .set_default_wilaya(Some("Wilaya 5".into()))
        .await
        .unwrap();
    assert_eq!(wilaya, "Wilaya 5");
    assert_eq!(other.get_settings().await.unwrap().default_wilaya, "Wilaya 5");

    let prefs = client
        .update_display_preferences(DisplayPreferencesPatch {
            theme: Some("dark".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(prefs.theme, "dark");
    assert_eq!(prefs.language, "en");

    let verification = client
        .verify_product(VerificationInput {
            name: Some("Ramy Orange 1L".into()),
            quantity: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(verification.verified);
    assert_eq!(verification.details.quantity, 3);
    assert_eq!(verification.details.flavor, "");

    let total = client
        .add_product(NewProduct {
            category: Some("Ramy Orange 1 L".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(other.list_product_families().await.unwrap().len(), total);

    assert_eq!(other.reset_settings().await.unwrap(), Settings::default());
    assert_eq!(client.get_settings().await.unwrap(), Settings::default());

    let hits = client.search_products("frutty").await.unwrap();
    assert!(!hits.is_empty());
    let m = client.find_product_family("Pack Frutty 1 L orange").await.unwrap();
    assert!(m.is_some());
}
