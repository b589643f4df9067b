//! View controller integration tests.
//!
//! Exercise tab selection, the not-found fallback and the derived tables
//! through the public API only.

use wxbench::analysis::{aggregate, filter_by_category, summary_drift, aggregate_all};
use wxbench::model::{LagCategory, MetricField, StudyCatalog, TabId};
use wxbench::view::{Dashboard, Selection, ViewBlock};

// ============================================================================
// Tab selection
// ============================================================================

mod selection {
    use super::*;

    #[test]
    fn every_descriptor_maps_to_its_block() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        for descriptor in &catalog.tabs {
            dashboard.select_tab(descriptor.id.as_str());
            let block = dashboard.render_active_view();
            assert_eq!(block.tab(), Some(descriptor.id));
            assert!(!block.is_not_found());
        }
    }

    #[test]
    fn blocks_are_distinct_per_tab() {
        let catalog = StudyCatalog::builtin();
        let dashboard = Dashboard::new(&catalog);
        let blocks = dashboard.render_all();

        assert_eq!(blocks.len(), TabId::ALL.len());
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_identifier_renders_fallback() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        dashboard.select_tab("nonexistent");
        assert_eq!(
            dashboard.selection(),
            &Selection::Unknown("nonexistent".to_string())
        );
        assert_eq!(
            dashboard.render_active_view(),
            ViewBlock::NotFound {
                id: "nonexistent".to_string()
            }
        );
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        dashboard.select_tab("Overview");
        assert!(dashboard.render_active_view().is_not_found());
    }

    #[test]
    fn reselecting_is_idempotent() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        dashboard.select_tab("comparison");
        let first = dashboard.render_active_view();
        dashboard.select_tab("comparison");
        let second = dashboard.render_active_view();

        assert_eq!(first, second);
        assert_eq!(dashboard.active_tab(), Some(TabId::Comparison));
    }

    #[test]
    fn fallback_recovers_on_valid_selection() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        dashboard.select_tab("");
        assert!(dashboard.render_active_view().is_not_found());
        dashboard.select_tab("data");
        assert!(matches!(dashboard.render_active_view(), ViewBlock::Data(_)));
    }

    #[test]
    fn cycling_from_fallback_lands_on_ends() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        dashboard.select_tab("nope");
        dashboard.next_tab();
        assert_eq!(dashboard.active_tab(), Some(TabId::Overview));

        dashboard.select_tab("nope");
        dashboard.prev_tab();
        assert_eq!(dashboard.active_tab(), Some(TabId::Data));
    }
}

// ============================================================================
// Derived tables
// ============================================================================

mod derived {
    use super::*;

    #[test]
    fn categories_partition_the_results() {
        let catalog = StudyCatalog::builtin();
        let without = filter_by_category(&catalog.models, LagCategory::WithoutLag);
        let with = filter_by_category(&catalog.models, LagCategory::WithLag);

        assert_eq!(without.len(), 3);
        assert_eq!(with.len(), 3);
        assert_eq!(without.len() + with.len(), catalog.models.len());
        for m in &without {
            assert!(!with.iter().any(|w| w.name == m.name));
        }
    }

    #[test]
    fn recomputed_means_match_the_table() {
        let catalog = StudyCatalog::builtin();
        let without = aggregate(&catalog.models, LagCategory::WithoutLag).unwrap();
        let with = aggregate(&catalog.models, LagCategory::WithLag).unwrap();

        assert!((without.mean_r2 - 0.6605).abs() < 1e-4);
        assert!((with.mean_r2 - 0.6201).abs() < 1e-4);
        assert!((with.mean_r2 - catalog.published.with_lag.r2).abs() <= 0.001);
    }

    #[test]
    fn published_without_lag_mean_is_reported_as_drift() {
        let catalog = StudyCatalog::builtin();
        let drift = summary_drift(&catalog.published, &aggregate_all(&catalog.models), 0.001);

        assert!(drift
            .iter()
            .any(|d| d.category == LagCategory::WithoutLag && d.field == MetricField::R2));
        assert!(!drift
            .iter()
            .any(|d| d.category == LagCategory::WithLag && d.field == MetricField::R2));
    }

    #[test]
    fn importances_sorted_and_bounded() {
        let catalog = StudyCatalog::builtin();
        for table in [&catalog.importance_without_lag, &catalog.importance_with_lag] {
            assert!(table
                .windows(2)
                .all(|w| w[0].importance >= w[1].importance));
            let sum: f64 = table.iter().map(|f| f.importance).sum();
            assert!(sum <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn builtin_catalog_is_well_formed() {
        assert!(StudyCatalog::builtin().validate().is_ok());
    }
}
