//! Property-based tests for tab selection.
//!
//! Arbitrary identifiers and navigation sequences must never panic and
//! must always leave the controller rendering a well-defined block.

use proptest::prelude::*;
use wxbench::model::{StudyCatalog, TabId};
use wxbench::view::{Dashboard, ViewBlock};

#[derive(Debug, Clone)]
enum Step {
    Select(String),
    Index(usize),
    Next,
    Prev,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "\\PC{0,24}".prop_map(Step::Select),
        prop::sample::select(TabId::ALL.to_vec()).prop_map(|t| Step::Select(t.as_str().to_string())),
        (0usize..12).prop_map(Step::Index),
        Just(Step::Next),
        Just(Step::Prev),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn select_tab_never_panics(id in "\\PC{0,64}") {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);
        dashboard.select_tab(&id);

        let block = dashboard.render_active_view();
        match TabId::from_id(&id) {
            Some(tab) => prop_assert_eq!(block.tab(), Some(tab)),
            None => prop_assert_eq!(block, ViewBlock::NotFound { id: id.clone() }),
        }
    }

    #[test]
    fn rendering_is_pure(steps in prop::collection::vec(step(), 0..32)) {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);

        for s in steps {
            match s {
                Step::Select(id) => dashboard.select_tab(&id),
                Step::Index(i) => {
                    let moved = dashboard.select_index(i);
                    prop_assert_eq!(moved, i < TabId::ALL.len());
                }
                Step::Next => dashboard.next_tab(),
                Step::Prev => dashboard.prev_tab(),
            }

            let first = dashboard.render_active_view();
            let second = dashboard.render_active_view();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.tab(), dashboard.active_tab());
        }
    }

    #[test]
    fn next_then_prev_returns_to_start(start in 0usize..7) {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);
        prop_assert!(dashboard.select_index(start));

        let before = dashboard.active_tab();
        dashboard.next_tab();
        dashboard.prev_tab();
        prop_assert_eq!(dashboard.active_tab(), before);
    }
}
