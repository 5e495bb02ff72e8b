//! Property tests for the filter / partition / slice pipeline.

use leptos_disclosure::{
    apply_filter, derive_categories, partition_featured, reveal_more, visible_slice, CatalogItem,
    DisclosureState, Filter,
};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: String,
    category: Option<String>,
    featured: bool,
}

impl CatalogItem for Entry {
    fn id(&self) -> &str {
        &self.id
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    fn is_featured(&self) -> bool {
        self.featured
    }
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Entry>> {
    let category = prop_oneof![
        Just(None),
        Just(Some("web".to_string())),
        Just(Some("fintech".to_string())),
        Just(Some("medical".to_string())),
        Just(Some("iot".to_string())),
    ];
    prop::collection::vec((category, any::<bool>()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, featured))| Entry {
                id: format!("item-{i}"),
                category,
                featured,
            })
            .collect()
    })
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("web".to_string()),
        Just("fintech".to_string()),
        Just("medical".to_string()),
        Just("unknown".to_string()),
    ]
}

proptest! {
    #[test]
    fn filter_keeps_only_matching_category(catalog in catalog_strategy(), label in label_strategy()) {
        let filtered = apply_filter(&catalog, &Filter::from_label(&label));
        prop_assert!(filtered.len() <= catalog.len());
        prop_assert!(filtered.iter().all(|e| e.category.as_deref() == Some(label.as_str())));
    }

    #[test]
    fn filter_all_is_identity(catalog in catalog_strategy()) {
        let filtered: Vec<Entry> = apply_filter(&catalog, &Filter::All).into_iter().cloned().collect();
        prop_assert_eq!(filtered, catalog);
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive(catalog in catalog_strategy()) {
        let all = apply_filter(&catalog, &Filter::All);
        let (featured, regular) = partition_featured(&all);
        prop_assert_eq!(featured.len() + regular.len(), catalog.len());
        prop_assert!(featured.iter().all(|e| e.featured));
        prop_assert!(regular.iter().all(|e| !e.featured));
        prop_assert!(featured.iter().all(|f| regular.iter().all(|r| r.id != f.id)));
    }

    #[test]
    fn categories_start_with_all_and_are_distinct(catalog in catalog_strategy()) {
        let categories = derive_categories(&catalog);
        prop_assert_eq!(&categories[0], &Filter::All);
        for (i, a) in categories.iter().enumerate() {
            prop_assert!(categories[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn visible_slice_is_idempotent(catalog in catalog_strategy(), cursor in 0usize..50) {
        let first = visible_slice(&catalog, cursor).to_vec();
        let second = visible_slice(&catalog, cursor).to_vec();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), cursor.min(catalog.len()));
    }

    #[test]
    fn reveal_more_is_monotonic_and_saturating(page in 1usize..10, total in 0usize..60, clicks in 0usize..20) {
        let mut cursor = page;
        for _ in 0..clicks {
            let next = reveal_more(cursor, page, total);
            prop_assert!(next >= cursor);
            prop_assert!(next <= total.max(page));
            cursor = next;
        }
    }

    #[test]
    fn switching_filter_resets_cursor(page in 1usize..10, clicks in 0usize..10, label in label_strategy()) {
        let mut state = DisclosureState::new(page);
        for _ in 0..clicks {
            state.reveal_more(1_000);
        }
        state.select_category(&label);
        prop_assert_eq!(state.cursor(), page);
        state.select_category("all");
        prop_assert_eq!(state.cursor(), page);
    }

    #[test]
    fn derive_is_stable(catalog in catalog_strategy(), label in label_strategy(), clicks in 0usize..4) {
        let mut state = DisclosureState::new(6);
        for _ in 0..clicks {
            let total = state.derive(&catalog).total;
            state.reveal_more(total);
        }
        prop_assert_eq!(state.derive(&catalog), state.derive(&catalog));
        state.select_category(&label);
        prop_assert_eq!(state.derive(&catalog), state.derive(&catalog));
    }
}
