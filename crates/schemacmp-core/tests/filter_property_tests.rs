#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use schemacmp_core::diff::compare_category;
use schemacmp_core::filter::{ElementFilter, FilterSet};
use schemacmp_core::model::{Category, Side};
use std::collections::BTreeSet;

fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop_oneof![
            "[a-z_][a-z0-9_]{0,10}",
            Just("tenants".to_string()),
            Just("extensions".to_string()),
            Just("schema_migrations".to_string()),
            Just("get_auth".to_string()),
            "idx_[a-z]{1,8}",
        ],
        0..24,
    )
}

proptest! {
    #[test]
    fn prop_filters_are_idempotent(names in name_set()) {
        let filters = FilterSet::default();
        for category in Category::ALL {
            for side in [Side::Local, Side::Complete] {
                let once = filters.filter_set(category, side, &names);
                let twice = filters.filter_set(category, side, &once);
                prop_assert_eq!(&once, &twice);
                prop_assert!(once.is_subset(&names));
            }
        }
    }

    #[test]
    fn prop_local_tables_never_keep_excluded_names(names in name_set()) {
        let kept = FilterSet::default().filter_set(Category::Tables, Side::Local, &names);
        for name in &kept {
            prop_assert!(!name.starts_with('_'));
            prop_assert!(!["extensions", "tenants", "schema_migrations"].contains(&name.as_str()));
        }
    }

    #[test]
    fn prop_compared_indexes_carry_prefix(names in name_set()) {
        let filters = FilterSet::default();
        for side in [Side::Local, Side::Complete] {
            for name in filters.filter_set(Category::Indexes, side, &names) {
                prop_assert!(name.starts_with("idx_"));
            }
        }
    }

    #[test]
    fn prop_set_algebra_partitions_both_sides(local in name_set(), complete in name_set()) {
        let c = compare_category(Category::Policies, &local, &complete);

        let rebuilt_local: BTreeSet<String> =
            c.only_in_local.union(&c.common).cloned().collect();
        let rebuilt_complete: BTreeSet<String> =
            c.only_in_complete.union(&c.common).cloned().collect();
        prop_assert_eq!(rebuilt_local, local.clone());
        prop_assert_eq!(rebuilt_complete, complete.clone());
        prop_assert!(c.only_in_local.is_disjoint(&c.only_in_complete));
        prop_assert_eq!(c.has_differences(), local != complete);
    }
}
