//! Property tests for the canonicalizer and filter.
//!
//! These pin the invariants the rest of the stack leans on: canonicalize
//! never invents a tag outside the table, never panics on arbitrary input,
//! and the filter only ever narrows the list.

use proptest::prelude::*;

use rolecall_core::{filter_by_location, Record, RecordId, TagTable};

fn record(id: &str, location: &str) -> Record {
    Record {
        id: RecordId::new(id),
        company: format!("Company {id}"),
        location: location.into(),
        title: None,
        url: None,
        created_at: None,
        updated_at: None,
    }
}

proptest! {
    #[test]
    fn canonicalize_yields_only_table_tags(input in ".*") {
        let table = TagTable::ncr();
        let canonical = table.canonical_tags();
        for tag in table.canonicalize(&input) {
            prop_assert!(canonical.contains(&tag), "unexpected tag {tag}");
        }
    }

    #[test]
    fn canonicalize_is_case_insensitive(input in ".*") {
        let table = TagTable::ncr();
        prop_assert_eq!(
            table.canonicalize(&input),
            table.canonicalize(&input.to_uppercase())
        );
    }

    #[test]
    fn canonicalize_is_stable_over_its_own_output(input in ".*") {
        let table = TagTable::ncr();
        let tags = table.canonicalize(&input);
        let rejoined = tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(table.canonicalize(&rejoined), tags);
    }

    #[test]
    fn filter_never_grows_the_list(query in ".*") {
        let table = TagTable::ncr();
        let records = vec![
            record("a", "Gurgaon"),
            record("b", "Noida"),
            record("c", "Remote"),
            record("d", "Gurgaon and Noida"),
        ];
        let filtered = filter_by_location(&records, &query, &table);
        prop_assert!(filtered.len() <= records.len());
    }

    #[test]
    fn unrecognized_query_is_a_no_op(query in "[a-z ]*") {
        let table = TagTable::ncr();
        prop_assume!(table.canonicalize(&query).is_empty());
        let records = vec![record("a", "Gurgaon"), record("b", "Noida")];
        let filtered = filter_by_location(&records, &query, &table);
        prop_assert_eq!(filtered.len(), records.len());
    }
}
