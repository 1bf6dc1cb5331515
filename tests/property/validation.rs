//! Property-based tests for wire-record validation.
//!
//! Uses proptest to verify:
//! 1. Every record surviving `filter_well_formed` has a non-empty id and title.
//! 2. Records missing an id or title never survive.
//! 3. Validation preserves the order of surviving records.
//! 4. Arbitrary JSON values never cause a panic when parsed as a list
//!    envelope (malformed input fails gracefully).

use proptest::prelude::*;
use taskpad_api::task::{RawTask, filter_well_formed};
use taskpad_api::wire::ListEnvelope;

/// Strategy for generating arbitrary `RawTask` records, including
/// malformed ones (missing or empty id/title).
fn arb_raw_task() -> impl Strategy<Value = RawTask> {
    (
        prop::option::of(".{0,24}"),
        prop::option::of(".{0,64}"),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(id, title, is_complete)| RawTask {
            id,
            title,
            is_complete,
        })
}

proptest! {
    #[test]
    fn surviving_records_are_well_formed(records in prop::collection::vec(arb_raw_task(), 0..32)) {
        let tasks = filter_well_formed(records);
        for task in tasks {
            prop_assert!(!task.id.as_str().is_empty());
            prop_assert!(!task.title.is_empty());
        }
    }

    #[test]
    fn malformed_records_never_survive(records in prop::collection::vec(arb_raw_task(), 0..32)) {
        let expected = records
            .iter()
            .filter(|r| {
                r.id.as_deref().is_some_and(|id| !id.is_empty())
                    && r.title.as_deref().is_some_and(|t| !t.is_empty())
            })
            .count();
        let tasks = filter_well_formed(records);
        prop_assert_eq!(tasks.len(), expected);
    }

    #[test]
    fn validation_preserves_order(titles in prop::collection::vec("[a-z]{1,8}", 1..16)) {
        let records: Vec<RawTask> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| RawTask {
                id: Some(format!("id-{i}")),
                title: Some(title.clone()),
                is_complete: None,
            })
            .collect();
        let tasks = filter_well_formed(records);
        let got: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        let want: Vec<&str> = titles.iter().map(String::as_str).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn arbitrary_json_never_panics(json in ".{0,256}") {
        // Parsing may fail, but must never panic.
        let _ = serde_json::from_str::<ListEnvelope>(&json);
    }
}
