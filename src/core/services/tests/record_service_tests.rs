use rust_decimal::Decimal;

use super::record_draft;
use crate::core::services::RecordService;
use crate::domain::{Ledger, RecordKind};
use crate::errors::{EntryKind, TrackerError};

#[test]
fn add_assigns_strictly_increasing_ids_from_one() {
    let mut ledger = Ledger::new();
    let ids: Vec<u64> = (0..5)
        .map(|n| {
            RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 10 + n, "coffee"))
                .unwrap()
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn add_continues_from_prior_maximum() {
    let mut ledger = Ledger::new();
    for _ in 0..3 {
        RecordService::add(&mut ledger, record_draft(RecordKind::Income, 5, "tip")).unwrap();
    }
    RecordService::remove(&mut ledger, 2).unwrap();
    let id = RecordService::add(&mut ledger, record_draft(RecordKind::Income, 5, "tip")).unwrap();
    assert_eq!(id, 4);
}

#[test]
fn add_rejects_non_positive_amounts_without_touching_state() {
    let mut ledger = Ledger::new();
    let err = RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 0, "free"))
        .expect_err("zero amount must fail");
    assert!(matches!(err, TrackerError::Validation(_)));
    assert!(ledger.records.is_empty());
}

#[test]
fn update_missing_id_reports_not_found_and_leaves_list_unchanged() {
    let mut ledger = Ledger::new();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 40, "books")).unwrap();
    let before = ledger.clone();

    let err = RecordService::update(&mut ledger, 99, record_draft(RecordKind::Income, 1, "x"))
        .expect_err("unknown id must fail");
    assert!(matches!(
        err,
        TrackerError::NotFound {
            kind: EntryKind::Record,
            id: 99
        }
    ));
    assert_eq!(ledger, before);
}

#[test]
fn update_overwrites_fields_in_place() {
    let mut ledger = Ledger::new();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 40, "books")).unwrap();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 15, "lunch")).unwrap();

    RecordService::update(&mut ledger, 1, record_draft(RecordKind::Income, 75, "refund"))
        .unwrap();

    let updated = RecordService::get(&ledger, 1).unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.kind, RecordKind::Income);
    assert_eq!(updated.amount, Decimal::from(75));
    assert_eq!(updated.description, "refund");
    assert_eq!(ledger.records[0].id, 1, "position must not change");
}

#[test]
fn remove_drops_exactly_one_record() {
    let mut ledger = Ledger::new();
    for amount in [10, 20, 30] {
        RecordService::add(&mut ledger, record_draft(RecordKind::Expense, amount, "misc"))
            .unwrap();
    }

    let removed = RecordService::remove(&mut ledger, 2).unwrap();
    assert_eq!(removed.amount, Decimal::from(20));
    assert_eq!(ledger.records.len(), 2);
    assert!(ledger.record(2).is_none());
    assert_eq!(ledger.trash.records.len(), 1);
}

#[test]
fn remove_unknown_id_keeps_length() {
    let mut ledger = Ledger::new();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 10, "misc")).unwrap();
    assert!(RecordService::remove(&mut ledger, 7).is_err());
    assert_eq!(ledger.records.len(), 1);
    assert!(ledger.trash.is_empty());
}
