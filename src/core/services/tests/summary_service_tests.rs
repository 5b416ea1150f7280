use rust_decimal::Decimal;

use super::{date, plan_draft, record_draft};
use crate::core::services::{BalanceStatus, PlanService, RecordService, SummaryService};
use crate::domain::{Ledger, PlanStatus, RecordKind};
use crate::errors::TrackerError;

#[test]
fn income_minus_expenses_gives_net_balance() {
    let mut ledger = Ledger::new();
    RecordService::add(&mut ledger, record_draft(RecordKind::Income, 100, "allowance")).unwrap();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 40, "books")).unwrap();

    let summary = SummaryService::summarize(&ledger).unwrap();
    assert_eq!(summary.income, Decimal::from(100));
    assert_eq!(summary.expenses, Decimal::from(40));
    assert_eq!(summary.net_balance, Decimal::from(60));
    assert_eq!(summary.status(), BalanceStatus::Surplus);
    assert_eq!(summary.record_count, 2);
}

#[test]
fn decimal_sums_have_no_float_drift() {
    let mut ledger = Ledger::new();
    for cents in [10, 20] {
        let mut draft = record_draft(RecordKind::Income, 1, "coins");
        draft.amount = Decimal::new(cents, 2);
        RecordService::add(&mut ledger, draft).unwrap();
    }
    let summary = SummaryService::summarize(&ledger).unwrap();
    assert_eq!(summary.income, Decimal::new(30, 2));
}

#[test]
fn empty_ledger_is_even() {
    let summary = SummaryService::summarize(&Ledger::new()).unwrap();
    assert_eq!(summary.net_balance, Decimal::ZERO);
    assert_eq!(summary.status(), BalanceStatus::Even);
}

#[test]
fn deficit_and_pending_plan_total() {
    let mut ledger = Ledger::new();
    RecordService::add(&mut ledger, record_draft(RecordKind::Expense, 25, "fees")).unwrap();
    PlanService::add(&mut ledger, plan_draft("Bike", date(2024, 9, 1), 200)).unwrap();
    let shoes = plan_draft("Shoes", date(2024, 3, 1), 80).with_status(PlanStatus::Completed);
    PlanService::add(&mut ledger, shoes).unwrap();

    let summary = SummaryService::summarize(&ledger).unwrap();
    assert_eq!(summary.status(), BalanceStatus::Deficit);
    assert_eq!(summary.pending_plans, Decimal::from(200));
    assert_eq!(summary.plan_count, 2);
}

#[test]
fn totals_beyond_decimal_range_are_an_error() {
    let mut ledger = Ledger::new();
    for _ in 0..2 {
        let mut draft = record_draft(RecordKind::Income, 1, "jackpot");
        draft.amount = "50000000000000000000000000000".parse().unwrap();
        RecordService::add(&mut ledger, draft).unwrap();
    }
    let err = SummaryService::summarize(&ledger).unwrap_err();
    assert!(matches!(err, TrackerError::OutOfRange(ref what) if what.contains("income")));
}

#[test]
fn pending_plan_overflow_is_reported() {
    let mut ledger = Ledger::new();
    for name in ["House", "Island"] {
        let mut draft = plan_draft(name, date(2030, 1, 1), 1);
        draft.amount = Decimal::MAX;
        PlanService::add(&mut ledger, draft).unwrap();
    }
    assert!(matches!(
        SummaryService::summarize(&ledger),
        Err(TrackerError::OutOfRange(_))
    ));
}
