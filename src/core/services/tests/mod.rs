mod record_service_tests;
mod summary_service_tests;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{PlanDraft, RecordDraft, RecordKind};

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn record_draft(kind: RecordKind, amount: i64, description: &str) -> RecordDraft {
    RecordDraft::new(kind, Decimal::from(amount), description, date(2024, 1, 15))
}

pub(super) fn plan_draft(description: &str, due: NaiveDate, amount: i64) -> PlanDraft {
    PlanDraft::new(description, due, Decimal::from(amount))
}
