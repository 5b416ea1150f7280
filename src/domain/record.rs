use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    core::utils::{ensure_positive, parse_description},
    domain::common::{Displayable, Identifiable},
    errors::{Result, TrackerError},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Expense => "Expense",
            RecordKind::Income => "Income",
        }
    }

    pub fn sign(self) -> &'static str {
        match self {
            RecordKind::Expense => "-",
            RecordKind::Income => "+",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "e" | "plan" => Ok(RecordKind::Expense),
            "income" | "i" | "allowance" => Ok(RecordKind::Income),
            other => Err(TrackerError::validation(format!(
                "`{other}` is not a record type (expected expense or income)"
            ))),
        }
    }
}

/// A single income or expense transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

/// Field values collected for a record before it receives an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl RecordDraft {
    pub fn new(
        kind: RecordKind,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            date,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.amount)?;
        parse_description(&self.description)?;
        Ok(())
    }
}

impl Record {
    pub fn from_draft(id: u64, draft: RecordDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description.trim().to_string(),
            date: draft.date,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, draft: RecordDraft) {
        self.kind = draft.kind;
        self.amount = draft.amount;
        self.description = draft.description.trim().to_string();
        self.date = draft.date;
    }

    pub fn draft(&self) -> RecordDraft {
        RecordDraft::new(self.kind, self.amount, self.description.clone(), self.date)
    }
}

impl Identifiable for Record {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Displayable for Record {
    fn display_label(&self) -> String {
        format!("#{} {} ({})", self.id, self.description, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record::from_draft(
            3,
            RecordDraft::new(
                RecordKind::Income,
                Decimal::new(12550, 2),
                "  Salary ",
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn serializes_with_type_tag_and_numeric_amount() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            text,
            r#"{"id":3,"type":"income","amount":125.50,"description":"Salary","date":"2024-05-01"}"#
        );
    }

    #[test]
    fn amounts_keep_every_digit_through_json() {
        let amounts = [
            "12345678901234567.25",
            "0.123456789012345678901",
            "79228162514264337593543950335",
        ];
        for amount in amounts {
            let mut record = sample();
            record.amount = amount.parse().unwrap();
            let text = serde_json::to_string(&record).unwrap();
            assert!(text.contains(&format!("\"amount\":{amount},")), "{text}");
            let back: Record = serde_json::from_str(&text).unwrap();
            assert_eq!(back, record);
        }
    }

    #[test]
    fn deserializes_integer_amounts() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "type": "expense",
            "amount": 40,
            "description": "Books",
            "date": "2024-01-02"
        }))
        .unwrap();
        assert_eq!(record.amount, Decimal::from(40));
        assert_eq!(record.kind, RecordKind::Expense);
    }

    #[test]
    fn kind_parses_legacy_aliases() {
        assert_eq!("Allowance".parse::<RecordKind>().unwrap(), RecordKind::Income);
        assert_eq!("plan".parse::<RecordKind>().unwrap(), RecordKind::Expense);
        assert!("gift".parse::<RecordKind>().is_err());
    }

    #[test]
    fn draft_validation_rejects_blank_description() {
        let draft = RecordDraft::new(
            RecordKind::Expense,
            Decimal::ONE,
            "   ",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert!(draft.validate().is_err());
    }
}
