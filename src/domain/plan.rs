use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    core::utils::{ensure_positive, parse_description},
    domain::common::{Displayable, Identifiable},
    errors::{Result, TrackerError},
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Pending,
    Completed,
}

impl PlanStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlanStatus::Pending => "Pending",
            PlanStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" | "p" => Ok(PlanStatus::Pending),
            "completed" | "complete" | "done" | "c" => Ok(PlanStatus::Completed),
            other => Err(TrackerError::validation(format!(
                "`{other}` is not a plan status (expected pending or completed)"
            ))),
        }
    }
}

/// A future financial goal with a due date and target amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u64,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default)]
    pub status: PlanStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    pub description: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: PlanStatus,
}

impl PlanDraft {
    pub fn new(description: impl Into<String>, due_date: NaiveDate, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            due_date,
            amount,
            status: PlanStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.amount)?;
        parse_description(&self.description)?;
        Ok(())
    }
}

impl Plan {
    pub fn from_draft(id: u64, draft: PlanDraft) -> Self {
        Self {
            id,
            description: draft.description.trim().to_string(),
            due_date: draft.due_date,
            amount: draft.amount,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, draft: PlanDraft) {
        self.description = draft.description.trim().to_string();
        self.due_date = draft.due_date;
        self.amount = draft.amount;
        self.status = draft.status;
    }

    pub fn draft(&self) -> PlanDraft {
        PlanDraft::new(self.description.clone(), self.due_date, self.amount)
            .with_status(self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.status == PlanStatus::Pending
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date < today
    }
}

impl Identifiable for Plan {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Displayable for Plan {
    fn display_label(&self) -> String {
        format!("#{} {} (due {})", self.id, self.description, self.due_date)
    }
}
