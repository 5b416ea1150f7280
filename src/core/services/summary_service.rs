use rust_decimal::Decimal;

use crate::domain::{Ledger, Plan, Record, RecordKind};
use crate::errors::{Result, TrackerError};

/// Sign of the net balance, used for the closing status line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Surplus,
    Deficit,
    Even,
}

impl BalanceStatus {
    pub fn message(self) -> &'static str {
        match self {
            BalanceStatus::Surplus => "Good. Save more!",
            BalanceStatus::Deficit => "ALERT! You're out of balance!",
            BalanceStatus::Even => "Zero balance, don't forget to save!",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_balance: Decimal,
    /// Target amounts of plans that are still pending.
    pub pending_plans: Decimal,
    pub record_count: usize,
    pub plan_count: usize,
}

impl Summary {
    pub fn status(&self) -> BalanceStatus {
        if self.net_balance > Decimal::ZERO {
            BalanceStatus::Surplus
        } else if self.net_balance < Decimal::ZERO {
            BalanceStatus::Deficit
        } else {
            BalanceStatus::Even
        }
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Totals that leave the `Decimal` range are reported as `OutOfRange`.
    pub fn summarize(ledger: &Ledger) -> Result<Summary> {
        let (income, expenses) = Self::totals(ledger.records())?;
        let pending_plans = Self::pending_total(ledger.plans())?;
        let net_balance = income
            .checked_sub(expenses)
            .ok_or_else(|| TrackerError::OutOfRange("net balance".to_string()))?;
        Ok(Summary {
            income,
            expenses,
            net_balance,
            pending_plans,
            record_count: ledger.records.len(),
            plan_count: ledger.plans.len(),
        })
    }

    /// Folds records into `(income, expenses)`.
    pub fn totals<'a>(
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<(Decimal, Decimal)> {
        records.into_iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expenses), record| match record.kind {
                RecordKind::Income => Ok((add(income, record.amount, "income")?, expenses)),
                RecordKind::Expense => Ok((income, add(expenses, record.amount, "expenses")?)),
            },
        )
    }

    fn pending_total<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> Result<Decimal> {
        plans
            .into_iter()
            .filter(|plan| plan.is_pending())
            .try_fold(Decimal::ZERO, |total, plan| add(total, plan.amount, "pending plan amount"))
    }
}

fn add(total: Decimal, amount: Decimal, what: &str) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| TrackerError::OutOfRange(format!("total {what} exceeds {}", Decimal::MAX)))
}
