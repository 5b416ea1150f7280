//! Business logic helpers for managing financial plans.

use std::slice;

use tracing::debug;

use crate::domain::{Ledger, Plan, PlanDraft};
use crate::errors::{EntryKind, Result, TrackerError};

pub struct PlanService;

impl PlanService {
    pub fn add(ledger: &mut Ledger, draft: PlanDraft) -> Result<u64> {
        draft.validate()?;
        let id = ledger.next_plan_id();
        ledger.plans.push(Plan::from_draft(id, draft));
        debug!(id, "plan added");
        Ok(id)
    }

    pub fn update(ledger: &mut Ledger, id: u64, draft: PlanDraft) -> Result<()> {
        let plan = ledger
            .plan_mut(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Plan, id))?;
        draft.validate()?;
        plan.apply(draft);
        debug!(id, "plan updated");
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: u64) -> Result<Plan> {
        let plan = ledger
            .take_plan(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Plan, id))?;
        ledger.trash.plans.push(plan.clone());
        debug!(id, "plan moved to trash");
        Ok(plan)
    }

    pub fn get(ledger: &Ledger, id: u64) -> Result<&Plan> {
        ledger
            .plan(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Plan, id))
    }

    pub fn list(ledger: &Ledger) -> slice::Iter<'_, Plan> {
        ledger.plans()
    }

    /// Pending plans ordered by due date; plans sharing a date keep insertion order.
    pub fn upcoming(ledger: &Ledger) -> Vec<&Plan> {
        let mut pending: Vec<&Plan> = ledger.plans().filter(|plan| plan.is_pending()).collect();
        pending.sort_by_key(|plan| plan.due_date);
        pending
    }
}
