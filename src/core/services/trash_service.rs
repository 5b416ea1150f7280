//! Restoring and purging entries that were deleted from the ledger.

use tracing::debug;

use crate::domain::{common::position_of, Ledger, TrashBin};
use crate::errors::{EntryKind, Result, TrackerError};

pub struct TrashService;

impl TrashService {
    pub fn contents(ledger: &Ledger) -> &TrashBin {
        &ledger.trash
    }

    /// Moves one trashed entry back to the end of its live list.
    pub fn restore(ledger: &mut Ledger, kind: EntryKind, id: u64) -> Result<()> {
        match kind {
            EntryKind::Record => {
                let index = position_of(&ledger.trash.records, id)
                    .ok_or_else(|| TrackerError::not_found(kind, id))?;
                let record = ledger.trash.records.remove(index);
                ledger.records.push(record);
            }
            EntryKind::Plan => {
                let index = position_of(&ledger.trash.plans, id)
                    .ok_or_else(|| TrackerError::not_found(kind, id))?;
                let plan = ledger.trash.plans.remove(index);
                ledger.plans.push(plan);
            }
        }
        debug!(%kind, id, "entry restored from trash");
        Ok(())
    }

    /// Restores everything in the trash and returns how many entries moved.
    pub fn restore_all(ledger: &mut Ledger) -> usize {
        let count = ledger.trash.len();
        let TrashBin { records, plans } = std::mem::take(&mut ledger.trash);
        ledger.records.extend(records);
        ledger.plans.extend(plans);
        debug!(count, "trash restored");
        count
    }

    /// Permanently drops every trashed entry.
    pub fn purge(ledger: &mut Ledger) -> usize {
        let count = ledger.trash.len();
        ledger.trash = TrashBin::default();
        debug!(count, "trash emptied");
        count
    }
}
