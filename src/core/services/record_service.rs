//! Business logic helpers for managing income and expense records.

use std::slice;

use tracing::debug;

use crate::domain::{Ledger, Record, RecordDraft};
use crate::errors::{EntryKind, Result, TrackerError};

/// Provides validated CRUD helpers for ledger records.
pub struct RecordService;

impl RecordService {
    /// Validates the draft, assigns the next id and appends the record.
    pub fn add(ledger: &mut Ledger, draft: RecordDraft) -> Result<u64> {
        draft.validate()?;
        let id = ledger.next_record_id();
        ledger.records.push(Record::from_draft(id, draft));
        debug!(id, "record added");
        Ok(id)
    }

    /// Overwrites the record identified by `id`; the id itself never changes.
    pub fn update(ledger: &mut Ledger, id: u64, draft: RecordDraft) -> Result<()> {
        let record = ledger
            .record_mut(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Record, id))?;
        draft.validate()?;
        record.apply(draft);
        debug!(id, "record updated");
        Ok(())
    }

    /// Removes the record and moves it into the trash bin, returning a copy.
    pub fn remove(ledger: &mut Ledger, id: u64) -> Result<Record> {
        let record = ledger
            .take_record(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Record, id))?;
        ledger.trash.records.push(record.clone());
        debug!(id, "record moved to trash");
        Ok(record)
    }

    pub fn get(ledger: &Ledger, id: u64) -> Result<&Record> {
        ledger
            .record(id)
            .ok_or_else(|| TrackerError::not_found(EntryKind::Record, id))
    }

    pub fn list(ledger: &Ledger) -> slice::Iter<'_, Record> {
        ledger.records()
    }
}
