//! Prompt sequences that collect validated record and plan fields.

use std::io::{BufRead, Write};

use crate::{
    cli::console::Console,
    core::utils::{parse_amount, parse_date, parse_description, parse_id},
    domain::{PlanDraft, PlanStatus, RecordDraft, RecordKind},
    errors::{CliError, EntryKind, TrackerError},
};

pub fn parse_entry_kind(input: &str) -> Result<EntryKind, TrackerError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "r" | "record" | "1" => Ok(EntryKind::Record),
        "p" | "plan" | "2" => Ok(EntryKind::Plan),
        other => Err(TrackerError::validation(format!(
            "`{other}` is neither record nor plan"
        ))),
    }
}

pub fn entry_kind<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    verb: &str,
) -> Result<EntryKind, CliError> {
    console.prompt_parsed(&format!("{verb} a (r)ecord or a (p)lan?"), parse_entry_kind)
}

pub fn entry_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: EntryKind,
) -> Result<u64, CliError> {
    console.prompt_parsed(&format!("Enter the {kind} id"), parse_id)
}

/// Collects a record. With `current`, every field offers its existing value as default.
pub fn record_form<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: Option<&RecordDraft>,
) -> Result<RecordDraft, CliError> {
    const KIND: &str = "Type (expense/income)";
    const DATE: &str = "Date (YYYY-MM-DD)";
    const DESCRIPTION: &str = "Description";
    const AMOUNT: &str = "Amount";

    let parse_kind = |input: &str| input.parse::<RecordKind>();
    match current {
        None => {
            let kind = console.prompt_parsed(KIND, parse_kind)?;
            let date = console.prompt_parsed(DATE, parse_date)?;
            let description = console.prompt_parsed(DESCRIPTION, parse_description)?;
            let amount = console.prompt_parsed(AMOUNT, parse_amount)?;
            Ok(RecordDraft::new(kind, amount, description, date))
        }
        Some(existing) => {
            let kind = console.prompt_or_keep(KIND, &existing.kind, existing.kind, parse_kind)?;
            let date = console.prompt_or_keep(DATE, &existing.date, existing.date, parse_date)?;
            let description = console.prompt_or_keep(
                DESCRIPTION,
                &existing.description,
                &existing.description,
                parse_description,
            )?;
            let amount =
                console.prompt_or_keep(AMOUNT, &existing.amount, existing.amount, parse_amount)?;
            Ok(RecordDraft::new(kind, amount, description, date))
        }
    }
}

pub fn plan_form<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: Option<&PlanDraft>,
) -> Result<PlanDraft, CliError> {
    const DESCRIPTION: &str = "Description";
    const DUE: &str = "Due date (YYYY-MM-DD)";
    const AMOUNT: &str = "Target amount";
    const STATUS: &str = "Status (pending/completed)";

    match current {
        None => {
            let description = console.prompt_parsed(DESCRIPTION, parse_description)?;
            let due_date = console.prompt_parsed(DUE, parse_date)?;
            let amount = console.prompt_parsed(AMOUNT, parse_amount)?;
            Ok(PlanDraft::new(description, due_date, amount))
        }
        Some(existing) => {
            let description = console.prompt_or_keep(
                DESCRIPTION,
                &existing.description,
                &existing.description,
                parse_description,
            )?;
            let due_date =
                console.prompt_or_keep(DUE, &existing.due_date, existing.due_date, parse_date)?;
            let amount =
                console.prompt_or_keep(AMOUNT, &existing.amount, existing.amount, parse_amount)?;
            let status = console.prompt_or_keep(STATUS, &existing.status, existing.status, |s| {
                s.parse::<PlanStatus>()
            })?;
            Ok(PlanDraft::new(description, due_date, amount).with_status(status))
        }
    }
}
