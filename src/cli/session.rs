use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    cli::{
        console::Console,
        formatting::{format_currency, format_signed, plans_table, records_table},
        forms,
        menus::{main_menu, trash_menu, MenuAction, TrashAction},
    },
    config::Config,
    core::{
        clock::{Clock, SystemClock},
        services::{PlanService, RecordService, SummaryService, TrashService},
    },
    domain::{Displayable, Ledger},
    errors::{CliError, EntryKind},
    storage::StorageBackend,
};

const TITLE: &str = "PERSONAL FINANCE TRACKER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One interactive run: the loaded ledger plus everything needed to show and persist it.
pub struct Session<R, W, S> {
    console: Console<R, W>,
    storage: S,
    ledger: Ledger,
    config: Config,
    clock: Box<dyn Clock>,
}

impl<R: BufRead, W: Write, S: StorageBackend> Session<R, W, S> {
    pub fn new(console: Console<R, W>, storage: S, ledger: Ledger, config: Config) -> Self {
        Self {
            console,
            storage,
            ledger,
            config,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Console<R, W>, Ledger) {
        (self.console, self.ledger)
    }

    /// Runs the menu loop until "exit" or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.render_menu()?;
            let choice = match self.console.prompt("Enter your choice (1-9)") {
                Ok(choice) => choice,
                Err(CliError::EndOfInput) => {
                    self.console.info("Input closed. Exiting.")?;
                    break;
                }
                Err(err) => return Err(err),
            };

            let Some(action) = MenuAction::parse(&choice) else {
                self.console.warning("Invalid choice. Please try again.")?;
                continue;
            };

            match self.dispatch(action) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(CliError::Core(err)) => self.console.error(err)?,
                Err(CliError::EndOfInput) => {
                    self.console.info("Input closed. Exiting.")?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, action: MenuAction) -> Result<LoopControl, CliError> {
        match action {
            MenuAction::Add => self.add()?,
            MenuAction::View => self.view()?,
            MenuAction::Edit => self.edit()?,
            MenuAction::Delete => self.delete()?,
            MenuAction::Summary => self.summary()?,
            MenuAction::Upcoming => self.upcoming()?,
            MenuAction::Export => self.export()?,
            MenuAction::Trash => self.trash()?,
            MenuAction::Exit => {
                self.console
                    .info("Thank you for using Personal Finance Tracker!")?;
                return Ok(LoopControl::Exit);
            }
        }
        Ok(LoopControl::Continue)
    }

    fn render_menu(&mut self) -> Result<(), CliError> {
        self.console.section(TITLE)?;
        for line in main_menu::render() {
            self.console.line(line)?;
        }
        Ok(())
    }

    /// Saves the whole ledger. A failure is reported but keeps the in-memory changes.
    fn persist(&mut self) -> Result<bool, CliError> {
        match self.storage.save(&self.ledger) {
            Ok(()) => Ok(true),
            Err(err) => {
                warn!(error = %err, location = %self.storage.location(), "save failed");
                self.console.error(format!(
                    "{err}. Changes are kept in memory but were not saved."
                ))?;
                Ok(false)
            }
        }
    }

    /// Saves, then confirms `done` only when the save went through.
    fn commit(&mut self, done: String) -> Result<(), CliError> {
        if self.persist()? {
            self.console.success(done)
        } else {
            self.console.info(format!("{done} (kept in memory only)"))
        }
    }

    fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    fn add(&mut self) -> Result<(), CliError> {
        match forms::entry_kind(&mut self.console, "Add")? {
            EntryKind::Record => {
                self.console.section("Add New Financial Record")?;
                let draft = forms::record_form(&mut self.console, None)?;
                let id = RecordService::add(&mut self.ledger, draft)?;
                info!(id, "record added");
                self.commit(format!("Record #{id} added."))?;
            }
            EntryKind::Plan => {
                self.console.section("Add New Financial Plan")?;
                let draft = forms::plan_form(&mut self.console, None)?;
                let id = PlanService::add(&mut self.ledger, draft)?;
                info!(id, "plan added");
                self.commit(format!("Plan #{id} added."))?;
            }
        }
        Ok(())
    }

    fn view(&mut self) -> Result<(), CliError> {
        self.console.section("Records")?;
        self.show_records()?;
        self.console.section("Plans")?;
        self.show_plans()?;
        Ok(())
    }

    fn show_records(&mut self) -> Result<bool, CliError> {
        if self.ledger.records.is_empty() {
            self.console.info("No records to display.")?;
            return Ok(false);
        }
        let table = records_table(RecordService::list(&self.ledger), self.symbol()).render();
        self.console.line(table)?;
        Ok(true)
    }

    fn show_plans(&mut self) -> Result<bool, CliError> {
        if self.ledger.plans.is_empty() {
            self.console.info("No plans to display.")?;
            return Ok(false);
        }
        let table = plans_table(PlanService::list(&self.ledger), self.symbol()).render();
        self.console.line(table)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<(), CliError> {
        match forms::entry_kind(&mut self.console, "Edit")? {
            EntryKind::Record => {
                if !self.show_records()? {
                    return Ok(());
                }
                let id = forms::entry_id(&mut self.console, EntryKind::Record)?;
                let current = RecordService::get(&self.ledger, id)?.draft();
                self.console
                    .info("Press Enter to keep the value shown in brackets.")?;
                let draft = forms::record_form(&mut self.console, Some(&current))?;
                RecordService::update(&mut self.ledger, id, draft)?;
                info!(id, "record edited");
                self.commit(format!("Record #{id} updated."))?;
            }
            EntryKind::Plan => {
                if !self.show_plans()? {
                    return Ok(());
                }
                let id = forms::entry_id(&mut self.console, EntryKind::Plan)?;
                let current = PlanService::get(&self.ledger, id)?.draft();
                self.console
                    .info("Press Enter to keep the value shown in brackets.")?;
                let draft = forms::plan_form(&mut self.console, Some(&current))?;
                PlanService::update(&mut self.ledger, id, draft)?;
                info!(id, "plan edited");
                self.commit(format!("Plan #{id} updated."))?;
            }
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), CliError> {
        let symbol = self.config.currency_symbol.clone();
        match forms::entry_kind(&mut self.console, "Delete")? {
            EntryKind::Record => {
                if !self.show_records()? {
                    return Ok(());
                }
                let id = forms::entry_id(&mut self.console, EntryKind::Record)?;
                let removed = RecordService::remove(&mut self.ledger, id)?;
                info!(id, entry = %removed.display_label(), "record deleted");
                self.persist()?;
                self.console.section("Deletion Receipt")?;
                self.console.line(format!(
                    "Deleted: {} ({})",
                    removed.description,
                    format_signed(&removed, &symbol)
                ))?;
                let net = SummaryService::summarize(&self.ledger)?.net_balance;
                self.console.line(format!(
                    "Remaining Balance: {}",
                    format_currency(net, &symbol)
                ))?;
            }
            EntryKind::Plan => {
                if !self.show_plans()? {
                    return Ok(());
                }
                let id = forms::entry_id(&mut self.console, EntryKind::Plan)?;
                let removed = PlanService::remove(&mut self.ledger, id)?;
                info!(id, entry = %removed.display_label(), "plan deleted");
                self.commit(format!(
                    "Deleted plan: {} ({}). It was moved to the trash bin.",
                    removed.description,
                    format_currency(removed.amount, &symbol)
                ))?;
            }
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<(), CliError> {
        let summary = SummaryService::summarize(&self.ledger)?;
        let symbol = self.config.currency_symbol.clone();

        self.console.section("Income and Expense Details")?;
        if self.ledger.records.is_empty() {
            self.console.info("No records to display.")?;
        }
        for record in self.ledger.records() {
            self.console.line(format!(
                "{} ({}): {}",
                record.description,
                record.kind,
                format_signed(record, &symbol)
            ))?;
        }

        self.console.section("Financial Balance Report")?;
        self.console.line(format!(
            "Total Income:        {}",
            format_currency(summary.income, &symbol)
        ))?;
        self.console.line(format!(
            "Total Expenses:      {}",
            format_currency(summary.expenses, &symbol)
        ))?;
        self.console.line(format!(
            "Net Balance:         {}",
            format_currency(summary.net_balance, &symbol)
        ))?;
        self.console.line(format!(
            "Pending Plans:       {}",
            format_currency(summary.pending_plans, &symbol)
        ))?;
        self.console.line(format!(
            "Entries:             {} records, {} plans",
            summary.record_count, summary.plan_count
        ))?;
        self.console
            .line(format!("Status: {}", summary.status().message()))?;
        Ok(())
    }

    fn upcoming(&mut self) -> Result<(), CliError> {
        let today = self.clock.today();
        let symbol = self.config.currency_symbol.clone();
        let lines: Vec<String> = PlanService::upcoming(&self.ledger)
            .into_iter()
            .map(|plan| {
                let overdue = if plan.is_overdue(today) {
                    " (overdue)"
                } else {
                    ""
                };
                format!(
                    "- {}: {} due on {}{}",
                    plan.description,
                    format_currency(plan.amount, &symbol),
                    plan.due_date,
                    overdue
                )
            })
            .collect();

        if lines.is_empty() {
            self.console.info("No upcoming due dates.")?;
            return Ok(());
        }
        self.console.section("Upcoming Due Dates")?;
        for line in lines {
            self.console.line(line)?;
        }
        Ok(())
    }

    fn export(&mut self) -> Result<(), CliError> {
        let dir = self.config.export_dir();
        let today = self.clock.today();
        match self.storage.export(&self.ledger, &dir, today) {
            Ok(path) => self
                .console
                .success(format!("Data exported to {}", path.display())),
            Err(err) => {
                warn!(error = %err, dir = %dir.display(), "export failed");
                self.console.error(format!("Error exporting data: {err}"))
            }
        }
    }

    fn trash(&mut self) -> Result<(), CliError> {
        if self.ledger.trash.is_empty() {
            self.console.info("Trash bin is empty.")?;
            return Ok(());
        }

        self.console.section("Trash Bin")?;
        let symbol = self.config.currency_symbol.clone();
        let trash = TrashService::contents(&self.ledger);
        let mut tables = Vec::new();
        if !trash.records.is_empty() {
            tables.push(records_table(trash.records.iter(), &symbol).render());
        }
        if !trash.plans.is_empty() {
            tables.push(plans_table(trash.plans.iter(), &symbol).render());
        }
        for table in tables {
            self.console.line(table)?;
            self.console.blank_line()?;
        }

        let action = loop {
            for line in trash_menu::render() {
                self.console.line(line)?;
            }
            let choice = self.console.prompt("Enter your choice (1-4)")?;
            match TrashAction::parse(&choice) {
                Some(action) => break action,
                None => self.console.warning("Invalid choice.")?,
            }
        };

        match action {
            TrashAction::RestoreOne => {
                let kind = forms::entry_kind(&mut self.console, "Restore")?;
                let id = forms::entry_id(&mut self.console, kind)?;
                TrashService::restore(&mut self.ledger, kind, id)?;
                info!(%kind, id, "restored from trash");
                self.commit(format!("Restored {kind} #{id}."))?;
            }
            TrashAction::RestoreAll => {
                let count = TrashService::restore_all(&mut self.ledger);
                self.commit(format!("All items restored ({count})."))?;
            }
            TrashAction::Empty => {
                if self
                    .console
                    .confirm("Permanently delete all items in trash?")?
                {
                    let count = TrashService::purge(&mut self.ledger);
                    self.commit(format!("Trash bin emptied ({count} removed)."))?;
                } else {
                    self.console.info("Trash bin left untouched.")?;
                }
            }
            TrashAction::Back => {}
        }
        Ok(())
    }
}
