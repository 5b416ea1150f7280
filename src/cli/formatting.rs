use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    cli::table::{Table, TableColumn},
    domain::{Plan, Record},
};

/// Two decimals, thousands separators and a leading minus for negatives: `-₱1,234.50`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}.{fraction}", group_thousands(whole))
}

/// Signed amount as shown in listings: `+₱100.00` for income, `-₱40.00` for expenses.
pub fn format_signed(record: &Record, symbol: &str) -> String {
    format!("{}{}", record.kind.sign(), format_currency(record.amount, symbol))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn records_table<'a>(records: impl IntoIterator<Item = &'a Record>, symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Description").max_width(24),
        TableColumn::right("Amount"),
        TableColumn::left("Type"),
    ]);
    for record in records {
        table.push_row(vec![
            record.id.to_string(),
            record.date.to_string(),
            record.description.clone(),
            format_signed(record, symbol),
            record.kind.label().to_string(),
        ]);
    }
    table
}

pub fn plans_table<'a>(plans: impl IntoIterator<Item = &'a Plan>, symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Due Date"),
        TableColumn::left("Description").max_width(24),
        TableColumn::right("Amount"),
        TableColumn::left("Status"),
    ]);
    for plan in plans {
        table.push_row(vec![
            plan.id.to_string(),
            plan.due_date.to_string(),
            plan.description.clone(),
            format_currency(plan.amount, symbol),
            plan.status.label().to_string(),
        ]);
    }
    table
}
