use std::{env, path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use dirs::config_dir;
use rust_decimal::Decimal;

use crate::errors::{Result, TrackerError};

const APP_DIR_NAME: &str = "finance_tracker";
const CONFIG_FILE: &str = "config.json";

/// Accepted input formats, tried in order. ISO first, then the month-first form.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m-%d-%Y"];

/// Resolves where the application keeps its configuration file.
pub struct PathResolver;

impl PathResolver {
    /// `<config_dir>/finance_tracker`, or `./.finance_tracker` when the platform has none.
    pub fn base_dir() -> PathBuf {
        config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
    }

    pub fn config_file_in(base: &std::path::Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    pub fn working_dir() -> PathBuf {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Parses a strictly positive decimal amount.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation("amount is required"));
    }
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| TrackerError::validation(format!("`{trimmed}` is not a number")))?;
    ensure_positive(amount)?;
    Ok(amount)
}

pub fn ensure_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(TrackerError::validation("amount must be greater than zero"));
    }
    Ok(())
}

/// Parses a calendar date in `YYYY-MM-DD` or `MM-DD-YYYY` form.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            TrackerError::validation(format!(
                "`{trimmed}` is not a valid date (use YYYY-MM-DD or MM-DD-YYYY)"
            ))
        })
}

pub fn parse_description(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation("description cannot be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn parse_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| TrackerError::validation(format!("`{trimmed}` is not a valid id")))
}
