pub mod json_backend;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{domain::Ledger, errors::Result};

/// Abstraction over persistence backends capable of storing the tracker state.
pub trait StorageBackend {
    /// Returns the persisted state, or an empty one when nothing was stored yet.
    fn load(&self) -> Result<Ledger>;

    /// Replaces the persisted state with `ledger`. Either fully succeeds or leaves
    /// the previous state in place.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Human readable location used in messages and logs.
    fn location(&self) -> String;

    /// Writes a dated snapshot into `dir` and returns its path.
    fn export(&self, ledger: &Ledger, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        json_backend::export_ledger(ledger, dir, date)
    }
}

pub use json_backend::JsonStorage;
