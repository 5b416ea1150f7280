use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{domain::Ledger, errors::Result};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";
const EXPORT_PREFIX: &str = "financial_data_export";
pub const DEFAULT_DATA_FILE: &str = "financial_data.json";

/// Stores the whole ledger as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        let ledger = load_ledger_from_path(&self.path)?;
        info!(
            path = %self.path.display(),
            records = ledger.records.len(),
            plans = ledger.plans.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads a ledger; a missing or blank file is an empty ledger.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, starting empty");
        return Ok(Ledger::default());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(Ledger::default());
    }
    Ok(serde_json::from_str(&data)?)
}

/// Stages the JSON next to `path` and renames it into place.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    replace_file(path, &json)
}

/// Writes `data` to the sibling tmp file, syncs it and renames it over `path`.
pub(crate) fn replace_file(path: &Path, data: &str) -> Result<()> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn export_ledger(ledger: &Ledger, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(format!("{}_{}.json", EXPORT_PREFIX, date.format("%Y-%m-%d")));
    save_ledger_to_path(ledger, &path)?;
    info!(path = %path.display(), "ledger exported");
    Ok(path)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, RecordDraft, RecordKind};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join(DEFAULT_DATA_FILE));
        (storage, temp)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.records.push(Record::from_draft(
            1,
            RecordDraft::new(
                RecordKind::Income,
                Decimal::new(1999, 2),
                "Gift",
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            ),
        ));
        ledger
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = sample_ledger();
        storage.save(&ledger).expect("save ledger");
        let loaded = storage.load().expect("load ledger");
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample_ledger()).expect("save ledger");
        assert!(!tmp_path(storage.path()).exists());
    }

    #[test]
    fn tmp_path_keeps_original_extension() {
        let tmp = tmp_path(Path::new("/data/financial_data.json"));
        assert_eq!(tmp, PathBuf::from("/data/financial_data.json.tmp"));
    }

    #[test]
    fn export_uses_dated_file_name() {
        let temp = TempDir::new().expect("temp dir");
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let path = export_ledger(&sample_ledger(), temp.path(), date).expect("export");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("financial_data_export_2024-07-04.json")
        );
        assert_eq!(load_ledger_from_path(&path).unwrap(), sample_ledger());
    }
}
