#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use chrono::NaiveDate;
use finance_tracker::{
    cli::{Console, OutputPreferences, Session},
    config::Config,
    core::clock::FixedClock,
    domain::Ledger,
    storage::{JsonStorage, StorageBackend},
};
use tempfile::TempDir;

pub struct Scripted {
    pub output: String,
    pub ledger: Ledger,
    pub data_file: PathBuf,
    pub dir: TempDir,
}

impl Scripted {
    pub fn reload(&self) -> Ledger {
        JsonStorage::new(&self.data_file).load().expect("reload ledger")
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Runs a full session against a fresh data file in a temp dir, feeding `input` as stdin.
pub fn run_script(input: &str) -> Scripted {
    run_script_in(TempDir::new().expect("temp dir"), input)
}

pub fn run_script_in(dir: TempDir, input: &str) -> Scripted {
    let data_file = dir.path().join("financial_data.json");
    let storage = JsonStorage::new(&data_file);
    let ledger = storage.load().expect("initial load");
    let config = Config {
        data_file: data_file.clone(),
        export_dir: Some(dir.path().join("exports")),
        color: false,
        ..Config::default()
    };
    let console = Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        OutputPreferences { color: false },
    );
    let mut session = Session::new(console, storage, ledger, config).with_clock(FixedClock(today()));
    session.run().expect("session runs to completion");
    let (console, ledger) = session.into_parts();
    Scripted {
        output: String::from_utf8(console.into_output()).expect("utf8 output"),
        ledger,
        data_file,
        dir,
    }
}

pub fn add_record(kind: &str, date: &str, description: &str, amount: &str) -> String {
    format!("1\nr\n{kind}\n{date}\n{description}\n{amount}\n")
}

pub fn add_plan(description: &str, due: &str, amount: &str) -> String {
    format!("1\np\n{description}\n{due}\n{amount}\n")
}
