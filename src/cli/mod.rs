pub mod console;
pub mod forms;
pub mod formatting;
pub mod menus;
pub mod session;
pub mod table;

use tracing::{error, warn};

use crate::{
    config::{Config, ConfigManager},
    errors::CliError,
    storage::{JsonStorage, StorageBackend},
};

pub use console::{Console, OutputPreferences};
pub use session::{LoopControl, Session};

/// Loads configuration and data, then runs the interactive menu on stdin/stdout.
///
/// Only a data file that exists but cannot be read or parsed aborts startup; a broken
/// configuration file falls back to defaults with a warning.
pub fn run_cli() -> Result<(), CliError> {
    let manager = ConfigManager::new();
    let (config, config_error) = match manager.load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    crate::init(&config.log_level);
    if config_error.is_none() {
        if let Err(err) = manager.ensure_file() {
            warn!(error = %err, path = %manager.path().display(), "could not write default configuration");
        }
    }

    let storage = JsonStorage::new(config.data_file.clone());
    let ledger = storage.load().map_err(|source| {
        error!(error = %source, location = %storage.location(), "startup load failed");
        CliError::Startup {
            location: storage.location(),
            source,
        }
    })?;

    let mut console = Console::stdio(OutputPreferences {
        color: config.color,
    });
    if let Some(err) = config_error {
        warn!(error = %err, path = %manager.path().display(), "using default configuration");
        console.warning(format!("{err}. Using default settings."))?;
    }

    Session::new(console, storage, ledger, config).run()
}
