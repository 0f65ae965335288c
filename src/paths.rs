//! Where Textboard keeps `config.json` and its `logs/` directory.
//!
//! Under `cargo run` and in debug builds both live in the working directory.
//! Installed builds put the config under the platform config directory and
//! the logs under the platform data directory, each in a `textboard` folder.

use std::path::PathBuf;

const APP_FOLDER: &str = "textboard";

/// True under `cargo run` or in a debug build
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn resolve(dev_mode: bool, platform_dir: Option<PathBuf>, entry: &str) -> PathBuf {
    if dev_mode {
        return PathBuf::from(".").join(entry);
    }
    match platform_dir {
        Some(dir) => dir.join(APP_FOLDER).join(entry),
        None => PathBuf::from(entry),
    }
}

pub fn config_file() -> PathBuf {
    resolve(is_dev_mode(), dirs::config_dir(), "config.json")
}

pub fn logs_dir() -> PathBuf {
    resolve(is_dev_mode(), dirs::data_dir(), "logs")
}

/// Create the folders holding the config file and the logs.
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(config_parent) = config_file().parent() {
        std::fs::create_dir_all(config_parent)?;
    }
    std::fs::create_dir_all(logs_dir())
}
