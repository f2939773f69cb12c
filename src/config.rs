use crate::error::{Result, SnipexError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_DIR_NAME: &str = ".snipex";
pub const DB_FILENAME: &str = "snipex.json";
pub const HOME_ENV: &str = "SNIPEX_HOME";
pub const LOG_ENV: &str = "SNIPEX_LOG";

/// Get the snipex configuration directory
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    env::var("HOME")
        .map(|home| PathBuf::from(home).join(CONFIG_DIR_NAME))
        .unwrap_or_else(|_| PathBuf::from(CONFIG_DIR_NAME))
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir();
    ensure_dir_with_db(&config_dir)?;
    Ok(config_dir)
}

/// Create `dir` and an empty database file inside it when missing
pub fn ensure_dir_with_db(dir: &Path) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(SnipexError::InvalidConfig(format!(
            "{} exists but is not a directory",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let db_path = dir.join(DB_FILENAME);
    if !db_path.exists() {
        create_empty_file(&db_path, "database file")?;
    }

    Ok(db_path)
}

/// Create an empty config file at the specified path
pub fn create_empty_file(path: &Path, description: &str) -> Result<()> {
    info!("Creating {} at: {}", description, path.display());
    fs::write(path, "")?;
    Ok(())
}

/// Get the path to the database file
pub fn get_db_file_path() -> PathBuf {
    get_config_dir().join(DB_FILENAME)
}

/// Check if the database file exists
pub fn db_file_exists() -> bool {
    get_db_file_path().exists()
}
