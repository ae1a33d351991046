//! Filesystem locations for config and logs

use std::path::PathBuf;

use crate::constants::paths::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, HOME_ENV_VAR, LOGS_DIR_NAME, LOG_FILE_NAME,
};

/// Base directory (`~/.plantrack`, or `$PLANTRACK_HOME` when set)
pub fn base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to the TOML config file
pub fn config_file() -> PathBuf {
    base_dir().join(CONFIG_FILE_NAME)
}

/// Directory holding log files
pub fn logs_dir() -> PathBuf {
    base_dir().join(LOGS_DIR_NAME)
}

/// Path to the main log file
pub fn log_file() -> PathBuf {
    logs_dir().join(LOG_FILE_NAME)
}
