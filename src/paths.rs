use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

const DATA_DIR_NAME: &str = ".sequential";

pub const PENDING_FILE: &str = "current.txt";
pub const COMPLETED_FILE: &str = "completed.txt";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "sequential.log";

pub fn home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or(Error::HomeNotFound)
}

/// `~/.sequential`, created if it does not exist yet.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = home_dir()?.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir).map_err(|source| Error::CreateDataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
