use crate::api::BookzApi;
use crate::config::BookzConfig;
use crate::error::{BookzError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub struct BookzContext {
    pub api: BookzApi<FileStore>,
    pub config: BookzConfig,
}

/// Resolve the directory holding the catalog and its config. A `BOOKZ_HOME`
/// environment override takes precedence over the platform data dir, which
/// also keeps integration tests hermetic.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os("BOOKZ_HOME") {
        return Ok(PathBuf::from(home));
    }

    let proj_dirs = ProjectDirs::from("com", "bookz", "bookz")
        .ok_or_else(|| BookzError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn initialize() -> Result<BookzContext> {
    let dir = data_dir()?;
    let config = BookzConfig::load(&dir).unwrap_or_default();

    let store = FileStore::new(dir.join(&config.data_file));
    let api = BookzApi::new(store);

    Ok(BookzContext { api, config })
}
