//! # Local Storage
//!
//! Two small file-backed stores live in the data directory (default
//! `~/.scout/`):
//!
//! - [`players`]: saved players (`players.json`) with a change channel so
//!   open lists can refresh.
//! - [`preferences`]: scalar settings such as the last search filters
//!   (`preferences.toml`).
//!
//! Both are constructed once at startup and handed to whoever needs them.
//! All writes go through `.tmp` + `rename()`.

pub mod players;
pub mod preferences;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub use players::{PlayerStore, SavedPlayer};
pub use preferences::PreferenceStore;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(String),
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Serialize(msg) => write!(f, "store serialize error: {msg}"),
            StoreError::Parse(msg) => write!(f, "store parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Atomically replace `path` with `contents` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
