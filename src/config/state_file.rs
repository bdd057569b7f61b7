//! Persisted table record on disk.
//!
//! The record is stored as a single JSON array. Whether its fields make a
//! valid record is decided by the table on restore, not here.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the state file.
#[derive(Debug, Error)]
pub enum StateFileError {
    /// The file exists but could not be read.
    #[error("Failed to read state file at {path:?}: {source}")]
    Read {
        /// State file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array.
    #[error("Invalid state file at {path:?}: {source}")]
    Parse {
        /// State file path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The file or its directory could not be written.
    #[error("Failed to write state file at {path:?}: {source}")]
    Write {
        /// State file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Load the saved record.
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn load_record(path: &Path) -> Result<Option<Vec<Value>>, StateFileError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| StateFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let record = serde_json::from_str(&contents).map_err(|source| StateFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(record))
}

/// Save `record`, creating the parent directory if needed.
pub fn save_record(path: &Path, record: &[Value]) -> Result<(), StateFileError> {
    let write_err = |source| StateFileError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string(record).map_err(|source| StateFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(write_err)
}
