//! Persistence for design documents: save files, validation, backups and
//! crash-recovery autosave.

mod autosave;
mod file;

pub use autosave::{
    AutoSaveManager, RecoveredDesign, AUTOSAVE_FILE_NAME, DEFAULT_AUTOSAVE_INTERVAL_SECS,
};
pub use file::{
    create_backup, export_design, load_design, parse_design, save_design, validate_design_value,
    SaveFile, SaveMetadata, APP_NAME, FILE_VERSION,
};

use thiserror::Error;

/// Storage errors.
///
/// Validation failures (malformed design data) and I/O failures are
/// distinct so callers can message them differently; both leave the
/// in-memory document untouched.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("invalid design data: {0}")]
    Validation(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
