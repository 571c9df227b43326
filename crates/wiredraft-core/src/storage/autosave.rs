//! Cooperative autosave for crash recovery.
//!
//! The manager owns no timer and spawns no thread: the embedding
//! application calls [`AutoSaveManager::tick`] from its own scheduled task,
//! on the same thread that mutates the document. A write happens only when
//! the document is dirty, the latest modification has aged past the
//! interval, and there is something to save. Autosave I/O failures are
//! logged and swallowed so they can never interrupt an editing session.

use super::file::{self, SaveFile, SaveMetadata};
use super::{StorageError, StorageResult};
use crate::schema::DesignData;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default autosave interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 300;

/// Name of the autosave file inside the autosave directory.
pub const AUTOSAVE_FILE_NAME: &str = "autosave.json";

/// A design recovered from a leftover autosave file.
#[derive(Debug, Clone)]
pub struct RecoveredDesign {
    pub design: DesignData,
    /// The file the user was editing when the autosave was written.
    pub original_file: Option<PathBuf>,
}

/// Periodic best-effort persistence of unsaved work.
#[derive(Debug)]
pub struct AutoSaveManager {
    autosave_path: PathBuf,
    interval: Duration,
    dirty: bool,
    last_activity: Option<Instant>,
    original_file: Option<PathBuf>,
}

impl AutoSaveManager {
    /// Create a manager writing into the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            autosave_path: directory.into().join(AUTOSAVE_FILE_NAME),
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            dirty: false,
            last_activity: None,
            original_file: None,
        }
    }

    /// Create a manager in the platform data directory
    /// (`<data dir>/wiredraft/autosave/`).
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine a data directory".to_string()))?;
        Ok(Self::new(base.join("wiredraft").join("autosave")))
    }

    /// Path of the autosave file.
    pub fn autosave_path(&self) -> &Path {
        &self.autosave_path
    }

    /// The autosave interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the autosave interval.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Record the user's explicit save target, written into autosave
    /// metadata so recovery can reconnect the file.
    pub fn set_original_file(&mut self, path: Option<PathBuf>) {
        self.original_file = path;
    }

    /// Mark the document as modified. Each call restarts the interval, so
    /// autosave fires once the document has been quiet long enough.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.last_activity = Some(Instant::now());
    }

    /// Mark the document as saved by an explicit user save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Check if the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check if the dirty/interval gate is open.
    pub fn should_save(&self) -> bool {
        self.dirty
            && self
                .last_activity
                .is_some_and(|at| at.elapsed() >= self.interval)
    }

    /// Autosave if due. Returns `true` when a file was written. Failures
    /// are logged and reported as `false`; the next tick retries.
    pub fn tick(&mut self, data: &DesignData) -> bool {
        if !self.should_save() || data.components.is_empty() {
            return false;
        }

        match self.write(data) {
            Ok(()) => {
                self.last_activity = Some(Instant::now());
                true
            }
            Err(error) => {
                log::warn!("auto-save failed: {error}");
                false
            }
        }
    }

    fn write(&self, data: &DesignData) -> StorageResult<()> {
        let metadata = SaveMetadata {
            auto_save: true,
            original_file: self.original_file.clone(),
            ..SaveMetadata::new()
        };
        let save_file = SaveFile {
            metadata,
            design: data.clone(),
        };
        file::write_json(&self.autosave_path, &save_file)
    }

    /// Remove the autosave file, e.g. on a clean exit with nothing unsaved.
    pub fn discard(&self) {
        if self.autosave_path.exists() {
            self.remove_file();
        }
    }

    /// Check for a leftover autosave file and hand back its design. The
    /// file is deleted no matter what the caller decides to do with the
    /// result, so the recovery prompt can never repeat; a file that fails
    /// to parse is deleted too and reported as no recovery data.
    pub fn take_recovery(&self) -> Option<RecoveredDesign> {
        if !self.autosave_path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&self.autosave_path) {
            Ok(raw) => raw,
            Err(error) => {
                log::warn!("failed to read auto-save file: {error}");
                self.remove_file();
                return None;
            }
        };
        let save_file: SaveFile = match serde_json::from_str(&raw) {
            Ok(save_file) => save_file,
            Err(error) => {
                log::warn!("discarding corrupted auto-save file: {error}");
                self.remove_file();
                return None;
            }
        };
        if !save_file.metadata.auto_save {
            // Not one of ours; leave it alone.
            return None;
        }

        self.remove_file();
        Some(RecoveredDesign {
            design: save_file.design,
            original_file: save_file.metadata.original_file,
        })
    }

    fn remove_file(&self) {
        if let Err(error) = fs::remove_file(&self.autosave_path) {
            log::warn!(
                "failed to remove auto-save file {}: {error}",
                self.autosave_path.display()
            );
        }
    }
}
