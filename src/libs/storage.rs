//! Persistent storage for the study record.
//!
//! The whole [`Study`] is serialized into one JSON file under the
//! platform-specific application data directory and overwritten wholesale on
//! every save; there are no partial updates and no schema version field.
//! Loading is defensive: a missing, unreadable or shape-drifted record
//! degrades to an empty study with a warning instead of failing the session,
//! and a failed save is logged but never fatal — the in-memory state stays
//! authoritative until the process exits.

use crate::libs::messages::Message;
use crate::libs::study::Study;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::Local;
use serde::Deserialize;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure writing or removing the persisted study record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access the study record: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode the study record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "motus";

/// File name of the single persisted study record.
pub const STUDY_FILE: &str = "study.json";

/// Resolves application data paths per platform.
#[derive(Deserialize, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Load/save facade over the persisted study record.
pub struct StudyStore {
    path: PathBuf,
}

impl StudyStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STUDY_FILE)?;
        Ok(Self { path })
    }

    /// Opens a store at an explicit path, used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted study, or an empty one when no usable record
    /// exists. Corruption is surfaced as a warning, never as an error.
    pub fn load(&self) -> Study {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                msg_debug!("No study record at {}", self.path.display());
                return Study::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(study) => study,
            Err(e) => {
                msg_warning!(Message::StudyLoadFailed(e.to_string()));
                Study::new()
            }
        }
    }

    /// Overwrites the record with the full current state. Called with the
    /// fully updated in-memory study before any destructive follow-up.
    pub fn save(&self, study: &mut Study) -> Result<(), StoreError> {
        study.saved_at = Some(Local::now().to_rfc3339());
        let json = serde_json::to_string_pretty(study)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Saves without propagating failure: persistence problems are logged
    /// and the session continues on in-memory state.
    pub fn save_or_warn(&self, study: &mut Study) {
        if let Err(e) = self.save(study) {
            msg_warning!(Message::StudySaveFailed(e.to_string()));
        }
    }

    /// Removes the persisted record entirely (post-export clear).
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
