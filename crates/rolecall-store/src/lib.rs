//! # rolecall-store — Local Fallback Store
//!
//! Persists the directory record list as a pretty-printed JSON file. This
//! is the offline half of the fallback design: when the backend is
//! unreachable the CLI serves and mutates this store instead, so the tool
//! is never left unusable.
//!
//! On first run (no file at the configured path) the store seeds itself
//! with a handful of sample records, mirroring the offline-capable
//! front-end variants. Offline creates assign client-side UUIDv4 ids and
//! stamp both timestamps; the backend does the equivalent server-side.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use rolecall_core::{Record, RecordDraft, RecordId};

mod seed;

pub use seed::sample_records;

/// Errors from local store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem read/write failure.
    #[error("I/O error on store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file did not parse as a record list.
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No record with the given id.
    #[error("no record with id {id}")]
    NotFound { id: RecordId },
}

/// JSON-file-backed record store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is created and seeded with [`sample_records`]; an
    /// existing file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let store = LocalStore { path };
        if !store.path.exists() {
            tracing::info!(path = %store.path.display(), "seeding local store with sample records");
            store.save(&sample_records())?;
        }
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record list.
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the store with a fresh record list (e.g. mirroring the
    /// last successful backend fetch).
    pub fn replace_all(&self, records: &[Record]) -> Result<(), StoreError> {
        self.save(records)
    }

    /// Create a record offline: client-generated UUIDv4 id, both
    /// timestamps stamped now.
    pub fn create(&self, draft: RecordDraft) -> Result<Record, StoreError> {
        let mut records = self.list()?;
        let record = draft.into_record(RecordId::generate(), Utc::now());
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// Merge a draft over the stored record with the given id.
    pub fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<Record, StoreError> {
        let mut records = self.list()?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        draft.apply_to(record, Utc::now());
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }

    /// Remove a record. Best-effort: an unknown id is not an error, the
    /// return value reports whether anything was removed.
    pub fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        let removed = records.len() != before;
        if removed {
            self.save(&records)?;
        }
        Ok(removed)
    }

    fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        // to_string_pretty on a Vec<Record> cannot fail; map anyway rather
        // than unwrap in library code.
        let body = serde_json::to_string_pretty(records).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, body).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
