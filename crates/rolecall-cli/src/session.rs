//! # Backend Session with Offline Fallback
//!
//! One `Session` backs one CLI invocation. Every backend operation follows
//! the same policy: try the HTTP client, and when the failure class is
//! "unreachable" (transport error or 5xx) fall back to the local store and
//! mark the session offline. 4xx responses surface as errors; the backend
//! answered, it just said no. Once offline, later operations in the same
//! invocation go straight to the store.
//!
//! After a successful online list the fetched records are mirrored into
//! the store, so the next offline session serves the freshest data the
//! backend ever returned.

use anyhow::{Context, Result};

use rolecall_client::{ClientConfig, DirectoryClient};
use rolecall_core::{Directory, Record, RecordDraft, RecordId};
use rolecall_store::LocalStore;

use crate::config::Settings;

/// Directory state, HTTP client, and fallback store for one invocation.
pub struct Session {
    settings: Settings,
    directory: Directory,
    client: Option<DirectoryClient>,
    store: LocalStore,
    offline: bool,
}

impl Session {
    /// Open the store and (unless `--offline`) build the HTTP client.
    pub fn new(settings: Settings) -> Result<Self> {
        let store = LocalStore::open(&settings.store_path).with_context(|| {
            format!(
                "failed to open local store {}",
                settings.store_path.display()
            )
        })?;

        let client = if settings.offline {
            None
        } else {
            let config = ClientConfig::new(&settings.base_url)?
                .with_resource(settings.resource)
                .with_timeout_secs(settings.timeout_secs);
            Some(DirectoryClient::new(config)?)
        };

        let directory = Directory::new(settings.table.clone());
        let offline = settings.offline;
        Ok(Session {
            settings,
            directory,
            client,
            store,
            offline,
        })
    }

    /// Whether this session is serving local data (by flag or fallback).
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// The in-memory directory view.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Update the active filter text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.directory.set_query(query);
    }

    /// The HTTP client, when one was configured (used by `health`).
    pub fn client(&self) -> Option<&DirectoryClient> {
        self.client.as_ref()
    }

    fn go_offline(&mut self, operation: &str, error: &rolecall_client::ClientError) {
        tracing::warn!(
            %operation,
            error = %error,
            "backend unreachable; falling back to local store"
        );
        self.offline = true;
    }

    /// Rebuild the directory from the backend (or the store when offline).
    /// Returns the number of records dropped during normalization.
    pub async fn refresh(&mut self) -> Result<usize> {
        if !self.offline {
            if let Some(client) = &self.client {
                let outcome = client.list(None).await;
                match outcome {
                    Ok(records) => {
                        if let Err(error) = self.store.replace_all(&records) {
                            tracing::warn!(%error, "failed to mirror fetched list into local store");
                        }
                        return Ok(self.directory.set_records(records));
                    }
                    Err(error) if error.is_unreachable() => self.go_offline("list", &error),
                    Err(error) => return Err(error.into()),
                }
            }
        }

        let records = self.store.list()?;
        Ok(self.directory.set_records(records))
    }

    /// Create a record, online or against the store.
    pub async fn create(&mut self, draft: RecordDraft) -> Result<Record> {
        draft.validate(self.directory.table(), self.settings.policy)?;

        if !self.offline {
            if let Some(client) = &self.client {
                let outcome = client.create(&draft).await;
                match outcome {
                    Ok(record) => {
                        self.directory.upsert(record.clone());
                        return Ok(record);
                    }
                    Err(error) if error.is_unreachable() => self.go_offline("create", &error),
                    Err(error) => return Err(error.into()),
                }
            }
        }

        let record = self.store.create(draft)?;
        self.directory.upsert(record.clone());
        Ok(record)
    }

    /// Update a record in place, online or against the store.
    pub async fn update(&mut self, id: &RecordId, draft: RecordDraft) -> Result<Record> {
        draft.validate(self.directory.table(), self.settings.policy)?;

        if !self.offline {
            if let Some(client) = &self.client {
                let outcome = client.update(id, &draft).await;
                match outcome {
                    Ok(record) => {
                        self.directory.upsert(record.clone());
                        return Ok(record);
                    }
                    Err(error) if error.is_unreachable() => self.go_offline("update", &error),
                    Err(error) => return Err(error.into()),
                }
            }
        }

        let record = self.store.update(id, &draft)?;
        self.directory.upsert(record.clone());
        Ok(record)
    }

    /// Delete a record. Returns whether anything was removed: the online
    /// delete is an unconditional acknowledgment, the offline one reports
    /// the store's answer.
    pub async fn remove(&mut self, id: &RecordId) -> Result<bool> {
        if !self.offline {
            if let Some(client) = &self.client {
                let outcome = client.delete(id).await;
                match outcome {
                    Ok(()) => {
                        self.directory.remove(id);
                        return Ok(true);
                    }
                    Err(error) if error.is_unreachable() => self.go_offline("delete", &error),
                    Err(error) => return Err(error.into()),
                }
            }
        }

        let removed = self.store.delete(id)?;
        self.directory.remove(id);
        Ok(removed)
    }
}
