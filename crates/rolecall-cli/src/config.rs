//! # CLI Configuration
//!
//! Settings resolve in three layers: built-in defaults, then an optional
//! YAML config file, then command-line flags. Flags always win.
//!
//! ```yaml
//! # rolecall.yaml
//! base_url: "http://127.0.0.1:8000"
//! resource: roles
//! store_path: ".rolecall/records.json"
//! timeout_secs: 10
//! strict_locations: false
//! tags:
//!   gurgaon: [gurgaon]
//!   gurugram: [gurgaon]
//!   noida: [noida]
//!   remote: [remote]
//! ```
//!
//! The `tags` section, when present, replaces the default NCR tag table
//! wholesale: it is the deployment's whole location vocabulary, not a
//! patch on top of the default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use rolecall_client::Resource;
use rolecall_core::{TagTable, ValidationPolicy};

use crate::{DEFAULT_BASE_URL, DEFAULT_STORE_PATH};

/// Raw shape of the YAML config file. Every field is optional; unknown
/// keys are rejected so typos fail loudly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Backend base URL.
    pub base_url: Option<String>,
    /// Collection: `companies` or `roles`.
    pub resource: Option<Resource>,
    /// Path of the local fallback store file.
    pub store_path: Option<PathBuf>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Reject drafts whose location resolves to no known tag.
    pub strict_locations: Option<bool>,
    /// Replacement tag table: synonym → list of canonical tags.
    pub tags: Option<BTreeMap<String, Vec<String>>>,
}

impl FileConfig {
    /// Load and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Flag-level overrides collected from the global CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub resource: Option<Resource>,
    pub store_path: Option<PathBuf>,
    pub offline: bool,
    pub strict_locations: bool,
}

/// Fully resolved settings the session runs under.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub resource: Resource,
    pub store_path: PathBuf,
    pub timeout_secs: u64,
    pub policy: ValidationPolicy,
    /// Skip the backend entirely and work against the local store.
    pub offline: bool,
    pub table: TagTable,
}

impl Settings {
    /// Layer defaults, file values, and flag overrides into one value.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let table = match file.tags {
            Some(tags) => {
                let mut table = TagTable::empty();
                for (synonym, targets) in tags {
                    table.insert(synonym, targets);
                }
                table
            }
            None => TagTable::ncr(),
        };

        let strict = overrides.strict_locations || file.strict_locations.unwrap_or(false);

        Settings {
            base_url: overrides
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            resource: overrides.resource.or(file.resource).unwrap_or_default(),
            store_path: overrides
                .store_path
                .or(file.store_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            timeout_secs: file.timeout_secs.unwrap_or(10),
            policy: if strict {
                ValidationPolicy::Strict
            } else {
                ValidationPolicy::Permissive
            },
            offline: overrides.offline,
            table,
        }
    }
}
