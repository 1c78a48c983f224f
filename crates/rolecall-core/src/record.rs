//! # Directory Records
//!
//! The record model is the union of the field sets the directory's backend
//! variants exchange: a required company and location plus optional title,
//! URL, and timestamps. One schema serves every endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::tag::TagTable;

/// Opaque unique identifier for a directory record.
///
/// Normally assigned by the backend. When a record is created offline the
/// client generates a UUIDv4 string via [`RecordId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a backend-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    /// Generate a fresh client-side identifier.
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier.
    pub id: RecordId,
    /// Company display name.
    pub company: String,
    /// Free-text or canonical work location ("Gurgaon and Noida").
    pub location: String,
    /// Role title, where the listing carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Listing or application URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Creation timestamp, second precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, second precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Whether this record qualifies for display: company and location are
    /// both non-empty after trimming. Records failing this are dropped when
    /// a fetched list is normalized.
    pub fn is_displayable(&self) -> bool {
        !self.company.trim().is_empty() && !self.location.trim().is_empty()
    }
}

/// Intake policy for locations the tag table does not recognize.
///
/// Matching is always strict: unknown fragments never become tags. This
/// policy only governs whether a *draft* with an unresolvable location is
/// accepted for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Store free-text locations verbatim; only emptiness is rejected.
    #[default]
    Permissive,
    /// Reject drafts whose location resolves to no known tag.
    Strict,
}

/// Create/update payload for a directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Company display name.
    pub company: String,
    /// Free-text work location.
    pub location: String,
    /// Role title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Listing or application URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RecordDraft {
    /// Build a draft from the two required fields.
    pub fn new(company: impl Into<String>, location: impl Into<String>) -> Self {
        RecordDraft {
            company: company.into(),
            location: location.into(),
            title: None,
            url: None,
        }
    }

    /// Validate the draft against the intake policy.
    ///
    /// Company and location must be non-empty after trimming under either
    /// policy. Under [`ValidationPolicy::Strict`] the location must also
    /// resolve to at least one tag in `table`.
    pub fn validate(&self, table: &TagTable, policy: ValidationPolicy) -> Result<(), CoreError> {
        if self.company.trim().is_empty() {
            return Err(CoreError::EmptyField { field: "company" });
        }
        if self.location.trim().is_empty() {
            return Err(CoreError::EmptyField { field: "location" });
        }
        if policy == ValidationPolicy::Strict && table.canonicalize(&self.location).is_empty() {
            return Err(CoreError::UnresolvableLocation {
                location: self.location.clone(),
            });
        }
        Ok(())
    }

    /// Materialize the draft into a record with the given identity and
    /// timestamps. Used by the offline store; the backend does the same
    /// server-side when online.
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> Record {
        Record {
            id,
            company: self.company,
            location: self.location,
            title: self.title,
            url: self.url,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Apply the draft's fields over an existing record, bumping
    /// `updated_at`. Optional fields replace only when the draft sets them.
    pub fn apply_to(&self, record: &mut Record, now: DateTime<Utc>) {
        record.company = self.company.clone();
        record.location = self.location.clone();
        if self.title.is_some() {
            record.title = self.title.clone();
        }
        if self.url.is_some() {
            record.url = self.url.clone();
        }
        record.updated_at = Some(now);
    }
}
