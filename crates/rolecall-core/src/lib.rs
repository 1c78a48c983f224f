//! # rolecall-core — Foundational Types for the Rolecall Directory
//!
//! Pure domain logic for a companies/roles directory, shared by the HTTP
//! client, the local fallback store, and the CLI. Nothing in this crate
//! performs I/O.
//!
//! ## Modules
//!
//! - [`tag`] — Canonical location tags and the configurable synonym table
//!   that turns free-text location strings into tag sets.
//! - [`record`] — The directory record model and the create/update draft,
//!   with intake validation.
//! - [`filter`] — The location filter: keep records whose tag set
//!   intersects the query's tag set.
//! - [`directory`] — The `Directory` controller holding the current record
//!   list and filter text with an explicit init/update lifecycle.
//! - [`error`] — Crate error type.
//!
//! ## Crate Policy
//!
//! - Sits at the bottom of the dependency DAG; depends on no other
//!   workspace crate.
//! - Filtering is always strict: a fragment the tag table does not
//!   recognize never becomes a tag. Record intake is permissive unless the
//!   caller opts into [`record::ValidationPolicy::Strict`].

pub mod directory;
pub mod error;
pub mod filter;
pub mod record;
pub mod tag;

pub use directory::Directory;
pub use error::CoreError;
pub use filter::filter_by_location;
pub use record::{Record, RecordDraft, RecordId, ValidationPolicy};
pub use tag::{Tag, TagTable};
