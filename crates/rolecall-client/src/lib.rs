//! # rolecall-client — Directory Backend HTTP Client
//!
//! Typed async client for the directory's REST contract:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | List | GET | `/api/{companies\|roles}[?location=<code>]` |
//! | Create | POST | `/api/{companies\|roles}` |
//! | Update | PUT | `/api/{companies\|roles}/{id}` |
//! | Delete | DELETE | `/api/{companies\|roles}/{id}` |
//! | Health | GET | `/health` |
//!
//! The backend is a black box: this crate owns request construction,
//! response-shape tolerance (bare array vs `{items: [...]}`, partial
//! create/update bodies), and the error taxonomy separating transport
//! failures from non-2xx statuses from malformed responses. It does NOT
//! retry; callers decide whether a transport failure means "fall back to
//! the local store" (see `ClientError::is_unreachable`).

pub mod client;
pub mod config;
pub mod error;

pub use client::DirectoryClient;
pub use config::{ClientConfig, ConfigError, Resource};
pub use error::ClientError;
