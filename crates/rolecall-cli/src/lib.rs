//! # rolecall-cli — Directory Command-Line Front End
//!
//! Provides the `rolecall` binary: list, add, update, remove, and health
//! against a directory backend, with transparent fallback to the local
//! JSON store when the backend is unreachable.
//!
//! ## Subcommands
//!
//! - `rolecall list [QUERY] [--json]` — fetch, filter by location, render.
//! - `rolecall add --company <c> --location <l> [--title] [--url]`
//! - `rolecall update <id> [--company] [--location] [--title] [--url]`
//! - `rolecall remove <id>`
//! - `rolecall health` — backend liveness probe.
//!
//! Command handlers return `Result<u8>` exit codes; `main` maps errors to
//! exit code 1 after logging them.

pub mod add;
pub mod config;
pub mod health;
pub mod list;
pub mod remove;
pub mod render;
pub mod session;
pub mod update;

/// Backend base URL used when neither flag nor config file provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Store file used when neither flag nor config file provides one.
pub const DEFAULT_STORE_PATH: &str = ".rolecall/records.json";
