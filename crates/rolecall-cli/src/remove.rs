//! # Remove Subcommand
//!
//! Deletes a record by id. The backend's delete is best-effort and always
//! acknowledges; the offline store reports whether anything was removed.

use anyhow::Result;
use clap::Args;

use rolecall_core::RecordId;

use crate::session::Session;

/// Arguments for `rolecall remove`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Identifier of the record to delete.
    pub id: String,
}

/// Execute the remove subcommand.
pub async fn run_remove(args: &RemoveArgs, session: &mut Session) -> Result<u8> {
    let id = RecordId::new(args.id.clone());
    let removed = session.remove(&id).await?;

    let suffix = if session.is_offline() { " (offline)" } else { "" };
    if removed {
        println!("deleted {id}{suffix}");
    } else {
        println!("no record with id {id}{suffix}");
    }
    Ok(0)
}
