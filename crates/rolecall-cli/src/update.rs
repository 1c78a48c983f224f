//! # Update Subcommand
//!
//! Fetches the current list, merges the provided fields over the existing
//! record, and PUTs the result (store fallback when unreachable). Fields
//! not given on the command line keep their stored values.

use anyhow::{bail, Result};
use clap::Args;

use rolecall_core::{RecordDraft, RecordId};

use crate::render::render_record;
use crate::session::Session;

/// Arguments for `rolecall update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Identifier of the record to update.
    pub id: String,

    /// New company display name.
    #[arg(long)]
    pub company: Option<String>,

    /// New work location.
    #[arg(long)]
    pub location: Option<String>,

    /// New role title.
    #[arg(long)]
    pub title: Option<String>,

    /// New listing or application URL.
    #[arg(long)]
    pub url: Option<String>,
}

impl UpdateArgs {
    fn has_changes(&self) -> bool {
        self.company.is_some()
            || self.location.is_some()
            || self.title.is_some()
            || self.url.is_some()
    }
}

/// Execute the update subcommand.
pub async fn run_update(args: &UpdateArgs, session: &mut Session) -> Result<u8> {
    if !args.has_changes() {
        bail!("nothing to update: pass at least one of --company/--location/--title/--url");
    }

    session.refresh().await?;
    let id = RecordId::new(args.id.clone());
    let existing = match session.directory().records().iter().find(|r| r.id == id) {
        Some(record) => record.clone(),
        None => bail!("no record with id {id} in the current list"),
    };

    let draft = RecordDraft {
        company: args.company.clone().unwrap_or(existing.company),
        location: args.location.clone().unwrap_or(existing.location),
        title: args.title.clone().or(existing.title),
        url: args.url.clone().or(existing.url),
    };

    let record = session.update(&id, draft).await?;

    if session.is_offline() {
        println!("(offline: updated locally)");
    }
    print!("{}", render_record(&record));
    Ok(0)
}
