//! # Add Subcommand
//!
//! Validates a draft and creates it via the backend, falling back to the
//! local store when the backend is unreachable.

use anyhow::Result;
use clap::Args;

use rolecall_core::RecordDraft;

use crate::render::render_record;
use crate::session::Session;

/// Arguments for `rolecall add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Company display name.
    #[arg(long)]
    pub company: String,

    /// Work location ("Gurgaon", "Gurugram and Noida", "Remote", ...).
    #[arg(long)]
    pub location: String,

    /// Role title.
    #[arg(long)]
    pub title: Option<String>,

    /// Listing or application URL.
    #[arg(long)]
    pub url: Option<String>,
}

impl AddArgs {
    fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            company: self.company.clone(),
            location: self.location.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }
}

/// Execute the add subcommand.
pub async fn run_add(args: &AddArgs, session: &mut Session) -> Result<u8> {
    let record = session.create(args.to_draft()).await?;

    if session.is_offline() {
        println!("(offline: stored locally)");
    }
    print!("{}", render_record(&record));
    Ok(0)
}
