//! # List Subcommand
//!
//! Fetches the record list (backend first, local store on fallback),
//! applies the client-side location filter, and renders a table or JSON.

use anyhow::Result;
use clap::Args;

use crate::render::{render_json, render_table};
use crate::session::Session;

/// Arguments for `rolecall list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text location query ("gurugram", "noida & remote", ...).
    /// Unrecognized queries list everything rather than nothing.
    pub query: Option<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the list subcommand.
pub async fn run_list(args: &ListArgs, session: &mut Session) -> Result<u8> {
    let dropped = session.refresh().await?;
    if dropped > 0 {
        tracing::debug!(dropped, "dropped records with empty company or location");
    }

    session.set_query(args.query.clone().unwrap_or_default());
    let filtered = session.directory().filtered();

    if args.json {
        println!("{}", render_json(&filtered)?);
    } else {
        if session.is_offline() {
            println!("(offline: showing local data)");
        }
        print!("{}", render_table(&filtered));
    }
    Ok(0)
}
