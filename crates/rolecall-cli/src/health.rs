//! # Health Subcommand
//!
//! Probes the backend's `/health` endpoint. The exit code reflects
//! reachability so scripts can branch on it.

use anyhow::Result;
use clap::Args;

use crate::session::Session;

/// Arguments for `rolecall health`.
#[derive(Args, Debug)]
pub struct HealthArgs {}

/// Execute the health subcommand.
pub async fn run_health(_args: &HealthArgs, session: &mut Session) -> Result<u8> {
    let Some(client) = session.client() else {
        println!("offline mode: no backend configured for this invocation");
        return Ok(1);
    };

    match client.health().await {
        Ok(true) => {
            println!("backend healthy: {}", client.config().health_url());
            Ok(0)
        }
        Ok(false) => {
            println!("backend responded but reported not-ok");
            Ok(1)
        }
        Err(error) => {
            tracing::debug!(%error, "health probe failed");
            println!("backend unreachable: {error}");
            Ok(1)
        }
    }
}
