//! # rolecall CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Global flags select the backend, the local store, and the validation
//! policy; subcommands carry their own arguments.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rolecall_cli::add::{run_add, AddArgs};
use rolecall_cli::config::{FileConfig, Overrides, Settings};
use rolecall_cli::health::{run_health, HealthArgs};
use rolecall_cli::list::{run_list, ListArgs};
use rolecall_cli::remove::{run_remove, RemoveArgs};
use rolecall_cli::session::Session;
use rolecall_cli::update::{run_update, UpdateArgs};
use rolecall_client::Resource;

/// Config file picked up from the working directory when `--config` is
/// not given.
const DEFAULT_CONFIG_FILE: &str = "rolecall.yaml";

/// Rolecall — companies/roles directory client
///
/// Lists, filters, and edits directory records against a REST backend,
/// falling back to a local store when the backend is unreachable.
#[derive(Parser, Debug)]
#[command(name = "rolecall", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory collection: "companies" or "roles".
    #[arg(long, global = true, value_parser = parse_resource)]
    resource: Option<Resource>,

    /// Path of the local fallback store file.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Skip the backend entirely and work against the local store.
    #[arg(long, global = true)]
    offline: bool,

    /// Reject new locations that resolve to no known tag.
    #[arg(long, global = true)]
    strict_locations: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List records, optionally filtered by a location query.
    List(ListArgs),

    /// Add a record to the directory.
    Add(AddArgs),

    /// Update an existing record's fields.
    Update(UpdateArgs),

    /// Delete a record by id.
    Remove(RemoveArgs),

    /// Probe backend liveness.
    Health(HealthArgs),
}

fn parse_resource(s: &str) -> Result<Resource, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let file = load_file_config(cli.config.as_deref())?;
    let overrides = Overrides {
        base_url: cli.base_url.clone(),
        resource: cli.resource,
        store_path: cli.store.clone(),
        offline: cli.offline,
        strict_locations: cli.strict_locations,
    };
    let settings = Settings::resolve(file, overrides);
    tracing::debug!(
        base_url = %settings.base_url,
        resource = %settings.resource,
        store = %settings.store_path.display(),
        offline = settings.offline,
        "resolved settings"
    );

    let mut session = Session::new(settings)?;
    match &cli.command {
        Commands::List(args) => run_list(args, &mut session).await,
        Commands::Add(args) => run_add(args, &mut session).await,
        Commands::Update(args) => run_update(args, &mut session).await,
        Commands::Remove(args) => run_remove(args, &mut session).await,
        Commands::Health(args) => run_health(args, &mut session).await,
    }
}

/// Load the config file: an explicit `--config` path must exist, the
/// default `rolecall.yaml` is picked up only when present.
fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => FileConfig::load(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                FileConfig::load(default)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}
