//! Command-line driver for the activity store.
//!
//! # Responsibility
//! - Map flags onto `StoreConfig` and optional file logging.
//! - Run one add/get/list command and close the store on every exit path.

use activity_core::{
    core_version, default_log_level, init_logging, Activity, ActivityService, ActivityStore,
    StoreConfig, DEFAULT_DB_FILE_NAME,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

const DESCRIPTION_PREVIEW_CHARS: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "activity", version, about = "Record and inspect timestamped activities")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new activity
    Add {
        description: String,
        /// RFC 3339 timestamp; now when omitted
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },
    /// Show one activity by id
    Get { id: u64 },
    /// Show all activities
    List {
        /// Print a JSON array instead of one line per activity
        #[arg(long)]
        json: bool,
    },
    /// Print the core library version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    if let Command::Version = cli.command {
        println!("activity_core version={}", core_version());
        return Ok(());
    }

    let store = ActivityStore::open(&StoreConfig::new(&cli.db))
        .with_context(|| format!("failed to open activity store `{}`", cli.db.display()))?;
    let service = ActivityService::new(store);

    let outcome = run(&service, cli.command);
    service
        .into_inner()
        .close()
        .context("failed to close activity store")?;
    outcome
}

fn run(service: &ActivityService<ActivityStore>, command: Command) -> Result<()> {
    match command {
        Command::Add { description, at } => {
            let id = match at {
                Some(time) => service.record_at(time, description),
                None => service.record(description),
            }?;
            info!("event=cli_add module=cli status=ok id={id}");
            println!("New id {id}");
        }
        Command::Get { id } => {
            let activity = service.get(id)?;
            println!("{}", format_activity(&activity, None));
        }
        Command::List { json } => {
            let activities = service.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&activities)?);
            } else {
                for activity in &activities {
                    println!(
                        "{}",
                        format_activity(activity, Some(DESCRIPTION_PREVIEW_CHARS))
                    );
                }
            }
        }
        Command::Version => println!("activity_core version={}", core_version()),
    }
    Ok(())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 timestamp: {err}"))
}

fn format_activity(activity: &Activity, max_chars: Option<usize>) -> String {
    let description = match max_chars {
        Some(max) => activity.description.chars().take(max).collect(),
        None => activity.description.clone(),
    };
    format!(
        "ID: {},\tDescription: {},\tTime: {}",
        activity.id,
        description,
        activity.time.to_rfc3339()
    )
}
