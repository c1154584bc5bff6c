//! Command-line entry point for the vote-agreement engine
//!
//! Loads configuration from the environment (overridable by flags), indexes
//! the vote snapshot and prints the requested result as JSON on stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shared::logging::{self, Component};
use shared::{component_debug, component_info, Congress, Party, RollCallId};

use analytics::{AnalyticsConfig, AnalyticsResult, InMemoryVoteStore, TimedVoteStore, VoteAnalytics};

/// Vote-agreement analytics for legislators
#[derive(Parser, Debug)]
#[command(name = "analytics")]
#[command(about = "How often legislators vote with their colleagues and parties")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Congress to analyse (overrides CURRENT_CONGRESS)
    #[arg(long)]
    congress: Option<u32>,

    /// Shared votes a pair must exceed to be reported (overrides MIN_VOTE_THRESHOLD)
    #[arg(long)]
    min_votes: Option<u32>,

    /// Vote snapshot file (overrides VOTE_SNAPSHOT_PATH)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List legislators of the congress
    List,

    /// Party alignment and pairwise similarity for one legislator
    Report {
        /// Two-letter state code
        #[arg(long)]
        state: String,

        /// Family name as recorded
        #[arg(long)]
        family_name: String,
    },

    /// Majority position of a party on one roll call
    Majority {
        /// Party abbreviation (R, D, I)
        #[arg(long)]
        party: String,

        /// Roll call id, e.g. senate-119-1-42
        #[arg(long)]
        roll_call: String,
    },
}

#[tokio::main]
async fn main() -> AnalyticsResult<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(Component::Cli, "vote-agreement analytics");

    if let Err(err) = run(args).await {
        logging::log_error(Component::Cli, "Analysis", &err);
        return Err(err);
    }

    logging::log_success(Component::Cli, "Analysis complete");
    Ok(())
}

async fn run(args: Args) -> AnalyticsResult<()> {
    let config = load_config(&args)?;
    component_debug!(
        Component::Cli,
        congress = %config.current_congress,
        threshold = config.min_vote_threshold,
        snapshot = %config.snapshot_path.display(),
        "Configuration loaded"
    );

    let store = InMemoryVoteStore::load(&config.snapshot_path).await?;
    let store = TimedVoteStore::new(store, config.fetch_timeout);
    let engine = VoteAnalytics::new(store, config);

    match args.command {
        Command::List => {
            let legislators = engine.list_legislators().await?;
            component_info!(Component::Cli, "Listing {} legislators", legislators.len());
            print_json(&legislators)
        }
        Command::Report { state, family_name } => {
            let report = engine.report(&family_name, &state).await?;
            print_json(&report)
        }
        Command::Majority { party, roll_call } => {
            let party = Party::from_abbreviation(&party);
            let roll_call_id: RollCallId = roll_call.parse()?;
            let majority = engine.resolve_majority(&party, &roll_call_id).await?;
            print_json(&json!({
                "party": party.abbreviation,
                "roll_call": roll_call_id,
                "majority": majority,
            }))
        }
    }
}

/// Environment configuration with command-line overrides applied
fn load_config(args: &Args) -> AnalyticsResult<AnalyticsConfig> {
    let snapshot = args.snapshot.as_ref().map(|path| path.display().to_string());
    let mut config = AnalyticsConfig::from_env_with(|key| match key {
        "VOTE_SNAPSHOT_PATH" => snapshot.clone(),
        _ => None,
    })?;

    if let Some(congress) = args.congress {
        config = config.with_congress(Congress(congress));
    }
    if let Some(threshold) = args.min_votes {
        config = config.with_min_vote_threshold(threshold);
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> AnalyticsResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
