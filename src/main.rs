use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use herodex_core::{Error, Roster};
use herodex_engine::Engine;

/// Hero similarity and recommendation engine
#[derive(Parser, Debug)]
#[command(name = "herodex")]
#[command(about = "Recommend heroes by stat similarity or lane", long_about = None)]
struct Args {
    /// Path to the hero dataset CSV
    #[arg(short, long, default_value = "heroes.csv")]
    dataset: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Heroes most similar to the given hero
    Similar { hero: String },
    /// Top heroes for a lane (gold, mid, roam, jungle, exp)
    Lane { lane: String },
    /// Side-by-side stat comparison for the given heroes
    Compare { heroes: Vec<String> },
    /// Heroes ranked by pick rate
    PickRates {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Hero count per role
    Roles,
    /// Correlation matrix of the stat columns
    Correlation,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting herodex v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    // A dataset that fails to load or is too small is fatal: the process
    // must not serve queries without a valid engine.
    let roster = Roster::load(&args.dataset)?;
    info!("Loaded {} heroes", roster.len());
    let engine = Engine::new(roster)?;

    let value = match &args.command {
        Command::Similar { hero } => to_json(engine.recommend_similar(hero))?,
        Command::Lane { lane } => to_json(engine.recommend_by_lane(lane))?,
        Command::Compare { heroes } => serde_json::to_value(engine.compare_heroes(heroes))?,
        Command::PickRates { limit } => serde_json::to_value(engine.top_pick_rates(*limit))?,
        Command::Roles => serde_json::to_value(engine.role_distribution())?,
        Command::Correlation => serde_json::to_value(engine.stat_correlation())?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Bad hero names and unknown lanes come back as a structured result,
/// the same `{"error": ...}` shape the rendering side expects from the
/// engine; anything else aborts the process.
fn to_json<T: serde::Serialize>(
    result: Result<T, Error>,
) -> anyhow::Result<serde_json::Value> {
    match result {
        Ok(value) => Ok(serde_json::to_value(value)?),
        Err(err) if err.is_recoverable() => Ok(serde_json::json!({ "error": err.to_string() })),
        Err(err) => Err(err.into()),
    }
}
