//! gymcard - build a recent-workout card from a GymRun backup.
//!
//! Fetching the backup and posting the card are left to the caller; this
//! binary reads the bytes from disk, refreshes the state store and writes the
//! SVG card when the session is new.

use anyhow::{bail, Context, Result};
use clap::Parser;
use gymcard_lib::database::open_state_db;
use gymcard_lib::services::config::AppConfig;
use gymcard_lib::services::refresh::{RefreshCoordinator, RefreshOutcome, RefreshSource};
use gymcard_lib::services::render::{format_sets, render_card, DisplayUnit};
use gymcard_lib::SessionBatch;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gymcard")]
#[command(about = "Summarise the latest GymRun workout as an SVG card")]
struct Args {
    /// Backup archive (or bare database with --raw-db)
    input: Option<PathBuf>,

    /// Treat INPUT as the bare gymapp.db instead of the encrypted backup
    #[arg(long)]
    raw_db: bool,

    /// Accept the session even if it is not newer than the last one
    #[arg(short, long)]
    force: bool,

    /// Weight unit on the card: native, lbs or kg
    #[arg(short, long)]
    unit: Option<DisplayUnit>,

    /// Where to write the SVG card
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// State database path
    #[arg(long)]
    state: Option<PathBuf>,

    /// Print the cached batch and exit
    #[arg(long)]
    show: bool,
}

fn print_batch(batch: &SessionBatch, unit: DisplayUnit) {
    if batch.is_empty() {
        println!("(no exercises)");
    }
    for group in &batch.groups {
        println!("{}: {}", group.exercise_name, format_sets(group, unit));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(unit) = args.unit {
        config.display_unit = unit;
    }
    if let Some(out) = args.out {
        config.card_path = out;
    }
    if let Some(state) = args.state {
        config.state_db = state;
    }

    let conn = open_state_db(&config.state_db)
        .with_context(|| format!("failed to open state db {}", config.state_db.display()))?;
    let coordinator = RefreshCoordinator::new(conn);

    if args.show {
        match coordinator.cached_batch().await? {
            Some(batch) => print_batch(&batch, config.display_unit),
            None => println!("(nothing cached yet)"),
        }
        return Ok(());
    }

    let Some(input) = args.input else {
        bail!("INPUT is required unless --show is given");
    };
    let bytes = fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
    let source = if args.raw_db {
        RefreshSource::DatabaseBytes(bytes)
    } else {
        RefreshSource::ArchiveBytes(bytes)
    };

    match coordinator.refresh(source, args.force).await? {
        RefreshOutcome::Updated { batch, .. } => {
            let svg = render_card(&batch, config.display_unit, chrono::Utc::now())
                .context("failed to render card")?;
            fs::write(&config.card_path, svg).with_context(|| {
                format!("failed to write card {}", config.card_path.display())
            })?;
            print_batch(&batch, config.display_unit);
            println!("Card written to {}", config.card_path.display());
        }
        RefreshOutcome::Unchanged { latest, cursor } => {
            println!("No new workout (latest {latest}, last posted {cursor})");
        }
    }

    Ok(())
}
