//! NFL feature table CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nfl_features::{FeatureBuilder, NullScorePolicy, PipelineConfig, TeamCatalog, CATALOG_VERSION};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nfl-features")]
#[command(about = "Build model features from historical NFL game data", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the feature table from a source CSV
    Build {
        /// Source CSV with a header row
        #[arg(short, long)]
        input: PathBuf,
        /// Destination CSV
        #[arg(short, long)]
        output: PathBuf,
        /// Override the first season kept
        #[arg(long)]
        min_season: Option<i32>,
        /// Missing score handling for total_score: propagate or zero
        #[arg(long)]
        null_scores: Option<NullScorePolicy>,
        /// Log and drop malformed rows instead of failing
        #[arg(long)]
        skip_malformed: bool,
        /// Resolve relocated and renamed franchises
        #[arg(long)]
        aliases: bool,
    },
    /// Print the team catalog with model indices
    Teams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose {
        "nfl_features=debug"
    } else {
        "nfl_features=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Build {
            input,
            output,
            min_season,
            null_scores,
            skip_malformed,
            aliases,
        } => {
            let mut config = config;
            if let Some(season) = min_season {
                config.min_season = season;
            }
            if let Some(policy) = null_scores {
                config.null_scores = policy;
            }
            config.skip_malformed |= skip_malformed;
            config.aliases.builtin |= aliases;
            build(config, &input, &output)
        }
        Commands::Teams => {
            print_teams(&config.catalog().context("building team catalog")?);
            Ok(())
        }
    }
}

fn build(config: PipelineConfig, input: &Path, output: &Path) -> Result<()> {
    info!(
        min_season = config.min_season,
        null_scores = ?config.null_scores,
        catalog_version = CATALOG_VERSION,
        "building features"
    );
    let builder = FeatureBuilder::new(config).context("building team catalog")?;
    let report = nfl_features::build_features_csv(input, output, &builder)
        .with_context(|| format!("building features from {}", input.display()))?;

    if !report.rejected.is_empty() {
        warn!(rejected = report.rejected.len(), "malformed rows were skipped");
    }

    let s = &report.summary;
    println!(
        "{} of {} rows written to {} ({} rejected)",
        s.output_rows,
        s.input_rows,
        output.display(),
        report.rejected.len()
    );
    println!(
        "home wins {}, away wins {}, spreads covered {}, overs {}",
        s.home_wins, s.away_wins, s.spreads_covered, s.overs
    );
    if s.unindexed_teams > 0 || s.unknown_favorites > 0 {
        println!(
            "unindexed team slots {}, unknown favorites {}",
            s.unindexed_teams, s.unknown_favorites
        );
    }
    Ok(())
}

fn print_teams(catalog: &TeamCatalog) {
    println!("catalog version {}", CATALOG_VERSION);
    println!("{:<6} {:<24} {:>5}", "code", "name", "index");
    for (code, name, index) in catalog.entries() {
        println!("{:<6} {:<24} {:>5}", code, name, index);
    }
    if !catalog.aliases().is_empty() {
        println!("{} aliases loaded", catalog.aliases().len());
    }
}
