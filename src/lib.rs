//! NFL Features - feature table builder for historical NFL game data.
//!
//! Turns raw game rows (scores, betting lines, weather, venue) into labelled,
//! index-encoded rows for a win/loss or spread model, with optional Python
//! bindings via PyO3.

use std::path::Path;

use tracing::info;

pub mod aliases;
pub mod betting;
pub mod config;
pub mod constants;
pub mod error;
pub mod finalize;
pub mod game;
pub mod io;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod team;
pub mod weather;

#[cfg(feature = "python")]
mod python;

pub use aliases::AliasMap;
pub use config::{FillDefaults, NullScorePolicy, PipelineConfig};
pub use constants::{CATALOG_VERSION, MIN_SEASON};
pub use error::{FeatureError, Result};
pub use game::{EnrichedGameRecord, GameRecord};
pub use pipeline::{BatchSummary, FeatureBuilder};
pub use team::{shared_catalog, TeamCatalog};
pub use weather::WeatherCondition;

/// Outcome of a file-to-file run.
#[derive(Debug)]
pub struct BuildReport {
    pub summary: BatchSummary,
    pub rejected: Vec<FeatureError>,
}

/// Read a source CSV, build features and write the result.
pub fn build_features_csv(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    builder: &FeatureBuilder,
) -> Result<BuildReport> {
    let ingested = io::read_games_from_path(input.as_ref(), builder.config().skip_malformed)?;
    let input_rows = ingested.records.len();
    let rows = builder.build_owned(ingested.records);
    io::write_features_to_path(output.as_ref(), &rows)?;

    info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        written = rows.len(),
        rejected = ingested.rejected.len(),
        "feature table written"
    );

    Ok(BuildReport {
        summary: BatchSummary::from_rows(input_rows, &rows),
        rejected: ingested.rejected,
    })
}
