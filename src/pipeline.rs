use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::constants::{MISSING_INDEX, UNKNOWN_NAME};
use crate::error::Result;
use crate::finalize;
use crate::game::{EnrichedGameRecord, GameRecord};
use crate::team::TeamCatalog;
use crate::{betting, labels, normalize, weather};

/// Turns raw game rows into model-ready feature rows.
///
/// Holds only read-only state, so one builder can serve any number of
/// batches and threads.
#[derive(Clone, Debug)]
pub struct FeatureBuilder {
    catalog: TeamCatalog,
    config: PipelineConfig,
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        FeatureBuilder {
            catalog: TeamCatalog::new(),
            config: PipelineConfig::default(),
        }
    }
}

impl FeatureBuilder {
    /// Build from config, loading any configured aliases.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let catalog = config.catalog()?;
        Ok(FeatureBuilder { catalog, config })
    }

    pub fn with_catalog(catalog: TeamCatalog, config: PipelineConfig) -> Self {
        FeatureBuilder { catalog, config }
    }

    pub fn catalog(&self) -> &TeamCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every per-row stage on one game. No season filter.
    pub fn enrich(&self, game: GameRecord) -> EnrichedGameRecord {
        let mut row = EnrichedGameRecord::from(game);
        labels::apply(&mut row);
        normalize::apply(&mut row, &self.catalog);
        betting::apply(&mut row, &self.catalog, self.config.null_scores);
        weather::apply(&mut row);
        finalize::apply(&mut row, &self.config.fill);
        row
    }

    /// Enrich a batch and drop seasons before `min_season`. Row order is kept.
    pub fn build(&self, games: &[GameRecord]) -> Vec<EnrichedGameRecord> {
        let mut rows: Vec<EnrichedGameRecord> = if games.len() >= self.config.parallel_threshold {
            games.par_iter().map(|g| self.enrich(g.clone())).collect()
        } else {
            games.iter().map(|g| self.enrich(g.clone())).collect()
        };
        self.finish(games.len(), &mut rows);
        rows
    }

    /// Same as [`FeatureBuilder::build`], consuming the input.
    pub fn build_owned(&self, games: Vec<GameRecord>) -> Vec<EnrichedGameRecord> {
        let input = games.len();
        let mut rows: Vec<EnrichedGameRecord> = if input >= self.config.parallel_threshold {
            games.into_par_iter().map(|g| self.enrich(g)).collect()
        } else {
            games.into_iter().map(|g| self.enrich(g)).collect()
        };
        self.finish(input, &mut rows);
        rows
    }

    fn finish(&self, input: usize, rows: &mut Vec<EnrichedGameRecord>) {
        finalize::retain_seasons(rows, self.config.min_season);
        debug!(
            input,
            kept = rows.len(),
            min_season = self.config.min_season,
            "season filter applied"
        );
        let summary = BatchSummary::from_rows(input, rows);
        info!(
            input = summary.input_rows,
            output = summary.output_rows,
            unindexed_teams = summary.unindexed_teams,
            unknown_favorites = summary.unknown_favorites,
            "feature batch built"
        );
    }
}

/// Counts reported after a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Home or away slots that resolved to -1.
    pub unindexed_teams: usize,
    pub unknown_favorites: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    pub spreads_covered: usize,
    pub overs: usize,
}

impl BatchSummary {
    pub fn from_rows(input_rows: usize, rows: &[EnrichedGameRecord]) -> Self {
        let mut summary = BatchSummary {
            input_rows,
            output_rows: rows.len(),
            ..Default::default()
        };
        for row in rows {
            summary.unindexed_teams += usize::from(row.home_team_index == MISSING_INDEX)
                + usize::from(row.away_team_index == MISSING_INDEX);
            let favorite = row.game.favorite_team_id.as_deref();
            summary.unknown_favorites += usize::from(favorite == Some(UNKNOWN_NAME));
            summary.home_wins += usize::from(row.home_result);
            summary.away_wins += usize::from(row.away_result);
            summary.spreads_covered += usize::from(row.spread_covered);
            summary.overs += usize::from(row.over_under_result);
        }
        summary
    }
}
