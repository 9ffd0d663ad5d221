use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::aliases::AliasMap;
use crate::constants::{
    DEFAULT_HUMIDITY_PCT, DEFAULT_SPREAD, DEFAULT_TEMPERATURE_F, DEFAULT_TOTAL_LINE,
    DEFAULT_WEATHER_DETAIL, DEFAULT_WIND_MPH, MIN_SEASON,
};
use crate::error::{FeatureError, Result};
use crate::team::TeamCatalog;

/// How `total_score` treats a missing score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullScorePolicy {
    /// Missing if either score is missing.
    #[default]
    Propagate,
    /// A missing score counts as 0.
    #[serde(alias = "zero_fill", alias = "zero-fill")]
    Zero,
}

impl std::str::FromStr for NullScorePolicy {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "propagate" => Ok(NullScorePolicy::Propagate),
            "zero" | "zero_fill" | "zero-fill" => Ok(NullScorePolicy::Zero),
            _ => Err(FeatureError::Config(format!(
                "unknown null score policy: {}. Use propagate or zero.",
                s
            ))),
        }
    }
}

/// Values written into missing source cells by the finalizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillDefaults {
    pub temperature_f: i32,
    pub wind_mph: i32,
    pub humidity_pct: i32,
    pub weather_detail: String,
    pub spread: f64,
    pub total_line: f64,
}

impl Default for FillDefaults {
    fn default() -> Self {
        FillDefaults {
            temperature_f: DEFAULT_TEMPERATURE_F,
            wind_mph: DEFAULT_WIND_MPH,
            humidity_pct: DEFAULT_HUMIDITY_PCT,
            weather_detail: DEFAULT_WEATHER_DETAIL.to_string(),
            spread: DEFAULT_SPREAD,
            total_line: DEFAULT_TOTAL_LINE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Enable the built-in franchise history table.
    pub builtin: bool,
    /// Extra `alias,canonical` CSV, resolved relative to the working directory.
    pub file: Option<PathBuf>,
}

/// Pipeline settings, loaded from TOML. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub min_season: i32,
    pub null_scores: NullScorePolicy,
    /// Batches at least this large are mapped in parallel.
    pub parallel_threshold: usize,
    /// Log and drop malformed input rows instead of failing the batch.
    pub skip_malformed: bool,
    pub fill: FillDefaults,
    pub aliases: AliasConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            min_season: MIN_SEASON,
            null_scores: NullScorePolicy::default(),
            parallel_threshold: 4096,
            skip_malformed: false,
            fill: FillDefaults::default(),
            aliases: AliasConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FeatureError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FeatureError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FeatureError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Build the team catalog, loading aliases if configured.
    pub fn catalog(&self) -> Result<TeamCatalog> {
        let mut aliases = if self.aliases.builtin {
            AliasMap::builtin()
        } else {
            AliasMap::new()
        };
        if let Some(file) = &self.aliases.file {
            let mut extra = AliasMap::new();
            extra.read_from_file(file)?;
            aliases.extend(extra);
        }
        Ok(TeamCatalog::with_aliases(aliases))
    }
}
