use thiserror::Error;

/// Errors raised while loading input, configuration or alias tables.
///
/// The derivation stages never fail; everything here happens at a boundary.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error at line {line}: {source}")]
    Csv { line: u64, source: csv::Error },

    #[error("malformed value {value:?} for {field} at line {line}")]
    Malformed {
        line: u64,
        field: String,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("alias {alias:?} points at non-canonical team {target:?}")]
    Alias { alias: String, target: String },
}

impl FeatureError {
    /// Input line the error refers to, when it came from a record.
    pub fn line(&self) -> Option<u64> {
        match self {
            FeatureError::Csv { line, .. } | FeatureError::Malformed { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeatureError>;
