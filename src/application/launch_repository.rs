// Repository trait for launch data access
use crate::domain::launch::LaunchTable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no launch records")]
    Empty,
}

pub trait LaunchRepository: Send + Sync {
    /// Load the complete launch table. Called once at startup.
    fn load_launches(&self) -> Result<LaunchTable, DatasetError>;
}
