use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Delimited input error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid churn period: expected >= 1, got {value}")]
    InvalidChurnPeriod { value: u32 },

    #[error("Invalid delimiter {delimiter:?}: must be a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
