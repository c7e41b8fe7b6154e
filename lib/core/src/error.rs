use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load dataset: {0}")]
    DataLoad(String),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Dataset contains no hero records")]
    EmptyDataset,

    #[error("Not enough heroes to build the index: need at least {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Hero not found: {0}")]
    HeroNotFound(String),

    #[error("Invalid lane name: {0}")]
    InvalidLane(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether the error is recoverable per request, as opposed to fatal
    /// at startup. Callers surface recoverable errors as a structured
    /// result instead of terminating.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::HeroNotFound(_) | Error::InvalidLane(_))
    }
}
