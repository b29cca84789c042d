use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to extract text: {0}")]
    Extraction(String),

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Annotator error: {0}")]
    Annotation(String),

    #[error("Invalid skill vocabulary: {0}")]
    Vocabulary(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    ExtractionFailure,
    ModelLoadFailure,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput(_) => ErrorKind::MissingInput,
            Error::Extraction(_) => ErrorKind::ExtractionFailure,
            Error::ModelLoad(_) => ErrorKind::ModelLoadFailure,
            _ => ErrorKind::Other,
        }
    }
}
