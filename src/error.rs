use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("{0}")]
    Message(String),
    #[error("invalid percentage '{0}': expected a whole number")]
    InvalidPercentage(String),
    #[error("invalid config file {}: {detail}", path.display())]
    InvalidConfig { path: PathBuf, detail: String },
    #[error("{} is not a skills document: {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to save skills to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillError>;
