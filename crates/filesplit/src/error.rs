use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot open source {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed writing chunk file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid partition: {total_lines} lines with number {number} yields zero lines per file")]
    InvalidPartition { total_lines: usize, number: usize },

    #[error("Config error in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigSource,
    },
}

/// Underlying cause of a configuration failure
#[derive(Error, Debug)]
pub enum ConfigSource {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;
