use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigSource, Result, SplitError};

/// How the numeric parameter of a run is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Split into at most `number` files of near-equal size.
    ByFileCount,
    /// Put exactly `number` lines in every file; the last may hold fewer.
    ByLineCount,
}

/// Validated inputs of a single run, built at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub mode: SplitMode,
    pub input: PathBuf,
    pub number: usize,
}

impl SplitRequest {
    pub fn new(mode: SplitMode, input: impl Into<PathBuf>, number: usize) -> Self {
        Self {
            mode,
            input: input.into(),
            number,
        }
    }

    /// Reject inputs the core cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.number < 1 {
            return Err(SplitError::InvalidInput(format!(
                "number must be at least 1, got {}",
                self.number
            )));
        }
        if self.input.as_os_str().is_empty() {
            return Err(SplitError::InvalidInput("input path is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Parent directory in which the output directory is created.
    pub output_root: PathBuf,
    /// Stem of every chunk file, e.g. `output` for `output_1.txt`.
    pub file_prefix: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            file_prefix: "output".to_string(),
        }
    }
}

impl SplitterConfig {
    /// Load a YAML config file. Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SplitError::Config {
            path: path.to_path_buf(),
            source: ConfigSource::from(e),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| SplitError::Config {
            path: path.to_path_buf(),
            source: ConfigSource::from(e),
        })?;
        config.check().map_err(|reason| SplitError::Config {
            path: path.to_path_buf(),
            source: ConfigSource::Invalid(reason),
        })?;
        Ok(config)
    }

    /// `file_prefix` must name a file directly inside the output directory.
    fn check(&self) -> std::result::Result<(), String> {
        let prefix = self.file_prefix.as_str();
        if prefix.is_empty() || prefix == "." || prefix == ".." {
            return Err(format!("file_prefix {:?} is not a file name", prefix));
        }
        if prefix.contains(['/', '\\']) || prefix.contains(std::path::MAIN_SEPARATOR) {
            return Err(format!("file_prefix {:?} contains a path separator", prefix));
        }
        Ok(())
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
