use log::{debug, info, warn};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::{SplitRequest, SplitterConfig};
use crate::error::{Result, SplitError};
use crate::partition::Partition;
use crate::progress::{ChunkWritten, ProgressObserver};
use crate::reader::load_document;
use crate::writer::{
    chunk_file_name, create_output_directory, extension_of, write_chunk, SuffixSource,
    UnixTimestamp,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub total_lines: usize,
    /// Zero when the input was empty
    pub lines_per_file: usize,
    pub files_written: usize,
    /// `None` when the input was empty and nothing was created
    pub output_dir: Option<PathBuf>,
}

/// Runs one split: read, partition, create the directory, write chunks in order.
pub struct Splitter {
    config: SplitterConfig,
    suffix: Box<dyn SuffixSource>,
}

impl Splitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self {
            config,
            suffix: Box::new(UnixTimestamp),
        }
    }

    /// Replace the timestamp suffix, e.g. for reproducible directory names.
    pub fn with_suffix_source(mut self, source: impl SuffixSource + 'static) -> Self {
        self.suffix = Box::new(source);
        self
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `request.input`. The first error aborts the run; files and the
    /// directory created before it stay on disk.
    pub fn run(
        &self,
        request: SplitRequest,
        progress: &mut dyn ProgressObserver,
    ) -> Result<SplitSummary> {
        request.validate()?;

        let document = load_document(&request.input)?;
        let total_lines = document.len();
        if document.is_empty() {
            warn!("{:?} is empty, nothing to split", request.input);
            return Ok(SplitSummary {
                total_lines: 0,
                lines_per_file: 0,
                files_written: 0,
                output_dir: None,
            });
        }

        let partition = Partition::new(total_lines, request.mode, request.number)?;
        debug!(
            "{:?}: {} lines, {} per file, {} chunks",
            request.mode,
            total_lines,
            partition.lines_per_file(),
            partition.chunk_count()
        );

        let base_name = base_name_of(&request.input)?;
        let output_dir =
            create_output_directory(&self.config.output_root, &base_name, &self.suffix.suffix())?;
        let extension = extension_of(&request.input);

        let total = partition.chunk_count();
        let mut files_written = 0;
        for chunk in partition.chunks() {
            let path = output_dir.join(chunk_file_name(
                &self.config.file_prefix,
                chunk.index,
                &extension,
            ));
            write_chunk(&document.lines()[chunk.range()], &path)?;
            files_written += 1;
            debug!("Wrote {} lines to {:?}", chunk.len(), path);

            progress.chunk_written(&ChunkWritten {
                index: chunk.index,
                total,
                lines: chunk.len(),
                path,
            });
        }

        info!(
            "Split {} lines into {} files ({} lines per file) in {:?}",
            total_lines,
            files_written,
            partition.lines_per_file(),
            output_dir
        );

        Ok(SplitSummary {
            total_lines,
            lines_per_file: partition.lines_per_file(),
            files_written,
            output_dir: Some(output_dir),
        })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(SplitterConfig::default())
    }
}

fn base_name_of(path: &Path) -> Result<OsString> {
    path.file_name()
        .map(OsStr::to_os_string)
        .ok_or_else(|| SplitError::InvalidInput(format!("{:?} has no file name", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitMode;
    use crate::progress::NoProgress;
    use crate::writer::FixedSuffix;
    use std::fs;
    use tempfile::TempDir;

    fn splitter_in(root: &Path) -> Splitter {
        let config = SplitterConfig {
            output_root: root.to_path_buf(),
            ..SplitterConfig::default()
        };
        Splitter::new(config).with_suffix_source(FixedSuffix("test".to_string()))
    }

    fn write_input(dir: &Path, name: &str, line_count: usize) -> PathBuf {
        let path = dir.join(name);
        let content: String = (1..=line_count).map(|i| format!("line {}\n", i)).collect();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_base_name_keeps_extension() {
        assert_eq!(base_name_of(Path::new("dir/notes.txt")).unwrap(), "notes.txt");
    }

    #[test]
    fn test_base_name_of_root_is_invalid() {
        assert!(matches!(
            base_name_of(Path::new("/")),
            Err(SplitError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_run_rejects_zero_number_before_reading() {
        let root = TempDir::new().unwrap();
        let request = SplitRequest::new(SplitMode::ByFileCount, root.path().join("missing"), 0);

        let result = splitter_in(root.path()).run(request, &mut NoProgress);
        assert!(matches!(result, Err(SplitError::InvalidInput(_))));
    }

    #[test]
    fn test_progress_fires_once_per_chunk() {
        let root = TempDir::new().unwrap();
        let input = write_input(root.path(), "data.log", 10);
        let request = SplitRequest::new(SplitMode::ByLineCount, input, 4);

        let mut events = Vec::new();
        let mut record = |event: &ChunkWritten| events.push(event.clone());
        splitter_in(root.path()).run(request, &mut record).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(
            events.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(events.iter().all(|e| e.total == 3));
        assert_eq!(events[2].lines, 2);
        assert!(events[2].is_last());
        assert_eq!(
            events[0].path,
            root.path().join("data.log_test").join("output_1.log")
        );
    }

    #[test]
    fn test_custom_file_prefix() {
        let root = TempDir::new().unwrap();
        let input = write_input(root.path(), "data", 3);
        let config = SplitterConfig {
            output_root: root.path().to_path_buf(),
            file_prefix: "part".to_string(),
        };
        let splitter = Splitter::new(config).with_suffix_source(FixedSuffix("x".to_string()));

        let summary = splitter
            .run(SplitRequest::new(SplitMode::ByFileCount, input, 2), &mut NoProgress)
            .unwrap();

        let dir = summary.output_dir.unwrap();
        assert!(dir.join("part_1").is_file());
        assert!(dir.join("part_2").is_file());
    }
}
