use chrono::Utc;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Produces the suffix that distinguishes one run's output directory from another's.
pub trait SuffixSource {
    fn suffix(&self) -> String;
}

/// Current Unix time in whole seconds. Two runs on the same input within
/// one second collide on the directory name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTimestamp;

impl SuffixSource for UnixTimestamp {
    fn suffix(&self) -> String {
        Utc::now().timestamp().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FixedSuffix(pub String);

impl SuffixSource for FixedSuffix {
    fn suffix(&self) -> String {
        self.0.clone()
    }
}

/// Create `<root>/<base_name>_<suffix>`. An existing directory is an error.
pub fn create_output_directory(root: &Path, base_name: &OsStr, suffix: &str) -> Result<PathBuf> {
    let mut name = base_name.to_os_string();
    name.push("_");
    name.push(suffix);
    let dir = root.join(name);
    fs::create_dir(&dir).map_err(|source| SplitError::DirectoryCreate {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// File name of chunk `index`, e.g. `output_3.csv`. `extension` includes its
/// leading dot or is empty.
pub fn chunk_file_name(prefix: &str, index: usize, extension: &OsStr) -> OsString {
    let mut name = OsString::from(format!("{}_{}", prefix, index));
    name.push(extension);
    name
}

/// `.ext` of `path`, or an empty string when it has none.
pub fn extension_of(path: &Path) -> OsString {
    path.extension()
        .map(|ext| {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        })
        .unwrap_or_default()
}

/// Create or truncate `path` and write each line followed by `\n`.
/// A failure part-way leaves whatever was already flushed on disk.
pub fn write_chunk<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    let to_error = |source: std::io::Error| SplitError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;
    Ok(())
}
