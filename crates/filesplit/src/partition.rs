use std::ops::Range;

use crate::config::SplitMode;
use crate::error::{Result, SplitError};

/// A contiguous `[start, end)` range of document lines bound for one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position, used in the output file name
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Chunk layout for a document of `total_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    total_lines: usize,
    lines_per_file: usize,
}

impl Partition {
    /// Derive the lines-per-file count from `mode` and `number`.
    ///
    /// `ByFileCount` uses `ceil(total_lines / number)`, which never yields more
    /// than `number` files. `ByLineCount` takes `number` as is.
    pub fn new(total_lines: usize, mode: SplitMode, number: usize) -> Result<Self> {
        let lines_per_file = match mode {
            SplitMode::ByFileCount if number == 0 => 0,
            SplitMode::ByFileCount => total_lines.div_ceil(number),
            SplitMode::ByLineCount => number,
        };

        if lines_per_file == 0 {
            return Err(SplitError::InvalidPartition {
                total_lines,
                number,
            });
        }

        Ok(Self {
            total_lines,
            lines_per_file,
        })
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn lines_per_file(&self) -> usize {
        self.lines_per_file
    }

    pub fn chunk_count(&self) -> usize {
        self.total_lines.div_ceil(self.lines_per_file)
    }

    pub fn chunks(&self) -> Chunks {
        Chunks {
            next_start: 0,
            next_index: 1,
            total_lines: self.total_lines,
            lines_per_file: self.lines_per_file,
        }
    }
}

/// Lazy walk over chunk boundaries, in order. Consumed once.
#[derive(Debug)]
pub struct Chunks {
    next_start: usize,
    next_index: usize,
    total_lines: usize,
    lines_per_file: usize,
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.next_start >= self.total_lines {
            return None;
        }

        let start = self.next_start;
        let end = start.saturating_add(self.lines_per_file).min(self.total_lines);
        let chunk = Chunk {
            index: self.next_index,
            start,
            end,
        };

        self.next_start = end;
        self.next_index += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .total_lines
            .saturating_sub(self.next_start)
            .div_ceil(self.lines_per_file);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks {}
