use std::path::PathBuf;

/// Fired once after each chunk file is fully written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkWritten {
    /// 1-based chunk index
    pub index: usize,
    pub total: usize,
    pub lines: usize,
    pub path: PathBuf,
}

impl ChunkWritten {
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

/// Observer for per-chunk completion. Advisory only.
pub trait ProgressObserver {
    fn chunk_written(&mut self, event: &ChunkWritten);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ChunkWritten),
{
    fn chunk_written(&mut self, event: &ChunkWritten) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn chunk_written(&mut self, _event: &ChunkWritten) {}
}
