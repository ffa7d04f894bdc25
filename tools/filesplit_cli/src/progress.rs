use filesplit::{ChunkWritten, ProgressObserver};
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks";

/// Drives an `indicatif` bar from chunk completion events.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// Bar drawn on stderr. Its length is unknown until the first chunk lands.
    pub fn stderr() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        Self::new(bar)
    }

    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl ProgressObserver for BarProgress {
    fn chunk_written(&mut self, event: &ChunkWritten) {
        if event.index == 1 {
            self.bar.set_length(event.total as u64);
        }
        self.bar.inc(1);
        if event.is_last() {
            self.bar.finish();
        }
    }
}
