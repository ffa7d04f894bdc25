pub mod config;
pub mod error;
pub mod partition;
pub mod progress;
pub mod reader;
pub mod splitter;
pub mod writer;

pub use config::{SplitMode, SplitRequest, SplitterConfig};
pub use error::{Result, SplitError};
pub use partition::{Chunk, Chunks, Partition};
pub use progress::{ChunkWritten, NoProgress, ProgressObserver};
pub use reader::{load_document, Document};
pub use splitter::{SplitSummary, Splitter};
pub use writer::{FixedSuffix, SuffixSource, UnixTimestamp};
