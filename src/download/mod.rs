//! Stream probing, playlist extraction, and the download-upload pipeline.

pub mod pipeline;
pub mod playlist;
pub mod probe;
pub mod source;

pub use pipeline::{ItemOutcome, Pipeline, ProgressReporter, UploadResult};
pub use playlist::PlaylistEntry;
pub use probe::{StreamVariant, VideoStreams};
pub use source::{MediaSource, YtdlpSource};
