//! Tubeferry - Telegram bot that relays YouTube media to an anonymous file host
//!
//! The bot accepts a video, Shorts, short-link, or playlist URL, asks the
//! user to pick a resolution (or a lowest/highest policy for playlists),
//! downloads the chosen progressive stream to local disk, uploads the file
//! to the configured hosting endpoint, replies with the resulting link, and
//! deletes the local copy.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, process helpers, validation
//! - `links`: URL classification and normalization
//! - `resolution`: categorical resolution labels and quality choices
//! - `download`: stream probing, playlist extraction, download pipeline
//! - `hosting`: file-host upload client
//! - `session`: per-conversation pending selections
//! - `telegram`: bot integration and handlers

pub mod cli;
pub mod core;
pub mod download;
pub mod hosting;
pub mod links;
pub mod resolution;
pub mod session;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::download::{ItemOutcome, MediaSource, Pipeline, ProgressReporter, UploadResult, YtdlpSource};
pub use crate::hosting::HostClient;
