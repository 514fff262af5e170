//! Per-video download-upload pipeline and sequential playlist runs.
//!
//! One video means one local artifact: downloaded into the working
//! directory, uploaded to the host, then removed whether or not the
//! upload succeeded. Playlists are an explicit sequential task list with
//! a per-item outcome, reported through `ProgressReporter` so the run is
//! observable without a live chat transport.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

use crate::core::error::{AppError, AppResult};
use crate::core::validation::sanitize_filename;
use crate::download::playlist::PlaylistEntry;
use crate::download::source::MediaSource;
use crate::hosting::HostClient;
use crate::resolution::ResolutionLabel;

/// Result of one download-upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// Host accepted the file and returned a public link
    Uploaded { title: String, link: String },
    /// Host rejected the upload; the local file was still deleted
    Failed { title: String },
}

/// Per-item outcome of a playlist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Uploaded { title: String, link: String },
    UploadFailed { title: String },
    /// The uniformly chosen label is not offered by this video
    ResolutionUnavailable { label: ResolutionLabel },
    Failed { reason: String },
}

/// Receives progress callbacks during a playlist run.
///
/// The Telegram layer implements this with chat replies; tests record
/// the calls.
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    async fn item_started(&self, index: usize, total: usize);
    async fn item_finished(&self, index: usize, total: usize, outcome: &ItemOutcome);
}

/// Orchestrates download, upload, and cleanup for videos and playlists.
pub struct Pipeline {
    source: Arc<dyn MediaSource>,
    host: HostClient,
    work_dir: PathBuf,
}

impl Pipeline {
    pub fn new(source: Arc<dyn MediaSource>, host: HostClient, work_dir: PathBuf) -> Self {
        Self { source, host, work_dir }
    }

    /// Downloads one video at the requested quality, uploads it, and
    /// deletes the local file.
    ///
    /// `quality` of `None` selects the highest-resolution progressive
    /// stream. A requested-but-missing resolution fails with
    /// [`AppError::ResolutionNotFound`] before anything is downloaded.
    /// The local artifact never outlives the upload attempt.
    pub async fn process_video(&self, url: &Url, quality: Option<&ResolutionLabel>) -> AppResult<UploadResult> {
        let streams = self.source.probe(url).await?;
        let variant = streams.select(quality)?;

        let mut stem = sanitize_filename(&streams.title);
        if stem.is_empty() {
            stem = "video".to_string();
        }

        let path = self.source.fetch(url, variant, &self.work_dir, &stem).await?;
        let uploaded = self.host.upload(&path).await;
        remove_artifact(&path).await;

        match uploaded {
            Ok(link) => Ok(UploadResult::Uploaded {
                title: streams.title,
                link,
            }),
            Err(e) => {
                log::error!("Upload failed for '{}': {}", streams.title, e);
                Ok(UploadResult::Failed { title: streams.title })
            }
        }
    }

    /// Processes every playlist entry sequentially at one uniform label.
    ///
    /// Each entry yields its own outcome; a missing resolution or a
    /// failed upload does not stop the remaining entries.
    pub async fn run_playlist(
        &self,
        entries: &[PlaylistEntry],
        label: &ResolutionLabel,
        reporter: &dyn ProgressReporter,
    ) -> Vec<ItemOutcome> {
        let total = entries.len();
        let mut outcomes = Vec::with_capacity(total);

        for (idx, entry) in entries.iter().enumerate() {
            let index = idx + 1;
            reporter.item_started(index, total).await;

            let outcome = match self.process_video(&entry.url, Some(label)).await {
                Ok(UploadResult::Uploaded { title, link }) => ItemOutcome::Uploaded { title, link },
                Ok(UploadResult::Failed { title }) => ItemOutcome::UploadFailed { title },
                Err(AppError::ResolutionNotFound(_)) => ItemOutcome::ResolutionUnavailable { label: label.clone() },
                Err(e) => {
                    log::error!("Playlist entry {} ({}) failed: {}", index, entry.url, e);
                    ItemOutcome::Failed { reason: e.to_string() }
                }
            };

            reporter.item_finished(index, total, &outcome).await;
            outcomes.push(outcome);
        }

        outcomes
    }
}

async fn remove_artifact(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        log::warn!("Failed to remove artifact {}: {}", path.display(), e);
    }
}
