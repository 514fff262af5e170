//! Scripted media source for pipeline tests.
//!
//! Probes and playlists are served from in-memory fixtures; fetch writes
//! a small placeholder file so delete-after-upload behavior is observable
//! on a real directory.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use tubeferry::core::{AppError, AppResult};
use tubeferry::download::{MediaSource, PlaylistEntry, StreamVariant, VideoStreams};
use tubeferry::resolution::ResolutionLabel;

/// In-memory `MediaSource` built from per-URL fixtures.
#[derive(Default)]
pub struct MockSource {
    videos: HashMap<String, VideoStreams>,
    playlist: Vec<PlaylistEntry>,
    pub fetch_calls: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a video with the given available resolution labels.
    pub fn with_video(mut self, url: &str, title: &str, labels: &[&str]) -> Self {
        let variants = labels
            .iter()
            .map(|label| StreamVariant {
                label: ResolutionLabel::new(*label),
                format_id: format!("f{}", label),
            })
            .collect();
        self.videos.insert(
            url.to_string(),
            VideoStreams {
                title: title.to_string(),
                variants,
            },
        );
        self
    }

    /// Registers playlist entries as (url, title) pairs.
    pub fn with_playlist(mut self, entries: &[(&str, &str)]) -> Self {
        self.playlist = entries
            .iter()
            .enumerate()
            .map(|(idx, (url, title))| PlaylistEntry {
                url: Url::parse(url).expect("mock playlist URL must parse"),
                title: title.to_string(),
                position: idx + 1,
            })
            .collect();
        self
    }
}

#[async_trait]
impl MediaSource for MockSource {
    async fn probe(&self, url: &Url) -> AppResult<VideoStreams> {
        self.videos
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| AppError::Download(format!("unknown url {}", url)))
    }

    async fn playlist_entries(&self, _url: &Url) -> AppResult<Vec<PlaylistEntry>> {
        Ok(self.playlist.clone())
    }

    async fn fetch(&self, _url: &Url, variant: &StreamVariant, dir: &Path, file_stem: &str) -> AppResult<PathBuf> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.mp4", file_stem));
        tokio::fs::write(&path, format!("fake media ({})", variant.format_id)).await?;
        Ok(path)
    }
}
