//! Media source abstraction and the yt-dlp implementation.
//!
//! The `MediaSource` trait is the seam between the pipeline and the
//! extractor so the pipeline can be exercised in tests without spawning
//! yt-dlp. All methods are `&self`; the production implementation is
//! stateless and shells out per call.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::core::process::run_with_timeout;
use crate::download::playlist::{parse_flat_playlist, PlaylistEntry};
use crate::download::probe::{parse_video_json, StreamVariant, VideoStreams};

/// Source of video metadata and media streams.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Enumerates the progressive streams of a single video.
    async fn probe(&self, url: &Url) -> AppResult<VideoStreams>;

    /// Lists the videos contained in a playlist.
    async fn playlist_entries(&self, url: &Url) -> AppResult<Vec<PlaylistEntry>>;

    /// Downloads one selected stream into `dir`, returning the file path.
    ///
    /// `file_stem` is the sanitized title chosen by the caller; the
    /// extension is fixed to mp4 (progressive streams only).
    async fn fetch(&self, url: &Url, variant: &StreamVariant, dir: &Path, file_stem: &str) -> AppResult<PathBuf>;
}

/// Production source backed by the yt-dlp binary.
pub struct YtdlpSource;

impl YtdlpSource {
    pub fn new() -> Self {
        Self
    }

    async fn run_ytdlp(&self, args: &[&str]) -> AppResult<String> {
        let ytdl_bin = &*config::YTDL_BIN;
        let mut cmd = Command::new(ytdl_bin);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        let output = run_with_timeout(&mut cmd, config::download::ytdlp_timeout()).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Download(format!(
                "yt-dlp failed: {}",
                stderr.lines().next().unwrap_or("unknown error")
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for YtdlpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaSource for YtdlpSource {
    async fn probe(&self, url: &Url) -> AppResult<VideoStreams> {
        log::info!("Probing streams for {}", url);
        let stdout = self
            .run_ytdlp(&[
                "--dump-single-json",
                "--no-playlist",
                "--no-warnings",
                "--socket-timeout",
                "30",
                url.as_str(),
            ])
            .await?;
        parse_video_json(&stdout)
    }

    async fn playlist_entries(&self, url: &Url) -> AppResult<Vec<PlaylistEntry>> {
        log::info!("Extracting playlist from {}", url);
        let stdout = self
            .run_ytdlp(&[
                "--flat-playlist",
                "--dump-json",
                "-i",
                "--no-warnings",
                "--socket-timeout",
                "30",
                url.as_str(),
            ])
            .await?;
        Ok(parse_flat_playlist(&stdout))
    }

    async fn fetch(&self, url: &Url, variant: &StreamVariant, dir: &Path, file_stem: &str) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.mp4", file_stem));
        let path_str = path
            .to_str()
            .ok_or_else(|| AppError::Download(format!("Non-UTF8 download path: {}", path.display())))?;

        log::info!("Downloading {} ({}) to {}", url, variant.label, path.display());
        self.run_ytdlp(&[
            "-f",
            &variant.format_id,
            "-o",
            path_str,
            "--no-playlist",
            "--no-warnings",
            url.as_str(),
        ])
        .await?;

        if !path.exists() {
            return Err(AppError::Download(format!(
                "yt-dlp reported success but {} is missing",
                path.display()
            )));
        }
        Ok(path)
    }
}
