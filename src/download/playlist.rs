//! Playlist extraction and playlist-wide quality policy.
//!
//! Entries come from `yt-dlp --flat-playlist`, one JSON object per line.
//! The lowest/highest policy is resolved over the union of every entry's
//! available labels, and the single chosen label is then requested for
//! every video in the playlist.

use serde::Deserialize;
use url::Url;

use crate::core::config;
use crate::core::error::AppResult;
use crate::download::source::MediaSource;
use crate::resolution::{QualityChoice, ResolutionLabel};

/// Single entry in a playlist
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    /// Video URL
    pub url: Url,
    /// Video title
    pub title: String,
    /// Position in the playlist (1-indexed)
    pub position: usize,
}

/// JSON line from yt-dlp --flat-playlist
#[derive(Debug, Deserialize)]
struct FlatEntryJson {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Parses yt-dlp flat-playlist output (one JSON object per line).
///
/// Unparsable lines and entries without a usable URL are skipped; the
/// result is capped at `config::playlist::MAX_ITEMS` and may be empty.
pub fn parse_flat_playlist(raw: &str) -> Vec<PlaylistEntry> {
    let mut entries = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if entries.len() >= config::playlist::MAX_ITEMS {
            break;
        }
        let Ok(entry) = serde_json::from_str::<FlatEntryJson>(line) else {
            continue;
        };

        let video_url = entry
            .url
            .or_else(|| entry.id.map(|id| format!("https://www.youtube.com/watch?v={}", id)));
        let Some(video_url) = video_url else { continue };
        let Ok(parsed) = Url::parse(&video_url) else { continue };

        let position = entries.len() + 1;
        entries.push(PlaylistEntry {
            url: parsed,
            title: entry.title.unwrap_or_else(|| format!("Video {}", position)),
            position,
        });
    }

    entries
}

/// Collects every available resolution label across the playlist.
///
/// A video without progressive streams contributes nothing; a probe
/// failure aborts the survey (and with it the playlist run).
pub async fn survey_resolutions(
    source: &dyn MediaSource,
    entries: &[PlaylistEntry],
) -> AppResult<Vec<ResolutionLabel>> {
    let mut labels = Vec::new();
    for entry in entries {
        let streams = source.probe(&entry.url).await?;
        labels.extend(streams.labels());
    }
    Ok(labels)
}

/// Resolves a quality choice to the single label used for every video.
///
/// Lowest/Highest take the global min/max over the surveyed labels;
/// `None` means the survey found nothing downloadable.
pub fn choose_uniform(labels: &[ResolutionLabel], choice: &QualityChoice) -> Option<ResolutionLabel> {
    match choice {
        QualityChoice::Exact(label) => Some(label.clone()),
        QualityChoice::Lowest => labels.iter().min().cloned(),
        QualityChoice::Highest => labels.iter().max().cloned(),
    }
}
