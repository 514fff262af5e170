//! Stream enumeration from yt-dlp metadata
//!
//! A probe returns the video title and its progressive MP4 variants as
//! (resolution label, format id) pairs. Progressive streams carry both
//! audio and video in one file, so no muxing happens on our side.

use serde::Deserialize;

use crate::core::error::{AppError, AppResult};
use crate::resolution::ResolutionLabel;

/// One downloadable progressive stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamVariant {
    /// Categorical quality label shown to the user
    pub label: ResolutionLabel,
    /// yt-dlp format id used to download exactly this stream
    pub format_id: String,
}

/// Streams available for a single video, sorted by descending resolution.
#[derive(Debug, Clone)]
pub struct VideoStreams {
    pub title: String,
    pub variants: Vec<StreamVariant>,
}

impl VideoStreams {
    /// Available labels, highest first.
    pub fn labels(&self) -> Vec<ResolutionLabel> {
        self.variants.iter().map(|v| v.label.clone()).collect()
    }

    /// Selects a variant for download.
    ///
    /// With a label: first variant matching that exact label, or
    /// [`AppError::ResolutionNotFound`] so no download is attempted.
    /// Without: the highest-resolution progressive variant.
    pub fn select(&self, wanted: Option<&ResolutionLabel>) -> AppResult<&StreamVariant> {
        match wanted {
            Some(label) => self
                .variants
                .iter()
                .find(|v| &v.label == label)
                .ok_or_else(|| AppError::ResolutionNotFound(label.to_string())),
            None => self
                .variants
                .first()
                .ok_or_else(|| AppError::Download(format!("No progressive streams found for {}", self.title))),
        }
    }
}

/// JSON structure from yt-dlp --dump-single-json (relevant fields only)
#[derive(Debug, Deserialize)]
struct YtdlpVideoJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    formats: Vec<YtdlpFormatJson>,
}

#[derive(Debug, Deserialize)]
struct YtdlpFormatJson {
    format_id: String,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    format_note: Option<String>,
}

/// Parses yt-dlp video JSON into progressive MP4 variants.
///
/// Variants are sorted by descending resolution with duplicate labels
/// collapsed to the first listed format.
pub fn parse_video_json(raw: &str) -> AppResult<VideoStreams> {
    let parsed: YtdlpVideoJson =
        serde_json::from_str(raw).map_err(|e| AppError::Download(format!("Unexpected yt-dlp output: {}", e)))?;

    let mut variants: Vec<StreamVariant> = Vec::new();
    for format in parsed.formats {
        if !is_progressive_mp4(&format) {
            continue;
        }
        let label = format
            .height
            .map(ResolutionLabel::from_height)
            .or_else(|| format.format_note.map(ResolutionLabel::new));
        if let Some(label) = label {
            variants.push(StreamVariant {
                label,
                format_id: format.format_id,
            });
        }
    }

    variants.sort_by(|a, b| b.label.cmp(&a.label));
    variants.dedup_by(|a, b| a.label == b.label);

    Ok(VideoStreams {
        title: parsed.title.unwrap_or_else(|| "video".to_string()),
        variants,
    })
}

fn is_progressive_mp4(format: &YtdlpFormatJson) -> bool {
    let present = |codec: &Option<String>| codec.as_deref().is_some_and(|v| v != "none");
    present(&format.vcodec) && present(&format.acodec) && format.ext.as_deref() == Some("mp4")
}
