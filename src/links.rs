//! URL classification and normalization
//!
//! Incoming text is matched against the YouTube link shapes the bot
//! understands and short forms are rewritten to the canonical watch URL,
//! so the rest of the pipeline only ever sees `watch?v=<id>` or playlist
//! URLs. Nothing here talks to the network; a well-formed link for a
//! missing video only fails later at stream lookup.

use url::Url;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::core::validation::validate_youtube_url;

/// What kind of link the user sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Regular video (`watch?v=` or a `youtu.be` short link)
    Video,
    /// Shorts link, normalized to the watch form
    ShortForm,
    /// Playlist page
    Playlist,
}

/// A classified inbound request with its normalized URL.
#[derive(Debug, Clone)]
pub struct Request {
    /// Canonical URL used for stream resolution
    pub url: Url,
    pub kind: LinkKind,
}

/// Classifies raw message text into a [`Request`].
///
/// `youtu.be/<id>` and `youtube.com/shorts/<id>` are rewritten to
/// `https://www.youtube.com/watch?v=<id>` where `<id>` is the final path
/// segment. Anything that is not a watch, shorts, short-link, or playlist
/// URL on a YouTube domain is rejected.
pub fn classify(text: &str) -> AppResult<Request> {
    let raw = text.trim();

    if raw.len() > config::validation::MAX_URL_LENGTH {
        return Err(AppError::Validation(format!(
            "URL longer than {} characters",
            config::validation::MAX_URL_LENGTH
        )));
    }

    validate_youtube_url(raw).map_err(|e| AppError::Validation(e.to_string()))?;
    let url = Url::parse(raw)?;

    if url.host_str() == Some("youtu.be") {
        let id = last_path_segment(&url)
            .ok_or_else(|| AppError::Validation(format!("{} (no video id)", raw)))?;
        return Ok(Request {
            url: watch_url(&id)?,
            kind: LinkKind::Video,
        });
    }

    let path = url.path();
    if path.starts_with("/shorts/") {
        let id = last_path_segment(&url)
            .ok_or_else(|| AppError::Validation(format!("{} (no video id)", raw)))?;
        return Ok(Request {
            url: watch_url(&id)?,
            kind: LinkKind::ShortForm,
        });
    }
    if path.starts_with("/playlist") {
        return Ok(Request {
            url,
            kind: LinkKind::Playlist,
        });
    }
    if path.starts_with("/watch") {
        return Ok(Request {
            url,
            kind: LinkKind::Video,
        });
    }

    Err(AppError::Validation(format!("{} (unrecognized YouTube link)", raw)))
}

/// Builds the canonical watch URL for a video id.
fn watch_url(id: &str) -> AppResult<Url> {
    Ok(Url::parse(&format!("https://www.youtube.com/watch?v={}", id))?)
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_watch_url_is_video() {
        let request = classify("https://www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(request.kind, LinkKind::Video);
        assert_eq!(request.url.as_str(), "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_classify_playlist_url() {
        let request = classify("https://www.youtube.com/playlist?list=PLdef").unwrap();
        assert_eq!(request.kind, LinkKind::Playlist);
        assert_eq!(request.url.as_str(), "https://www.youtube.com/playlist?list=PLdef");
    }

    #[test]
    fn test_classify_short_link_normalized() {
        let request = classify("https://youtu.be/XYZ").unwrap();
        assert_eq!(request.kind, LinkKind::Video);
        assert_eq!(request.url.as_str(), "https://www.youtube.com/watch?v=XYZ");
    }

    #[test]
    fn test_classify_short_link_drops_query() {
        let request = classify("https://youtu.be/XYZ?t=5").unwrap();
        assert_eq!(request.url.as_str(), "https://www.youtube.com/watch?v=XYZ");
    }

    #[test]
    fn test_classify_shorts_normalized() {
        let request = classify("https://www.youtube.com/shorts/AbC123").unwrap();
        assert_eq!(request.kind, LinkKind::ShortForm);
        assert_eq!(request.url.as_str(), "https://www.youtube.com/watch?v=AbC123");
    }

    #[test]
    fn test_classify_rejects_foreign_domain() {
        assert!(classify("https://evil.com/watch?v=abc").is_err());
    }

    #[test]
    fn test_classify_rejects_unrecognized_path() {
        assert!(classify("https://www.youtube.com/channel/UCabc").is_err());
        assert!(classify("https://www.youtube.com/").is_err());
    }

    #[test]
    fn test_classify_rejects_plain_text() {
        assert!(classify("just some words").is_err());
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let request = classify("  https://youtu.be/XYZ \n").unwrap();
        assert_eq!(request.url.as_str(), "https://www.youtube.com/watch?v=XYZ");
    }
}
