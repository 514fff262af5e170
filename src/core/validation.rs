//! Validation for user-supplied links and derived file names
//!
//! Whitelist-based URL checking (only YouTube domains ever reach the
//! downloader subprocess) and filename sanitization for artifact paths
//! derived from video titles.

use thiserror::Error;
use url::Url;

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Invalid URL format or non-YouTube domain
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),
}

/// Validates that a URL is a well-formed YouTube URL.
///
/// Whitelist approach: only HTTP/HTTPS schemes, only youtube.com,
/// youtu.be, and youtube-nocookie.com domains (plus subdomains).
pub fn validate_youtube_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url).map_err(|_| ValidationError::InvalidUrl(url.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl(format!(
            "{} (invalid scheme: {})",
            url,
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ValidationError::InvalidUrl(format!("{} (no host)", url)))?;

    let is_youtube = host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtu.be"
        || host.ends_with(".youtube-nocookie.com");

    if !is_youtube {
        return Err(ValidationError::InvalidUrl(format!(
            "{} (not a YouTube domain: {})",
            url, host
        )));
    }

    Ok(())
}

/// Sanitizes a filename by removing filesystem-unsafe characters.
///
/// Drops path separators, reserved characters (`: * ? " < > |`), and
/// control characters. Video titles go through this before becoming the
/// artifact file stem.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !['/', '\\', ':', '*', '?', '"', '<', '>', '|'].contains(c))
        .filter(|c| !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_youtube_url_valid() {
        let valid_urls = vec![
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
        ];

        for url in valid_urls {
            assert!(validate_youtube_url(url).is_ok(), "Failed for: {}", url);
        }
    }

    #[test]
    fn test_validate_youtube_url_invalid_scheme() {
        let invalid_urls = vec![
            "ftp://youtube.com/watch?v=abc",
            "file:///youtube.com/watch?v=abc",
            "javascript:alert('xss')",
        ];

        for url in invalid_urls {
            assert!(validate_youtube_url(url).is_err(), "Should fail for: {}", url);
        }
    }

    #[test]
    fn test_validate_youtube_url_invalid_domain() {
        let invalid_urls = vec![
            "https://evil.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.evil.com/watch?v=dQw4w9WgXcQ",
            "https://youtubecom.malware.org/watch?v=abc",
        ];

        for url in invalid_urls {
            assert!(validate_youtube_url(url).is_err(), "Should fail for: {}", url);
        }
    }

    #[test]
    fn test_validate_youtube_url_malformed() {
        let invalid_urls = vec!["not a url", "htt://broken", "youtube.com", ""];

        for url in invalid_urls {
            assert!(validate_youtube_url(url).is_err(), "Should fail for: {}", url);
        }
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("video.mp4"), "video.mp4");
        assert_eq!(sanitize_filename("my-video_2024.mp4"), "my-video_2024.mp4");
        assert_eq!(sanitize_filename("video (1).mp4"), "video (1).mp4");
    }

    #[test]
    fn test_sanitize_filename_removes_unsafe_chars() {
        let cases = vec![
            ("video:file.mp4", "videofile.mp4"),
            ("path/to/file.mp4", "pathtofile.mp4"),
            ("file*?.mp4", "file.mp4"),
            ("file<>|\".mp4", "file.mp4"),
            ("video\\file.mp4", "videofile.mp4"),
        ];

        for (input, expected) in cases {
            assert_eq!(sanitize_filename(input), expected, "Failed for: {}", input);
        }
    }

    #[test]
    fn test_sanitize_filename_removes_control_chars() {
        let input = "file\x00\x01\x1f\x7fname.mp4";
        assert_eq!(sanitize_filename(input), "filename.mp4");
    }
}
