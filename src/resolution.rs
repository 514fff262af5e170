//! Resolution labels and quality choices
//!
//! Resolution labels ("720p") are categorical strings. Playlist-wide
//! lowest/highest selection orders them by the numeric height parsed from
//! the label rather than lexically, so "1080p" ranks above "144p". Labels
//! without a parsable height sort below any labeled height.

use std::cmp::Ordering;
use std::fmt;

/// A categorical stream quality label such as "720p".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionLabel(String);

impl ResolutionLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn from_height(height: u32) -> Self {
        Self(format!("{}p", height))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric height encoded in the label, if any ("720p" -> 720).
    pub fn height(&self) -> Option<u32> {
        let digits: String = self.0.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

impl Ord for ResolutionLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.height(), other.height()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ResolutionLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ResolutionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResolutionLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Quality picked by the user via an inline button.
///
/// Single videos carry an exact label; playlists carry a policy applied
/// uniformly across every contained video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityChoice {
    Exact(ResolutionLabel),
    Lowest,
    Highest,
}

impl QualityChoice {
    /// Parses callback data of the form `q:<label>`, `q:lowest`, `q:highest`.
    pub fn parse_callback(data: &str) -> Option<Self> {
        let rest = data.strip_prefix("q:")?;
        match rest {
            "lowest" => Some(Self::Lowest),
            "highest" => Some(Self::Highest),
            "" => None,
            label => Some(Self::Exact(ResolutionLabel::new(label))),
        }
    }

    /// Callback data carried by the matching inline button.
    pub fn callback_data(&self) -> String {
        match self {
            Self::Exact(label) => format!("q:{}", label),
            Self::Lowest => "q:lowest".to_string(),
            Self::Highest => "q:highest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> ResolutionLabel {
        ResolutionLabel::new(s)
    }

    #[test]
    fn test_ordering_is_numeric_not_lexical() {
        // Lexically "1080p" < "144p"; categorical ordering must not agree.
        assert!(label("1080p") > label("144p"));
        assert!(label("2160p") > label("720p"));
        assert!(label("144p") < label("240p"));
    }

    #[test]
    fn test_standard_ladder_order() {
        let ladder = ["144p", "240p", "360p", "480p", "720p", "1080p", "1440p", "2160p"];
        for pair in ladder.windows(2) {
            assert!(label(pair[0]) < label(pair[1]), "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_unlabeled_heights_sort_below() {
        assert!(label("audio only") < label("144p"));
        assert!(label("") < label("144p"));
    }

    #[test]
    fn test_min_max_over_mixed_sets() {
        let labels: Vec<ResolutionLabel> = ["144p", "360p", "720p", "240p", "480p"]
            .iter()
            .map(|s| label(s))
            .collect();
        assert_eq!(labels.iter().min(), Some(&label("144p")));
        assert_eq!(labels.iter().max(), Some(&label("720p")));
    }

    #[test]
    fn test_callback_roundtrip() {
        for choice in [
            QualityChoice::Exact(label("720p")),
            QualityChoice::Lowest,
            QualityChoice::Highest,
        ] {
            let data = choice.callback_data();
            assert_eq!(QualityChoice::parse_callback(&data), Some(choice));
        }
    }

    #[test]
    fn test_parse_callback_rejects_garbage() {
        assert_eq!(QualityChoice::parse_callback("mode:settings"), None);
        assert_eq!(QualityChoice::parse_callback("q:"), None);
        assert_eq!(QualityChoice::parse_callback(""), None);
    }
}
