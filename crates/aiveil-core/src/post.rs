//! Post-level glue between the feed scanner and the classifier.
//!
//! The scanner extracts text from several content elements of a post; this
//! module joins them into the single string the classifier expects, and maps
//! a verdict to the notice shown on the overlay that hides the post.

use serde::{Deserialize, Serialize};

use crate::classifier::{Confidence, Verdict};

/// Overlay title for high and medium confidence matches.
pub const DETECTED_TITLE: &str = "AI Content Detected";

/// Overlay title for low confidence matches.
pub const POSSIBLE_TITLE: &str = "Possible AI Content";

/// Label of the button that reveals a hidden post.
pub const SHOW_POST_LABEL: &str = "Show Post";

/// Text of a single post, assembled from its content segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Joins non-empty segments with single spaces.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let parts: Vec<&str> = segments
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        Self(parts.join(" "))
    }

    /// Returns the assembled text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no segment contributed any text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the overlay over a hidden post should say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayNotice {
    /// Headline shown on the overlay.
    pub title: String,
    /// Label for the reveal button.
    pub reveal_label: String,
    /// Confidence of the underlying match.
    pub confidence: Confidence,
}

impl OverlayNotice {
    /// Builds the notice for a verdict, or `None` if the post stays visible.
    pub fn for_verdict(verdict: &Verdict) -> Option<Self> {
        if !verdict.matched {
            return None;
        }

        let confidence = verdict.confidence.unwrap_or(Confidence::High);
        let title = match confidence {
            Confidence::Low => POSSIBLE_TITLE,
            Confidence::Medium | Confidence::High => DETECTED_TITLE,
        };

        Some(Self {
            title: title.to_string(),
            reveal_label: SHOW_POST_LABEL.to_string(),
            confidence,
        })
    }
}
