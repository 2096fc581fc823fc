//! Classification verdicts.

use serde::{Deserialize, Serialize};

/// Qualitative strength of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Bare "AI" surrounded by words that make it doubtful.
    Low,
    /// Bare "AI" with no supporting or contradicting context.
    Medium,
    /// Definitive term, or "AI" confirmed by context.
    High,
}

impl Confidence {
    /// Returns all confidence levels, weakest first.
    pub fn all() -> &'static [Confidence] {
        &[Confidence::Low, Confidence::Medium, Confidence::High]
    }

    /// Returns a human-readable name for this level.
    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// Result of classifying a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the text is treated as AI-related.
    pub matched: bool,
    /// Present only when matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// The literal substring that triggered the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,
}

impl Verdict {
    /// Creates a non-matching verdict.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// Creates a matching verdict.
    pub fn matched(confidence: Confidence, matched_pattern: impl Into<String>) -> Self {
        Self {
            matched: true,
            confidence: Some(confidence),
            matched_pattern: Some(matched_pattern.into()),
        }
    }

    /// Returns true if this is a low-confidence match.
    pub fn is_low_confidence(&self) -> bool {
        self.confidence == Some(Confidence::Low)
    }
}
