//! Sentiment label definitions

use serde::{Deserialize, Serialize};

use crate::{
    LABEL_NEGATIVE_FLOOR, LABEL_NEUTRAL_FLOOR, LABEL_POSITIVE, LABEL_SLIGHTLY_NEGATIVE_FLOOR,
    LABEL_SLIGHTLY_POSITIVE, LABEL_VERY_POSITIVE,
};

/// The seven ordered sentiment categories, most negative first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    #[serde(rename = "Negative")]
    Negative,
    #[serde(rename = "Slightly Negative")]
    SlightlyNegative,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Slightly Positive")]
    SlightlyPositive,
    #[serde(rename = "Positive")]
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl SentimentLabel {
    /// Map a normalized score (-100..100) to its label.
    ///
    /// Positive bounds are inclusive. Neutral includes exactly -5; the
    /// remaining negative bounds are strict, so -25 is Negative.
    pub fn from_normalized(score: f64) -> Self {
        if score >= LABEL_VERY_POSITIVE {
            Self::VeryPositive
        } else if score >= LABEL_POSITIVE {
            Self::Positive
        } else if score >= LABEL_SLIGHTLY_POSITIVE {
            Self::SlightlyPositive
        } else if score >= LABEL_NEUTRAL_FLOOR {
            Self::Neutral
        } else if score > LABEL_SLIGHTLY_NEGATIVE_FLOOR {
            Self::SlightlyNegative
        } else if score > LABEL_NEGATIVE_FLOOR {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    /// Display name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::SlightlyNegative => "Slightly Negative",
            Self::Neutral => "Neutral",
            Self::SlightlyPositive => "Slightly Positive",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        }
    }

    pub fn is_positive(&self) -> bool {
        *self > Self::Neutral
    }

    pub fn is_negative(&self) -> bool {
        *self < Self::Neutral
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::VeryPositive | Self::Positive => "\x1b[32m",   // Green
            Self::SlightlyPositive => "\x1b[36m",                // Cyan
            Self::Neutral => "\x1b[90m",                         // Gray
            Self::SlightlyNegative => "\x1b[33m",                // Yellow
            Self::Negative | Self::VeryNegative => "\x1b[31m",   // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for label
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryPositive => "🟢",
            Self::Positive => "🟩",
            Self::SlightlyPositive => "🔹",
            Self::Neutral => "⚪",
            Self::SlightlyNegative => "🔸",
            Self::Negative => "🟥",
            Self::VeryNegative => "🔴",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_bounds_are_inclusive() {
        assert_eq!(SentimentLabel::from_normalized(60.0), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_normalized(59.99), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_normalized(25.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_normalized(5.0), SentimentLabel::SlightlyPositive);
        assert_eq!(SentimentLabel::from_normalized(4.99), SentimentLabel::Neutral);
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(SentimentLabel::from_normalized(-5.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_normalized(-5.01), SentimentLabel::SlightlyNegative);
        assert_eq!(SentimentLabel::from_normalized(-25.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_normalized(-60.0), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_normalized(-100.0), SentimentLabel::VeryNegative);
    }

    #[test]
    fn test_serialized_form_matches_display() {
        let json = serde_json::to_string(&SentimentLabel::SlightlyNegative).unwrap();
        assert_eq!(json, "\"Slightly Negative\"");
        let back: SentimentLabel = serde_json::from_str("\"Very Positive\"").unwrap();
        assert_eq!(back, SentimentLabel::VeryPositive);
        assert_eq!(back.to_string(), "Very Positive");
    }

    #[test]
    fn test_ordering() {
        assert!(SentimentLabel::VeryNegative < SentimentLabel::Neutral);
        assert!(SentimentLabel::Positive.is_positive());
        assert!(SentimentLabel::SlightlyNegative.is_negative());
        assert!(!SentimentLabel::Neutral.is_positive());
    }
}
