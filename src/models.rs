// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// Character pool options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharsetConfig {
    pub use_lower: bool,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub exclude_ambiguous: bool,
    pub exclude_chars: String,
    pub custom_chars: String,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            use_lower: true,
            use_upper: true,
            use_digits: true,
            use_symbols: true,
            exclude_ambiguous: false,
            exclude_chars: String::new(),
            custom_chars: String::new(),
        }
    }
}

/// Strength tier assigned by the generator's entropy-oriented analysis.
///
/// Distinct from [`ScoreTier`]: this one is a function of length and the
/// number of character classes present, not of the additive score rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Classify by (length, number of distinct character classes).
    /// Rules are checked in order; the first match wins.
    pub fn classify(length: usize, class_count: usize) -> Self {
        if length >= 16 && class_count >= 4 {
            StrengthTier::VeryStrong
        } else if length >= 12 && class_count >= 4 {
            StrengthTier::Strong
        } else if length >= 10 && class_count >= 3 {
            StrengthTier::Good
        } else if length >= 8 && class_count >= 2 {
            StrengthTier::Fair
        } else {
            StrengthTier::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Fair => "fair",
            StrengthTier::Good => "good",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very_strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// A generated password plus its analysis
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub value: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: StrengthTier,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl GeneratedPassword {
    /// Number of character classes present in the password.
    pub fn class_count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

/// Tier used by the standalone strength checker's score rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Weak,
    Medium,
    Strong,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreTier::Strong
        } else if score >= 50 {
            ScoreTier::Medium
        } else {
            ScoreTier::Weak
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreTier::Weak => "Weak",
            ScoreTier::Medium => "Medium",
            ScoreTier::Strong => "Strong",
        };
        f.write_str(label)
    }
}

// Report produced by the standalone strength checker
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub strength: ScoreTier,
    pub feedback: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let cases = [
            (16, 4, StrengthTier::VeryStrong),
            (15, 4, StrengthTier::Strong),
            (12, 4, StrengthTier::Strong),
            (12, 3, StrengthTier::Good),
            (11, 3, StrengthTier::Good),
            (10, 3, StrengthTier::Good),
            (10, 2, StrengthTier::Fair),
            (9, 2, StrengthTier::Fair),
            (8, 2, StrengthTier::Fair),
            (8, 1, StrengthTier::Weak),
            (7, 4, StrengthTier::Weak),
            (0, 0, StrengthTier::Weak),
            (16, 3, StrengthTier::Good),
        ];
        for (length, classes, expected) in cases {
            assert_eq!(
                StrengthTier::classify(length, classes),
                expected,
                "length={length} classes={classes}"
            );
        }
    }

    #[test]
    fn score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_score(79), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(50), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(49), ScoreTier::Weak);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Weak);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(StrengthTier::VeryStrong.to_string(), "very_strong");
        assert_eq!(StrengthTier::Weak.to_string(), "weak");
        assert_eq!(ScoreTier::Medium.to_string(), "Medium");
    }

    #[test]
    fn default_config_enables_all_classes() {
        let config = CharsetConfig::default();
        assert!(config.use_lower && config.use_upper && config.use_digits && config.use_symbols);
        assert!(!config.exclude_ambiguous);
        assert!(config.custom_chars.is_empty());
        assert!(config.exclude_chars.is_empty());
    }
}
