// src/strength.rs
//
// Standalone strength checker for arbitrary password strings.
//
// This rubric is additive and score-based, and is deliberately separate
// from the generator's entropy-oriented tiering: the two answer different
// questions and are kept as distinct operations.

use crate::charset;
use crate::models::{ScoreTier, StrengthReport};

/// Score an arbitrary password from 0 to 100 with improvement suggestions.
///
/// Pure function: identical input always yields an identical report.
pub fn check_strength(password: &str) -> StrengthReport {
    let mut score: u8 = 0;
    let mut feedback: Vec<&'static str> = Vec::new();
    let length = password.chars().count();

    if length >= 12 {
        score += 25;
    } else if length >= 8 {
        score += 10;
    } else {
        feedback.push("Too short");
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 20;
    } else {
        feedback.push("Add uppercase");
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 20;
    } else {
        feedback.push("Add lowercase");
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 20;
    } else {
        feedback.push("Add digits");
    }

    if password.chars().any(|c| charset::SYMBOLS.contains(c)) {
        score += 15;
    } else {
        feedback.push("Add special chars");
    }

    if length >= 16 {
        score = (score + 10).min(100);
    }

    StrengthReport {
        score,
        strength: ScoreTier::from_score(score),
        feedback,
    }
}
