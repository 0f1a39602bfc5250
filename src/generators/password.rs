// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::index;
use rand::Rng;

use super::{GeneratorError, Result};
use crate::charset;
use crate::models::{CharsetConfig, GeneratedPassword, StrengthTier};

/// Password generator for a fixed configuration.
///
/// The effective character pool is built once at construction. All random
/// draws go through the operating system CSPRNG ([`OsRng`]); there is no
/// seeding surface and no shared state between calls.
pub struct PasswordGenerator {
    config: CharsetConfig,
    alphabet: Vec<char>,
}

impl PasswordGenerator {
    pub fn new(config: CharsetConfig) -> Self {
        let mut alphabet = charset::build(&config);
        if alphabet.is_empty() {
            log::warn!("empty character pool, falling back to letters and digits");
            alphabet = charset::fallback();
        }
        Self { config, alphabet }
    }

    /// The effective character pool used for generation.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generate a single password of exactly `length` characters.
    ///
    /// After the uniform draw, each enabled class gets one character written
    /// into its own randomly chosen slot. The slots are sampled without
    /// replacement, so no write can evict another class's guaranteed
    /// character: every enabled class whose characters survive in the pool
    /// is present in the result whenever `length` allows it. Classes with no
    /// remaining characters in the pool (custom pools, aggressive
    /// exclusions) are skipped.
    pub fn generate(&self, length: usize) -> Result<GeneratedPassword> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength(length));
        }

        let mut rng = OsRng;
        let mut password: Vec<char> = (0..length)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect();

        let pools = self.injection_pools();
        let slots = index::sample(&mut rng, length, pools.len().min(length));
        for (pool, slot) in pools.iter().zip(slots.iter()) {
            password[slot] = pool[rng.gen_range(0..pool.len())];
        }

        let value: String = password.into_iter().collect();
        Ok(analyze(&value, self.alphabet.len()))
    }

    /// Generate `count` independent passwords.
    pub fn generate_many(&self, count: usize, length: usize) -> Result<Vec<GeneratedPassword>> {
        (0..count).map(|_| self.generate(length)).collect()
    }

    // Per-class injection pools in fixed class order, restricted to
    // characters still present in the effective pool. Empty intersections
    // are dropped.
    fn injection_pools(&self) -> Vec<Vec<char>> {
        let classes = [
            (self.config.use_lower, charset::LOWERCASE),
            (self.config.use_upper, charset::UPPERCASE),
            (self.config.use_digits, charset::DIGITS),
            (self.config.use_symbols, charset::SYMBOLS),
        ];
        classes
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, class)| {
                class
                    .chars()
                    .filter(|c| self.alphabet.contains(c))
                    .collect::<Vec<char>>()
            })
            .filter(|pool| !pool.is_empty())
            .collect()
    }
}

/// Compute class flags, entropy estimate, and strength tier for a password.
///
/// Entropy is `length * log2(alphabet_size)` rounded to two decimals, and
/// defined as 0 when the pool has at most one character.
pub fn analyze(password: &str, alphabet_size: usize) -> GeneratedPassword {
    let has_lower = password.chars().any(|c| charset::LOWERCASE.contains(c));
    let has_upper = password.chars().any(|c| charset::UPPERCASE.contains(c));
    let has_digit = password.chars().any(|c| charset::DIGITS.contains(c));
    let has_symbol = password.chars().any(|c| charset::SYMBOLS.contains(c));

    let length = password.chars().count();
    let entropy_bits = if alphabet_size > 1 {
        let bits = length as f64 * (alphabet_size as f64).log2();
        (bits * 100.0).round() / 100.0
    } else {
        0.0
    };

    let mut report = GeneratedPassword {
        value: password.to_string(),
        length,
        entropy_bits,
        strength: StrengthTier::Weak,
        has_lower,
        has_upper,
        has_digit,
        has_symbol,
    };
    report.strength = StrengthTier::classify(length, report.class_count());
    report
}
