// src/generators/passphrase.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use super::{GeneratorError, Result};

// Illustrative built-in list, not a security-grade dictionary.
const WORDLIST: &[&str] = &[
    "correct", "horse", "battery", "staple", "cloud", "thunder",
    "rocket", "sunset", "garden", "crystal", "harbor", "falcon",
    "silver", "phoenix", "dragon", "castle", "wizard", "forest",
    "ocean", "thunder", "cosmic", "stellar", "quantum", "cipher",
];

/// Generate a passphrase of `word_count` words joined by `separator`.
///
/// Words are drawn independently with replacement from the built-in list
/// using the operating system CSPRNG, so repeats are possible.
pub fn generate_passphrase(word_count: usize, separator: &str) -> Result<String> {
    if word_count == 0 {
        return Err(GeneratorError::InvalidWordCount(word_count));
    }

    let mut rng = OsRng;
    let words: Vec<&str> = (0..word_count)
        .map(|_| *WORDLIST.choose(&mut rng).expect("word list is not empty"))
        .collect();
    Ok(words.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_and_separators() {
        let phrase = generate_passphrase(4, "-").unwrap();
        let parts: Vec<&str> = phrase.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(phrase.matches('-').count(), 3);
    }

    #[test]
    fn every_word_comes_from_the_list() {
        let phrase = generate_passphrase(10, " ").unwrap();
        for word in phrase.split(' ') {
            assert!(WORDLIST.contains(&word), "{word:?} not in word list");
        }
    }

    #[test]
    fn single_word_has_no_separator() {
        let phrase = generate_passphrase(1, "-").unwrap();
        assert!(!phrase.contains('-'));
        assert!(WORDLIST.contains(&phrase.as_str()));
    }

    #[test]
    fn empty_separator_is_allowed() {
        let phrase = generate_passphrase(3, "").unwrap();
        assert!(!phrase.is_empty());
    }

    #[test]
    fn zero_words_is_rejected() {
        assert_eq!(
            generate_passphrase(0, "-").unwrap_err(),
            GeneratorError::InvalidWordCount(0)
        );
    }
}
