// src/charset.rs
//
// Character class registry and pool construction.

use crate::models::CharsetConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Characters easy to confuse with each other
pub const AMBIGUOUS: &str = "l1IO0";

/// Build the character pool for a configuration.
///
/// A non-empty `custom_chars` fully overrides the class-based composition;
/// only deduplication applies to it. Otherwise enabled classes are
/// concatenated in a fixed order (lower, upper, digits, symbols), then the
/// ambiguous set and any explicitly excluded characters are stripped.
/// The result may be empty; callers substitute [`fallback`] in that case.
pub fn build(config: &CharsetConfig) -> Vec<char> {
    if !config.custom_chars.is_empty() {
        return dedup(config.custom_chars.chars());
    }

    let mut composed = String::new();
    if config.use_lower {
        composed.push_str(LOWERCASE);
    }
    if config.use_upper {
        composed.push_str(UPPERCASE);
    }
    if config.use_digits {
        composed.push_str(DIGITS);
    }
    if config.use_symbols {
        composed.push_str(SYMBOLS);
    }

    let mut pool = dedup(composed.chars());
    if config.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(*c));
    }
    if !config.exclude_chars.is_empty() {
        // Unknown characters in the exclusion list are silent no-ops
        pool.retain(|c| !config.exclude_chars.contains(*c));
    }
    pool
}

/// Safe default pool used when a configuration yields no characters at all.
pub fn fallback() -> Vec<char> {
    let mut pool = String::with_capacity(62);
    pool.push_str(LOWERCASE);
    pool.push_str(UPPERCASE);
    pool.push_str(DIGITS);
    pool.chars().collect()
}

// Order-preserving dedup; pools are small enough for a linear scan.
fn dedup(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in chars {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pool_has_all_classes_in_order() {
        let pool = build(&CharsetConfig::default());
        assert_eq!(pool.len(), 88);
        assert_eq!(pool[0], 'a');
        assert_eq!(pool[26], 'A');
        assert_eq!(pool[52], '0');
        assert_eq!(pool[62], '!');
    }

    #[test]
    fn disabled_classes_are_absent() {
        let config = CharsetConfig {
            use_upper: false,
            use_symbols: false,
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 36);
        assert!(pool.iter().all(|c| !UPPERCASE.contains(*c)));
        assert!(pool.iter().all(|c| !SYMBOLS.contains(*c)));
    }

    #[test]
    fn ambiguous_characters_are_stripped() {
        let config = CharsetConfig {
            exclude_ambiguous: true,
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 83);
        for c in AMBIGUOUS.chars() {
            assert!(!pool.contains(&c), "pool still contains {c:?}");
        }
    }

    #[test]
    fn explicit_exclusions_apply_and_unknowns_are_noops() {
        let config = CharsetConfig {
            exclude_chars: "abcé€".to_string(),
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 85);
        assert!(!pool.contains(&'a'));
        assert!(!pool.contains(&'b'));
        assert!(!pool.contains(&'c'));
    }

    #[test]
    fn custom_chars_override_everything_else() {
        let config = CharsetConfig {
            use_lower: false,
            use_upper: false,
            use_digits: false,
            use_symbols: false,
            exclude_ambiguous: true,
            custom_chars: "aabbl1".to_string(),
            ..Default::default()
        };
        let pool = build(&config);
        // dedup preserves first occurrence; ambiguous stripping does not apply
        assert_eq!(pool, vec!['a', 'b', 'l', '1']);
    }

    #[test]
    fn nothing_enabled_yields_empty_pool() {
        let config = CharsetConfig {
            use_lower: false,
            use_upper: false,
            use_digits: false,
            use_symbols: false,
            ..Default::default()
        };
        assert!(build(&config).is_empty());
    }

    #[test]
    fn fallback_is_letters_and_digits() {
        let pool = fallback();
        assert_eq!(pool.len(), 62);
        assert!(pool.contains(&'a'));
        assert!(pool.contains(&'Z'));
        assert!(pool.contains(&'0'));
        assert!(!pool.contains(&'!'));
    }

    #[test]
    fn pool_never_contains_duplicates() {
        let config = CharsetConfig {
            custom_chars: "mississippi".to_string(),
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool, vec!['m', 'i', 's', 'p']);
    }
}
