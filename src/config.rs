// src/config.rs
use log::LevelFilter;
use std::env;

// Runtime defaults for the CLI, overridable from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub default_length: usize,
    pub default_count: usize,
    pub default_words: usize,
    pub exclude_ambiguous: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            default_count: 1,
            default_words: 4,
            exclude_ambiguous: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("PASSGEN_DEFAULT_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_length = length;
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_COUNT") {
            if let Ok(count) = val.parse() {
                config.default_count = count;
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_WORDS") {
            if let Ok(words) = val.parse() {
                config.default_words = words;
            }
        }

        if let Ok(val) = env::var("PASSGEN_EXCLUDE_AMBIGUOUS") {
            if let Ok(exclude) = val.parse() {
                config.exclude_ambiguous = exclude;
            }
        }

        if let Ok(val) = env::var("PASSGEN_LOG_LEVEL") {
            match val.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using Info", val),
            }
        }

        config
    }
}
