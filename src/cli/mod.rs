// src/cli/mod.rs
use clap::Parser;

pub mod handlers;
pub mod output;

use crate::config::Config;
use crate::models::CharsetConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Secure password generator", long_about = None)]
pub struct Args {
    /// Password length
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude ambiguous characters (l1IO0)
    #[arg(long)]
    pub no_ambiguous: bool,

    /// Characters to remove from the pool
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Use this exact character pool instead of the class toggles
    #[arg(long, value_name = "CHARS", default_value = "")]
    pub chars: String,

    /// Generate a passphrase instead of a password
    #[arg(long)]
    pub passphrase: bool,

    /// Words in the passphrase
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Passphrase word separator
    #[arg(long, default_value = "-")]
    pub separator: String,

    /// Check the strength of the given password and exit
    #[arg(long, value_name = "PASSWORD")]
    pub check: Option<String>,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Args {
    /// Resolve the character pool options, flags taking precedence over
    /// environment-provided defaults.
    pub fn charset_config(&self, defaults: &Config) -> CharsetConfig {
        CharsetConfig {
            use_lower: !self.no_lower,
            use_upper: !self.no_upper,
            use_digits: !self.no_digits,
            use_symbols: !self.no_symbols,
            exclude_ambiguous: self.no_ambiguous || defaults.exclude_ambiguous,
            exclude_chars: self.exclude.clone(),
            custom_chars: self.chars.clone(),
        }
    }
}
