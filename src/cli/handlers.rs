// src/cli/handlers.rs
use anyhow::Result;

use super::output;
use super::Args;
use crate::config::Config;
use crate::generators::{generate_passphrase, PasswordGenerator};
use crate::strength;

/// Dispatch a parsed command line into the core operations.
pub fn run(args: Args, config: Config) -> Result<()> {
    if !args.json && !args.no_banner {
        output::print_banner();
    }

    if let Some(password) = args.check.as_deref() {
        let report = strength::check_strength(password);
        log::info!("strength check: score {} ({})", report.score, report.strength);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            output::print_strength_report(&report);
        }
        return Ok(());
    }

    if args.passphrase {
        let words = args.words.unwrap_or(config.default_words);
        log::info!("generating passphrase with {} words", words);
        let passphrase = generate_passphrase(words, &args.separator)?;
        if args.json {
            println!("{}", serde_json::json!({ "passphrase": passphrase }));
        } else {
            output::print_passphrase(&passphrase);
        }
        return Ok(());
    }

    let length = args.length.unwrap_or(config.default_length);
    let count = args.count.unwrap_or(config.default_count);
    let generator = PasswordGenerator::new(args.charset_config(&config));
    log::info!(
        "generating {} password(s) of length {} from a pool of {} characters",
        count,
        length,
        generator.alphabet().len()
    );

    let passwords = generator.generate_many(count, length)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&passwords)?);
    } else if let [password] = passwords.as_slice() {
        output::print_password(password);
    } else {
        output::print_multiple(&passwords);
    }

    Ok(())
}
