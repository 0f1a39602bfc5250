// src/cli/output.rs
use console::style;

use crate::models::{GeneratedPassword, ScoreTier, StrengthReport, StrengthTier};

const BANNER: &str = r#"
  ____                                     _
 |  _ \ __ _ ___ _____      _____  _ __ __| |
 | |_) / _` / __/ __\ \ /\ / / _ \| '__/ _` |
 |  __/ (_| \__ \__ \\ V  V / (_) | | | (_| |
 |_|   \__,_|___/___/ \_/\_/ \___/|_|  \__,_|
   ____                           _
  / ___| ___ _ __   ___ _ __ __ _| |_ ___  _ __
 | |  _ / _ \ '_ \ / _ \ '__/ _` | __/ _ \| '__|
 | |_| |  __/ | | |  __/ | | (_| | || (_) | |
  \____|\___|_| |_|\___|_|  \__,_|\__\___/|_|
"#;

pub fn print_banner() {
    println!("{}", style(BANNER).cyan());
    println!("{:>49}", format!("v{}", env!("CARGO_PKG_VERSION")));
    println!();
}

fn tier_style(tier: StrengthTier) -> console::Style {
    match tier {
        StrengthTier::Weak => console::Style::new().red(),
        StrengthTier::Fair => console::Style::new().yellow(),
        StrengthTier::Good | StrengthTier::Strong => console::Style::new().green(),
        StrengthTier::VeryStrong => console::Style::new().cyan(),
    }
}

fn score_style(tier: ScoreTier) -> console::Style {
    match tier {
        ScoreTier::Weak => console::Style::new().red(),
        ScoreTier::Medium => console::Style::new().yellow(),
        ScoreTier::Strong => console::Style::new().green(),
    }
}

/// Detailed single-password view with the analysis block.
pub fn print_password(password: &GeneratedPassword) {
    println!("{}", style("Generated Password:").bold());
    println!("  {}", style(&password.value).cyan());
    println!();
    println!("{}", style("Analysis:").bold());
    println!("  Length: {}", password.length);
    println!("  Entropy: {} bits", password.entropy_bits);
    println!(
        "  Strength: {}",
        tier_style(password.strength).apply_to(password.strength.label().to_uppercase())
    );

    let mut contains: Vec<String> = Vec::new();
    if password.has_lower {
        contains.push(style("lowercase").green().to_string());
    }
    if password.has_upper {
        contains.push(style("UPPERCASE").green().to_string());
    }
    if password.has_digit {
        contains.push(style("digits").green().to_string());
    }
    if password.has_symbol {
        contains.push(style("symbols").green().to_string());
    }
    println!("  Contains: {}", contains.join(", "));
}

/// Compact numbered listing for batch generation.
pub fn print_multiple(passwords: &[GeneratedPassword]) {
    println!("{}", style("Generated Passwords:").bold());
    println!("{}", style("─".repeat(50)).cyan());
    for (i, password) in passwords.iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            password.value,
            tier_style(password.strength).apply_to(password.strength.label())
        );
    }
}

pub fn print_passphrase(passphrase: &str) {
    println!("{}", style("Generated Passphrase:").bold());
    println!("  {}", style(passphrase).cyan());
}

pub fn print_strength_report(report: &StrengthReport) {
    println!(
        "{} {} ({}/100)",
        style("Strength:").bold(),
        score_style(report.strength).apply_to(report.strength.to_string()),
        report.score
    );
    if !report.feedback.is_empty() {
        println!(
            "{} {}",
            style("Suggestions:").bold(),
            report.feedback.join(", ")
        );
    }
}
