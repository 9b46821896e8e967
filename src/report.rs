//! Demo output formatting
//!
//! Prints expected-vs-actual comparisons so that silent defects become
//! visible by inspection rather than by crash.

use std::fmt::Display;

use colored::Colorize;

/// Print the banner for one exercise demo
pub fn heading(name: &str, bug_class: &str) {
    println!(
        "\n{} {}",
        "Exercise:".blue().bold(),
        name.white().bold()
    );
    println!("  {}", bug_class.dimmed());
}

/// Print a sub-section divider within a demo
pub fn section(title: &str) {
    println!("\n{}", format!("{title}:").cyan());
}

/// Print an expected/actual pair and return whether they matched
pub fn comparison<T: Display + PartialEq>(label: &str, expected: T, actual: T) -> bool {
    let passed = expected == actual;
    let mark = if passed {
        "✓".green()
    } else {
        "✗".red().bold()
    };
    println!("  {mark} {label}");
    println!("      expected: {expected}");
    println!("      actual:   {actual}");
    passed
}

/// Print a single labelled value without judging it
pub fn observed<T: Display>(label: &str, value: T) {
    println!("  {} {label}: {value}", "·".dimmed());
}

/// Print an explanatory note below a comparison
pub fn note(text: &str) {
    println!("      {}", text.dimmed());
}

/// Render an `Option` the way the demos display absence
pub fn display_option<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(absent)".to_string(),
    }
}
