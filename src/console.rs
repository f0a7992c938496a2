//! Console helpers shared by the driver binaries.

use colored::Colorize;
use std::fmt::Display;

/// Colors are off when `NO_COLOR` is set, whatever the config says.
pub fn should_use_colors(configured: bool) -> bool {
    configured && std::env::var("NO_COLOR").is_err()
}

pub fn apply_color_preference(configured: bool) {
    colored::control::set_override(should_use_colors(configured));
}

/// `Pattern 1: Factory Method` banner printed once per driver.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(title.chars().count());
    format!("{}\n{}", title.bold(), rule)
}

/// `=== Section ===` heading.
pub fn section(title: &str) -> String {
    format!("=== {} ===", title).cyan().bold().to_string()
}

pub fn bad(label: &str) -> String {
    format!("[bad] {}", label).yellow().to_string()
}

pub fn good(label: &str) -> String {
    format!("[good] {}", label).green().to_string()
}

pub fn failure(error: &dyn Display) -> String {
    format!("error: {}", error).red().bold().to_string()
}
