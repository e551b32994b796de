//! Console output utilities.

use console::style;

use crate::config::Settings;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the settings a run is about to use.
pub fn print_settings_summary(settings: &Settings) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Source:     {}", settings.source_url);
    println!("  Mode:       {}", settings.mode);
    println!("  Output:     {}", settings.output.display());
    println!("  Categories: {}", settings.categories);
    println!("  On failure: {}", settings.failure_policy);
    println!();
}
