//! Statistics reporting.

use console::style;

use crate::config::RunMode;
use crate::pipeline::RunStats;

/// Print statistics for a finished run.
pub fn print_run_stats(stats: &RunStats, mode: RunMode) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Statistics for {}:", stats.page_url)).bold()
    );
    println!("  Links on page: {}", stats.links_found);
    println!("  Matched:       {}", stats.matched);
    match mode {
        RunMode::Download => {
            println!("  Downloaded:    {}", stats.succeeded);
            println!("  Bytes written: {}", stats.bytes_written);
        }
        RunMode::Record => println!("  Recorded:      {}", stats.succeeded),
    }
    if stats.failed() > 0 {
        println!("  Failed:        {}", style(stats.failed()).red());
        for failure in &stats.failures {
            println!("    {} {}: {}", style("✗").red(), failure.url, failure.message);
        }
    }
    if let Some(ref error) = stats.aborted {
        println!("  Stopped early: {}", style(error).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
