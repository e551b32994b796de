//! wdc-table-downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wdc_table_downloader::{
    cli::Args,
    config::{validate_settings, RunMode},
    error::{exit_codes, Result},
    output::{
        print_error, print_info, print_run_stats, print_settings_summary, print_success,
        print_warning,
    },
    pipeline,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let settings = args.into_settings();
    validate_settings(&settings)?;

    print_settings_summary(&settings);

    print_info(&format!("Fetching {}", settings.source_url));
    let stats = pipeline::run(&settings).await?;
    print_run_stats(&stats, settings.mode);

    if stats.is_aborted() {
        print_warning(&format!(
            "Batch stopped after {} of {} matching link(s)",
            stats.succeeded + stats.failed(),
            stats.matched
        ));
    } else if stats.failed() > 0 {
        print_warning(&format!(
            "{} of {} matching link(s) could not be handled",
            stats.failed(),
            stats.matched
        ));
    }
    let stats = stats.ensure_complete()?;

    if stats.matched == 0 {
        print_info("No matching archive links found");
    } else {
        match settings.mode {
            RunMode::Download => print_success(&format!(
                "Downloaded {} archive(s) into {}",
                stats.succeeded,
                settings.output.display()
            )),
            RunMode::Record => print_success(&format!(
                "Recorded {} link(s) in {}",
                stats.succeeded,
                settings.output.display()
            )),
        }
    }

    Ok(())
}
