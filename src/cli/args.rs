//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::settings::default_user_agent;
use crate::config::{FailurePolicy, RunMode, Settings};
use crate::links::CategoryFlags;

/// Web Data Commons table archive downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "wdc-table-downloader",
    version,
    about = "Download or record zipped table archives linked from a webpage",
    long_about = "Fetches a webpage, keeps the .zip links whose name carries an enabled \
                  category (_top100, _minimum3, _rest) and either appends them to a file \
                  (record mode, the default) or downloads them into a directory.\n\n\
                  Record mode selects minimum3 by default; download mode selects top100."
)]
pub struct Args {
    /// URL of the page listing the archives.
    pub source_url: String,

    /// Record file (record mode) or output directory (download mode).
    pub output: PathBuf,

    /// What to do with matching links.
    #[arg(long, value_enum, default_value_t = RunModeArg::Record)]
    pub mode: RunModeArg,

    /// Select "_top100" archives.
    #[arg(long)]
    pub top100: bool,

    /// Select "_minimum3" archives.
    #[arg(long)]
    pub minimum3: bool,

    /// Select "_rest" archives.
    #[arg(long)]
    pub rest: bool,

    /// Stop at the first link that fails instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User agent sent with every request.
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Hide per-link lines and progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunModeArg {
    /// Append matching links to the output file.
    Record,
    /// Download matching archives into the output directory.
    Download,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::Record => RunMode::Record,
            RunModeArg::Download => RunMode::Download,
        }
    }
}

impl Args {
    /// Category selection from the flags, if any flag was given.
    fn categories(&self) -> Option<CategoryFlags> {
        if self.top100 || self.minimum3 || self.rest {
            Some(CategoryFlags {
                top100: self.top100,
                minimum3: self.minimum3,
                rest: self.rest,
            })
        } else {
            None
        }
    }

    /// Build run settings, falling back to the mode's defaults where unset.
    pub fn into_settings(self) -> Settings {
        let mode: RunMode = self.mode.into();
        let categories = self
            .categories()
            .unwrap_or_else(|| mode.default_categories());

        Settings {
            source_url: self.source_url.trim().to_string(),
            output: self.output,
            mode,
            categories,
            failure_policy: if self.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::SkipAndLog
            },
            timeout: self.timeout.map(Duration::from_secs),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            show_progress: !self.quiet,
        }
    }
}
