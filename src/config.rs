//! Resolved run configuration.
//!
//! Everything the pipeline needs is collected here once, so no pipeline
//! function reads the process environment or the clock directly.

use crate::cli::Cli;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Inputs for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Explicit niche; `None` derives it from the working directory.
    pub niche_override: Option<String>,
    /// Raw affiliate JSON, parsed best-effort.
    pub affiliate_json: Option<String>,
    pub output_dir: PathBuf,
    pub date: NaiveDate,
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Build a config from parsed arguments, dating the post today.
    pub fn from_cli(cli: Cli) -> Self {
        let today = Local::now().date_naive();
        Self::from_cli_on(cli, today)
    }

    /// Build a config from parsed arguments, with `today` as the fallback date.
    ///
    /// Empty niche or affiliate values count as unset.
    pub fn from_cli_on(cli: Cli, today: NaiveDate) -> Self {
        Self {
            niche_override: cli.niche.filter(|s| !s.is_empty()),
            affiliate_json: cli.affiliates.filter(|s| !s.is_empty()),
            output_dir: cli.output_dir,
            date: cli.date.unwrap_or(today),
            dry_run: cli.dry_run,
        }
    }
}
