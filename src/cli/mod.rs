//! CLI argument parsing for nichepost.
//!
//! Uses clap derive macros. The two content inputs are bound to environment
//! variables so the tool runs with no flags at all inside a site checkout.

use crate::exit_codes;
use crate::post::DEFAULT_OUTPUT_DIR;
use chrono::NaiveDate;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// Generate a dated Markdown post of product recommendations for a niche.
///
/// The niche defaults to the current directory's name (dashes become
/// spaces). The post is written to `_posts/{date}-{slug}.md`, replacing any
/// post generated earlier the same day for the same niche.
#[derive(Parser, Debug)]
#[command(name = "nichepost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Topic of the post.
    #[arg(long, env = "NICHE")]
    pub niche: Option<String>,

    /// JSON object mapping vendor names to base URLs.
    ///
    /// The first vendor's URL is linked from every product. Malformed JSON
    /// is ignored.
    #[arg(long, env = "AFFILIATE_JSON", value_name = "JSON", hide_env_values = true)]
    pub affiliates: Option<String>,

    /// Directory the post is written into.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Post date (defaults to today's local date).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the post to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// `--help` and `--version` print and exit successfully. Any other
    /// parse error is printed and returned as the exit code to use.
    pub fn parse_args() -> std::result::Result<Self, i32> {
        Self::try_parse().map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                cli_error_exit_code(&err)
            }
        })
    }
}

/// Exit code for a clap error: informational output succeeds, everything
/// else is a user error.
pub fn cli_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => exit_codes::SUCCESS,
        _ => exit_codes::USER_ERROR,
    }
}
