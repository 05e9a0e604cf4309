//! nichepost: generate a dated Markdown post of placeholder product
//! recommendations for a niche.
//!
//! Parses arguments, resolves configuration, runs the pipeline once, and
//! maps errors to exit codes.

mod affiliates;
mod app;
mod cli;
mod config;
mod error;
mod exit_codes;
mod fs;
mod logging;
mod niche;
mod post;
mod products;
mod text;

use app::Generated;
use cli::Cli;
use config::GeneratorConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code as u8),
    };
    logging::init_logging(cli.verbose);

    let config = GeneratorConfig::from_cli(cli);

    match app::generate(&config, std::env::current_dir) {
        Ok(Generated::Written(_)) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(Generated::DryRun { path, content }) => {
            tracing::info!(path = %path.display(), "dry run, nothing written");
            print!("{}", content);
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
