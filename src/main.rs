//! Gog: minimal static site generator.
//!
//! This is the main entry point for the `gog` CLI. It parses arguments,
//! either builds the site in the current directory or serves it, and maps
//! errors to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod hook;
pub mod logging;
pub mod server;
pub mod site;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::{Cli, Mode};
use error::{GogError, Result};
use site::SiteConfig;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match run(cli.mode()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Run one mode against the current working directory.
fn run(mode: Mode) -> Result<()> {
    let cwd = env::current_dir()
        .map_err(|e| GogError::io("failed to get current working directory", e))?;

    match mode {
        Mode::Serve(addr) => server::serve(&addr, &cwd),
        Mode::Build => site::build(&cwd, &SiteConfig::default()).map(|_| ()),
    }
}
