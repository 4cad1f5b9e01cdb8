//! CLI argument parsing for gog.
//!
//! Uses clap derive macros. The only mode switch is `--http`: with an
//! address gog serves the working directory, without one it builds the site.

use clap::{ArgAction, Parser};

/// Gog: minimal static site generator.
///
/// Walks `_src/` in the current directory, wraps every `.html` page in
/// `_src/_layout.html`, runs `GOG_BUILD.go` hooks, copies everything else,
/// and writes the result next to `_src/`.
#[derive(Parser, Debug)]
#[command(name = "gog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Serve the current directory on this address instead of building (e.g. ":8000").
    #[arg(long, value_name = "ADDR")]
    pub http: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Build,
    Serve(String),
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// An empty address selects build mode, same as no address.
    pub fn mode(&self) -> Mode {
        match self.http.as_deref() {
            Some(addr) if !addr.is_empty() => Mode::Serve(addr.to_string()),
            _ => Mode::Build,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_builds() {
        let cli = Cli::try_parse_from(["gog"]).unwrap();
        assert_eq!(cli.mode(), Mode::Build);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn http_flag_serves() {
        let cli = Cli::try_parse_from(["gog", "--http", ":8000"]).unwrap();
        assert_eq!(cli.mode(), Mode::Serve(":8000".to_string()));

        let cli = Cli::try_parse_from(["gog", "--http=localhost:3000"]).unwrap();
        assert_eq!(cli.mode(), Mode::Serve("localhost:3000".to_string()));
    }

    #[test]
    fn empty_http_flag_builds() {
        let cli = Cli::try_parse_from(["gog", "--http", ""]).unwrap();
        assert_eq!(cli.mode(), Mode::Build);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["gog", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["gog", "--watch"]).is_err());
    }
}
