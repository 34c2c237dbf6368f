use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_TARGET: &str = "moneyball";

/// Format, lint, and type-check the moneyball sources, stopping at the first failure.
#[derive(Debug, Parser)]
#[command(name = "moneyball-check", version)]
pub struct Cli {
    /// Directory handed to every tool.
    #[arg(long, env = "MONEYBALL_CHECK_TARGET", default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Pass --disable-error-code=import-untyped to mypy.
    #[arg(
        long,
        env = "MONEYBALL_CHECK_IGNORE_UNTYPED_IMPORTS",
        value_parser = FalseyValueParser::new()
    )]
    pub ignore_untyped_imports: bool,

    /// Print the checks that would run and exit.
    #[arg(long)]
    pub list: bool,

    /// Append a JSONL timing record for this run.
    #[arg(long, env = "MONEYBALL_CHECK_TIMING_FILE")]
    pub timing_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub target: PathBuf,
    pub ignore_untyped_imports: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            ignore_untyped_imports: false,
        }
    }
}

impl Cli {
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            target: self.target.clone(),
            ignore_untyped_imports: self.ignore_untyped_imports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["moneyball-check"]).expect("should parse");
        assert!(!cli.list);
        assert_eq!(cli.options(), CheckOptions::default());
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::try_parse_from([
            "moneyball-check",
            "--target",
            "src/pkg",
            "--ignore-untyped-imports",
            "--list",
            "--timing-file",
            ".cache/check.jsonl",
        ])
        .expect("should parse");

        assert!(cli.list);
        assert_eq!(cli.timing_file, Some(PathBuf::from(".cache/check.jsonl")));
        let options = cli.options();
        assert_eq!(options.target, PathBuf::from("src/pkg"));
        assert!(options.ignore_untyped_imports);
    }

    #[test]
    fn unknown_flag_is_error() {
        assert!(Cli::try_parse_from(["moneyball-check", "--bad"]).is_err());
    }

    #[test]
    fn target_requires_value() {
        assert!(Cli::try_parse_from(["moneyball-check", "--target"]).is_err());
    }
}
