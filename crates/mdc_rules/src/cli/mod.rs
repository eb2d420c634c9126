//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert markdown guides into `.mdc` rules and validate published rules.
#[derive(Debug, Parser)]
#[command(name = "mdc-rules", version)]
pub struct Cli {
    /// Directory that relative paths (outputs, scan roots, config) resolve against.
    /// Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file overriding the built-in rule table and validator settings.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: TopLevelCommand,
}

/// Top-level command families.
#[derive(Debug, Subcommand)]
pub enum TopLevelCommand {
    /// Convert the configured guides into `.mdc` rule files.
    Convert(ConvertArgs),
    /// Check `.mdc` files under the scan directories.
    Validate(ValidateArgs),
}

#[derive(Debug, Default, Args)]
pub struct ConvertArgs {
    /// Date stamped into `created`/`updated` instead of the local date.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Write rules here instead of the configured output directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
pub struct ValidateArgs {
    /// Require `description`, `globs` and `alwaysApply` to be keys of the parsed header.
    #[arg(long)]
    pub strict_metadata: bool,

    /// Also write a JSON report of every file's outcome.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid date `{raw}` (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "mdc-rules",
            "convert",
            "--root",
            "/work",
            "--today",
            "2026-10-18",
        ])
        .expect("parse");
        assert_eq!(cli.root, Some(PathBuf::from("/work")));
        let TopLevelCommand::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let err = Cli::try_parse_from(["mdc-rules", "convert", "--today", "18/10/2026"])
            .expect_err("bad date");
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn validate_flags_parse() {
        let cli = Cli::try_parse_from([
            "mdc-rules",
            "validate",
            "--strict-metadata",
            "--report",
            "out/report.json",
        ])
        .expect("parse");
        let TopLevelCommand::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert!(args.strict_metadata);
        assert_eq!(args.report, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["mdc-rules"]).is_err());
    }
}
