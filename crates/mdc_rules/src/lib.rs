//! Documentation-rule tooling (`mdc-rules`).
//!
//! Two independent command families share one file convention, a `---`-delimited metadata header
//! followed by markdown body text:
//!
//! - [`convert`] turns a fixed table of markdown guides into `.mdc` rule files.
//! - [`validate`] walks the published rule directories and applies structural checks.
//!
//! [`runtime`] owns configuration, errors, logging, and filesystem helpers shared by both.

pub mod cli;
pub mod commands;
pub mod convert;
pub mod frontmatter;
pub mod runtime;
pub mod validate;

use crate::cli::{Cli, TopLevelCommand};
use crate::commands::convert::ConvertCommand;
use crate::commands::validate::ValidateCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::RulesResult;
use clap::Parser;

/// Shared contract for top-level command families.
///
/// Argument parsing happens up front in [`cli`]; implementations receive typed options and the
/// shared [`CommandContext`] and keep all side effects in [`RulesCommand::run`].
pub trait RulesCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Execute the command family.
    fn run(ctx: &CommandContext, options: Self::Options) -> RulesResult<()>;
}

/// Runs the parsed command line.
pub fn execute(cli: Cli) -> RulesResult<()> {
    let ctx = CommandContext::new(cli.root, cli.config.as_deref())?;
    match cli.command {
        TopLevelCommand::Convert(args) => ConvertCommand::run(&ctx, args),
        TopLevelCommand::Validate(args) => ValidateCommand::run(&ctx, args),
    }
}

/// Executes `mdc-rules` using the current process arguments.
pub fn execute_from_env() -> RulesResult<()> {
    execute(Cli::parse())
}

/// Converts a command result into a process exit code.
///
/// Every failure, including a validation run with failing files, maps to exit code `1` after the
/// error is printed to stderr.
pub fn exit_code(result: RulesResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
