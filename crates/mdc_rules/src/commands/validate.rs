use crate::cli::ValidateArgs;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{RulesError, RulesResult};
use crate::validate::report::ValidationReport;
use crate::validate::{CheckOptions, ValidationSummary, Validator};
use crate::RulesCommand;

/// `mdc-rules validate`
pub struct ValidateCommand;

impl RulesCommand for ValidateCommand {
    type Options = ValidateArgs;

    fn run(ctx: &CommandContext, options: Self::Options) -> RulesResult<()> {
        let check_options = CheckOptions {
            strict_metadata: options.strict_metadata,
        };
        let summary = Validator::new(ctx.root(), &ctx.config().validator, check_options).run()?;
        print_outcomes(&summary);

        if let Some(output) = &options.report {
            let output = ctx.root().join(output);
            ValidationReport::from_summary(&summary)
                .write(&output)
                .map_err(|err| err.with_operation("validation report"))?;
            println!("Wrote validation report: {}", output.display());
        }

        if !summary.all_passed() {
            println!("MDC validation failed. Please fix the issues.");
            return Err(RulesError::validation(format!(
                "{} of {} rule file(s) failed validation",
                summary.failed_count(),
                summary.files.len()
            )));
        }
        println!("All MDC files passed validation.");
        Ok(())
    }
}

fn print_outcomes(summary: &ValidationSummary) {
    for file in &summary.files {
        if file.result.passed {
            println!("Validation passed for {}", file.display);
        } else {
            println!(
                "Validation failed for {}: {}",
                file.display, file.result.message
            );
        }
    }
}
