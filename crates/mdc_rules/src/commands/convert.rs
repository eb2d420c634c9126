use crate::cli::ConvertArgs;
use crate::convert::{ConversionReport, Converter};
use crate::runtime::context::CommandContext;
use crate::runtime::error::RulesResult;
use crate::runtime::fs::rel_posix;
use crate::RulesCommand;
use chrono::Local;
use std::path::Path;

/// `mdc-rules convert`
pub struct ConvertCommand;

impl RulesCommand for ConvertCommand {
    type Options = ConvertArgs;

    fn run(ctx: &CommandContext, options: Self::Options) -> RulesResult<()> {
        let today = options
            .today
            .unwrap_or_else(|| Local::now().date_naive());
        let mut converter = Converter::new(ctx.root(), &ctx.config().converter, today);
        if let Some(output_dir) = &options.output_dir {
            converter = converter.with_output_dir(output_dir);
        }

        let report = converter.convert_all()?;
        print_report(ctx.root(), &report);
        Ok(())
    }
}

fn print_report(root: &Path, report: &ConversionReport) {
    let created: Vec<String> = report
        .created
        .iter()
        .map(|path| rel_posix(root, path))
        .collect();
    for path in &created {
        println!("Created: {path}");
    }
    println!("\nSuccessfully created {} MDC rules:", created.len());
    for path in &created {
        println!("  - {path}");
    }
}
