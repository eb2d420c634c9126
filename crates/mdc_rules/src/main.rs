use std::process::ExitCode;

fn main() -> ExitCode {
    mdc_rules::runtime::logging::init();
    mdc_rules::exit_code(mdc_rules::execute_from_env())
}
