use std::process::ExitCode;

fn main() -> ExitCode {
    logcat_parser::run()
}
