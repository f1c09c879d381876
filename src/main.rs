//! Dustbox - Command-line tool for extracting hitboxes from sprite dumps

use std::process::ExitCode;

use dustbox::cli;

fn main() -> ExitCode {
    cli::run()
}
