use std::io::{self, BufWriter};
use std::process::ExitCode;

use colored::Colorize;

// Arguments are accepted and ignored.
fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match kernel_basics::run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
