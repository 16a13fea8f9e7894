// Koan runner binary: runs the course and gates the exit code on failures.
// Usage: cargo run --bin koan_runner -- run [--filter <substring>]

use std::process::ExitCode;

fn main() -> ExitCode {
    koans::cli::run()
}
