//! # Nota CLI
//!
//! The binary is intentionally thin: everything terminal-facing lives in `cli/`
//! and this file only invokes `cli::run()` and maps failures to an exit status.
//! Argument parsing, config bootstrap notices and printing happen there; all
//! resolution and filesystem work is done by the `nota` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
