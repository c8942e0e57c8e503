//! schemacmp CLI
//!
//! Compares a local schema dump against the complete database setup script.
//! Exits 0 when they match after filtering, 1 when they differ, and 2 when
//! an input cannot be read.

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "schemacmp")]
#[command(
    about = "Compare the local schema dump with the complete database setup script",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() {
    let cli = Cli::parse();

    match commands::compare::execute(cli.compare) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        // Already printed on stdout by the command.
        Err(_) => std::process::exit(commands::compare::EXIT_UNREADABLE_INPUT),
    }
}
