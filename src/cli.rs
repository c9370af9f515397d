//! Command-line interface implementation for twinstack.
//! The generator takes no positional arguments; the three values it needs are
//! asked interactively.

use clap::Parser;

/// Command-line arguments structure for twinstack.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "twinstack: scaffold a backend + frontend package pair",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for unknown arguments
pub fn get_args() -> Args {
    Args::parse()
}
