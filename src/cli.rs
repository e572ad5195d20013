//! CLI argument definitions for rutcheck.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rutcheck")]
#[command(version)]
#[command(about = "Chilean RUT validation", long_about = None)]
pub struct Cli {
    /// Suppress per-identifier output; keep summaries and exit codes
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one or more identifiers
    ///
    /// Input is normalized before checking, so "12.345.678-5" and
    /// "12345678-5" are equivalent. Exits non-zero if any value is invalid.
    Check {
        /// Identifiers to validate
        #[arg(required = true, value_name = "VALUE")]
        values: Vec<String>,
        /// Emit results as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Compute the check digit for a numeric body
    Dv {
        /// Identifier body, 7 or 8 digits (separators are ignored)
        body: String,
        /// Print only the verifier character, not the completed identifier
        #[arg(long)]
        bare: bool,
    },
    /// Validate identifiers from a file, one per line
    Batch {
        /// Input file, or '-' to read stdin
        file: PathBuf,
        /// Emit results as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Output directory (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long)]
        verbose: bool,
    },
}
