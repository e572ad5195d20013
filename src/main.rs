//! CLI entry point and command dispatch for rutcheck.

mod cli;
mod cmd;
mod formatters;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { values, json } => cmd::check::cmd_check(&values, json, cli.quiet),
        Commands::Dv { body, bare } => cmd::check::cmd_dv(&body, bare),
        Commands::Batch { file, json } => cmd::batch::cmd_batch(&file, json, cli.quiet),
        Commands::Completions { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
    }
}
