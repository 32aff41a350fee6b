//! Command dispatch for the survey processor CLI

pub mod check;
pub mod process;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Run the selected subcommand
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Check(check_args)) => check::run_check(check_args).await,
        None => Ok(()), // No subcommand: main already printed help
    }
}
