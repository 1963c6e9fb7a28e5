//! Harf CLI - Arabic shaping and visual reordering from the command line

mod cli;
mod commands;
mod input;

use clap::Parser;
use harf_core::Result;

use cli::{Cli, Commands};

fn init_logging(cli: &Cli) {
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Commands::Shape(args) => commands::text::run_shape(args),
        Commands::Bidi(args) => commands::text::run_bidi(args),
        Commands::Strip(args) => commands::text::run_strip(args),
        Commands::Length(args) => commands::text::run_length(args),
        Commands::Pipe(args) => commands::text::run_pipe(args),
        Commands::Info => commands::info::run(),
        Commands::Batch(args) => commands::batch::run(args, cli.quiet),
    }
}
