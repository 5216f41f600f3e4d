//! modedit CLI
//!
//! Command-line entry point: run the editor server or check a manifest.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modedit_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "modedit")]
#[command(about = "modedit - edit assistant mode files through a local web UI", long_about = None)]
struct Cli {
    /// Log output format
    #[arg(
        long,
        global = true,
        env = "MODEDIT_LOG_FORMAT",
        default_value = "pretty",
        value_parser = ["pretty", "json"]
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Validate the manifest and print each source's verdict
    Sources(commands::sources::SourcesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_facility::init(Profile::parse(&cli.log_format));

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).map(|()| ExitCode::SUCCESS),
        Commands::Sources(args) => commands::sources::execute(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
