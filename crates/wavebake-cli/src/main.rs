//! wavebake CLI - offline band-limited wavetable precomputation
//!
//! This binary runs the table generation pipeline and writes the resulting
//! static-data source file for embedding in a host synthesizer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use wavebake_cli::commands;

/// wavebake - band-limited wavetable precomputation
#[derive(Parser)]
#[command(name = "wavebake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all tables and write the static-data source file
    Generate {
        /// Output file path for the generated source
        #[arg(short, long, default_value = "data.rs")]
        output: PathBuf,

        /// Output a machine-readable JSON manifest (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run the pipeline and report the table manifest without writing
    Manifest {
        /// Output a machine-readable JSON manifest (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { output, json } => commands::run_generate(&output, json),
        Commands::Manifest { json } => commands::run_manifest(json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
