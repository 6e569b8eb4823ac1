use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use rust_tableparser::{inspect, version, InspectOptions};

#[derive(Parser)]
#[command(name = "rust-tableparser")]
#[command(author, version, about = "Inspect MySQL table definitions and server versions")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the model recovered from SHOW CREATE TABLE output
    Inspect {
        /// Files holding one table definition each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Index to use instead of the best ranked one
        #[arg(short, long, default_value = "")]
        index: String,
    },

    /// Print only the index selected for ordered scans
    BestIndex {
        /// File holding the table definition
        file: PathBuf,

        /// Index that must exist in the table
        #[arg(short, long, default_value = "")]
        index: String,
    },

    /// Compare two server versions, printing -1, 0 or 1
    Compare { v1: String, v2: String },

    /// Print the normalized form of a server version (8.0.30 -> 80030)
    Normalize {
        #[arg(value_name = "VERSION")]
        server_version: String,
    },
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { files, index } => {
            let options = InspectOptions {
                paths: files,
                preferred_index: index,
                verbose: cli.verbose,
            };

            for report in inspect(&options)? {
                println!("{report}");
            }
        }
        Commands::BestIndex { file, index } => {
            let options = InspectOptions {
                paths: vec![file],
                preferred_index: index,
                verbose: cli.verbose,
            };

            for report in inspect(&options)? {
                println!("{}", report.best_index);
            }
        }
        Commands::Compare { v1, v2 } => {
            let ordering = version::compare(&v1, &v2)?;
            println!("{}", ordering as i8);
        }
        Commands::Normalize { server_version } => {
            println!("{}", version::normalize(&server_version)?);
        }
    }

    Ok(())
}
