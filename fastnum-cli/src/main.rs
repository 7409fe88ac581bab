//! fastnum CLI - parse numbers from arguments, files or stdin

#![warn(missing_docs)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod commands;
mod config;

use commands::{parse, range_of, scan};

#[derive(Parser)]
#[command(name = "fastnum")]
#[command(about = "Fast base-10 number parsing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a base-10 integer
    Int {
        /// Text containing the integer
        text: String,

        /// First byte of the range to parse
        #[arg(long)]
        start: Option<usize>,

        /// End of the range to parse, exclusive
        #[arg(long)]
        end: Option<usize>,

        /// Parse as a 64-bit integer
        #[arg(long)]
        wide: bool,
    },

    /// Parse a double, with optional scientific notation
    Double {
        /// Text containing the number
        text: String,

        /// First byte of the range to parse
        #[arg(long)]
        start: Option<usize>,

        /// End of the range to parse, exclusive
        #[arg(long)]
        end: Option<usize>,

        /// Decimal places to print
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Parse every number in a file or stdin
    Scan {
        /// Input file (defaults to stdin)
        file: Option<PathBuf>,

        /// Report invalid fields and continue
        #[arg(long)]
        skip_invalid: bool,

        /// Do not print the summary
        #[arg(long)]
        no_summary: bool,

        /// Decimal places to print
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = config::load_config(cli.config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Int {
            text,
            start,
            end,
            wide,
        } => {
            parse::int(&mut out, &text, range_of(&text, start, end), wide)?;
        }
        Commands::Double {
            text,
            start,
            end,
            precision,
        } => {
            if precision.is_some() {
                config.output.precision = precision;
            }
            parse::double(&mut out, &text, range_of(&text, start, end), &config.output)?;
        }
        Commands::Scan {
            file,
            skip_invalid,
            no_summary,
            precision,
        } => {
            if precision.is_some() {
                config.output.precision = precision;
            }
            config.scan.skip_invalid |= skip_invalid;
            if no_summary {
                config.scan.summary = false;
            }
            let input = scan::read_input(file.as_deref())?;
            let stderr = std::io::stderr();
            let mut err = stderr.lock();
            scan::scan(&input, &mut out, &mut err, &config.scan, &config.output)?;
        }
    }

    Ok(())
}
