//! Piglet CLI - reads a text file and prints it with barnyard animal words
//! replaced by "piglet"/"piglets".

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use piglet::transform;
use tracing::{Level, debug, error, info};

/// A text filter that replaces barnyard animal names with piglet or piglets.
#[derive(Parser, Debug)]
#[command(name = "piglet")]
#[command(version, about, long_about = None)]
struct Args {
    /// The text file to process.
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Logging setup, decided at startup and handed to `init_logging` rather
/// than configured ambiently throughout the program.
#[derive(Debug, Clone)]
struct LogConfig {
    /// Maximum level emitted to stderr.
    level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so that stdout
/// carries only the transformed text.
fn init_logging(config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&LogConfig::default());
    debug!("application started");

    if !args.file.is_file() {
        error!("File not found: {}", args.file.display());
        return ExitCode::FAILURE;
    }

    info!("Processing file: {}", args.file.display());

    let content = match fs::read_to_string(&args.file) {
        Ok(content) => content,
        Err(e) => {
            error!("An error occurred: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", transform(&content));

    debug!("application completed successfully");
    ExitCode::SUCCESS
}
