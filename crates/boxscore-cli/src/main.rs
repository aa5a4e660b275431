mod commands;
mod output;

use boxscore_core::config::{self, ParseOptions};
use boxscore_core::error::BoxScoreError;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Parser)]
#[command(
    name = "boxscore",
    version,
    about = "Extract player statistics from basketball box-score PDFs"
)]
struct Cli {
    /// Log every skipped table and row
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with parse options (markers, table detection tunables)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a box-score PDF into game context and player records
    Parse {
        /// Path to the PDF
        input_file: PathBuf,

        /// Group tag copied onto every player record
        #[arg(short, long)]
        group: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Dump the raw tables detected in a PDF
    Tables {
        /// Path to the PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Print the game-summary input as JSON
    Summary {
        /// Path to the PDF
        input_file: PathBuf,

        /// Group tag copied onto every player record
        #[arg(short, long)]
        group: String,

        /// Key players listed per team
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("boxscore=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boxscore=info"))
    };

    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_options(path: Option<&Path>) -> Result<ParseOptions, BoxScoreError> {
    match path {
        Some(path) => config::load_options(path),
        None => Ok(ParseOptions::default()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_options(cli.config.as_deref()).and_then(|options| match cli.command {
        Commands::Parse {
            input_file,
            group,
            output,
            out,
        } => commands::parse::run(input_file, &group, &output, out, &options),
        Commands::Tables { input_file, output } => {
            commands::tables::run(input_file, &output, &options)
        }
        Commands::Summary {
            input_file,
            group,
            top,
        } => commands::summary::run(input_file, &group, top, &options),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
