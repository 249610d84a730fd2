//! inkreplay - replay handwriting logs onto a raster image
//!
//! Usage:
//!   inkreplay info <FILE>                       Show document metadata and traces
//!   inkreplay render <FILE> [-o OUT] [--steps N] Draw traces and write an image

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use config::Settings;

#[derive(Parser)]
#[command(name = "inkreplay", about = "Replay ink trace documents", version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON settings file
    #[arg(long, global = true, default_value = "inkreplay.json")]
    config: PathBuf,

    /// Override the configured horizontal offset
    #[arg(long, global = true, allow_negative_numbers = true)]
    x_offset: Option<i32>,

    /// Override the configured vertical offset
    #[arg(long, global = true, allow_negative_numbers = true)]
    y_offset: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document metadata, trace counts and decode issues
    Info {
        /// Ink document
        file: PathBuf,
    },

    /// Draw traces and write the canvas as a grayscale image
    Render {
        /// Ink document
        file: PathBuf,

        /// Output image; the format follows the extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of traces to draw (default: the configured initial steps)
        #[arg(long)]
        steps: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::resolve(&cli.config, cli.x_offset, cli.y_offset);
    logging::init_logging(&settings.config.logging, cli.verbose);

    match cli.command {
        Commands::Info { file } => commands::info::run(&file, &settings),
        Commands::Render {
            file,
            output,
            steps,
        } => commands::render::run(&file, output, steps, &settings),
    }
}
