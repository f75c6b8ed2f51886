//! Collage CLI - arrange a folder of photos into a single row-packed image.
//!
//! Images are rotated upright, scaled to a common row height, given rounded
//! corners and centred row by row on a black canvas. The result is written as
//! a JPEG.
//!
//! # Usage
//!
//! ```bash
//! # Build collage.jpg from a folder
//! collage create ./photos/
//!
//! # Narrower collage, custom output
//! collage create ./photos/ --width 1280 --output ~/Desktop/trip.jpg
//!
//! # Guided prompts
//! collage
//!
//! # View configuration
//! collage config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Collage - arrange a folder of photos into a single row-packed image.
#[derive(Parser, Debug)]
#[command(name = "collage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a collage from the images in a folder
    Create(cli::create::CreateArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match collage_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `collage config path`."
            );
            collage_core::Config::default()
        }
    };
    logging::init(&logging::LogSettings::resolve(&config, cli.verbose, cli.json_logs));

    tracing::debug!("Collage v{}", collage_core::VERSION);

    match cli.command {
        Some(Commands::Create(args)) => cli::create::execute(args, config),
        Some(Commands::Config(args)) => cli::config::execute(args),
        None => {
            if console::Term::stderr().is_term() {
                cli::interactive::run(&config)
            } else {
                anyhow::bail!("No command given. Run `collage --help` for usage.")
            }
        }
    }
}
