//! The `collage config` command.

use clap::{Args, Subcommand};
use collage_core::output::write_json;
use collage_core::Config;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Print the config file location
    Path,

    /// Write a config file with the default settings
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check a config file without building anything
    Check {
        /// File to check (defaults to the standard location)
        file: Option<PathBuf>,
    },
}

pub fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { json } => {
            let config = Config::load()?;
            if json {
                write_json(std::io::stdout().lock(), &config, true)?;
            } else {
                print!("{}", config.to_toml()?);
            }
        }

        ConfigCommand::Path => println!("{}", Config::default_path().display()),

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init_at(&path, force)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }

        ConfigCommand::Check { file } => {
            let path = file.unwrap_or_else(Config::default_path);
            let config = Config::load_from(&path)?;
            println!(
                "{} is valid ({}px wide, padding {}px)",
                path.display(),
                config.collage.width,
                config.collage.padding
            );
        }
    }

    Ok(())
}

fn init_at(path: &std::path::Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Config::default().to_toml()?)?;
    Ok(())
}
