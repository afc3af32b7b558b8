//! Config command - print or create the cogx configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use cogx_core::models::CogxConfig;

use super::{default_config_path, load_config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration in effect as JSON
    Show,

    /// Write the built-in defaults to a JSON file
    Init {
        /// Destination (default: --config, else the user config directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init { output, force } => {
            let path = output
                .or_else(|| config_path.map(Path::to_path_buf))
                .unwrap_or_else(default_config_path);
            init(&path, force)
        }
    }
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to replace it",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    CogxConfig::default().save(path)?;

    println!("{} Wrote default config to {}", style("✓").green(), path.display());

    Ok(())
}
