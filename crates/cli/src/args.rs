//! Command-line interface
//!
//! The configuration file is given with the `--config` parameter and defaults to
//! `quorumvote.toml` in the current directory. When it does not exist, the
//! default configuration is used.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre::{Context, Result};

use quorumvote_config::{load_config, Config};

const CONFIG_FILE: &str = "quorumvote.toml";

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, value_name = "FILE", env = "QUORUMVOTE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Write the default configuration file
    Init(InitCmd),

    /// Play a scenario against a fresh engine and print the result
    Run(RunCmd),
}

#[derive(ClapArgs, Clone, Debug, Default, PartialEq)]
pub struct InitCmd {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(ClapArgs, Clone, Debug, PartialEq)]
pub struct RunCmd {
    /// Scenario file path
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,
}

impl Args {
    pub fn new() -> Args {
        Args::parse()
    }

    /// The configuration file path, from the command line or the default one.
    pub fn get_config_file_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load the configuration file, falling back to the defaults when it does not
    /// exist yet. An explicitly given file must exist, unless it is about to be created.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.get_config_file_path();

        let must_exist = self.config.is_some() && !matches!(self.command, Commands::Init(_));

        if !path.exists() && !must_exist {
            return Ok(Config::default());
        }

        load_config(&path, None)
            .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()))
    }
}
