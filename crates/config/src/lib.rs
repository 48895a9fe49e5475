//! Configuration for the quorumvote ballot engine.
//!
//! Configuration is read from a TOML file, then overridden by environment variables
//! carrying a prefix and using `__` as the section separator,
//! eg. `QUORUMVOTE__VOTING__VOTING_PERIOD=100`.

use core::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use quorumvote_core_types::{Params, RegistrationCount, DEFAULT_VOTING_PERIOD};

mod utils;

pub use config::ConfigError;

/// The default prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "QUORUMVOTE";

/// Quorumvote configuration options
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Voting configuration options
    #[serde(default)]
    pub voting: VotingConfig,

    /// Log configuration options
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Voting configuration options
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Number of ticks voting stays open after it is opened
    #[serde(
        default = "default_voting_period",
        deserialize_with = "utils::u64_from_anything"
    )]
    pub voting_period: u64,

    /// How participant registrations count towards the quorum
    #[serde(default)]
    pub registration_count: RegistrationCount,
}

fn default_voting_period() -> u64 {
    DEFAULT_VOTING_PERIOD
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            voting_period: default_voting_period(),
            registration_count: RegistrationCount::default(),
        }
    }
}

impl From<VotingConfig> for Params {
    fn from(config: VotingConfig) -> Self {
        Params {
            voting_period: config.voting_period,
            registration_count: config.registration_count,
        }
    }
}

/// Log configuration options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plaintext,
    Json,
}

/// Load the configuration file at `path`, then apply the environment variables
/// starting with `prefix`, or [`ENV_PREFIX`] if none is given.
pub fn load_config(path: impl AsRef<Path>, prefix: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    tracing::debug!(path = %path.display(), "Loading configuration");

    config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix(prefix.unwrap_or(ENV_PREFIX)).separator("__"))
        .build()?
        .try_deserialize()
}
