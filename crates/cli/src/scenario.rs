//! Scenario files
//!
//! A scenario names the coordinator of a fresh engine and lists the calls made to it:
//!
//! ```toml
//! coordinator = "carol"
//!
//! [[steps]]
//! at = 0
//! caller = "carol"
//! action = { nominate = "Courtyard Cafe" }
//!
//! [[steps]]
//! at = 3
//! caller = "carol"
//! action = "open"
//! ```

use std::fmt;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub coordinator: String,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single call, made by `caller` when the logical clock reads `at`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub at: u64,
    pub caller: String,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Nominate(String),
    Register { address: String, name: String },
    Open,
    SetDeadline(u64),
    ExtendDeadline(u64),
    ReduceDeadline(u64),
    Vote(u32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominate(name) => write!(f, "nominate {name}"),
            Self::Register { address, name } => write!(f, "register {address} as {name}"),
            Self::Open => write!(f, "open voting"),
            Self::SetDeadline(deadline) => write!(f, "set deadline to #{deadline}"),
            Self::ExtendDeadline(span) => write!(f, "extend deadline by {span}"),
            Self::ReduceDeadline(span) => write!(f, "reduce deadline by {span}"),
            Self::Vote(nomination) => write!(f, "vote for {nomination}"),
        }
    }
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).wrap_err("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read scenario from {}", path.display()))?;

        Self::from_toml(&text)
    }
}
