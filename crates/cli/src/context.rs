use std::fmt;

use quorumvote_core_types::{Address, Context};

/// Callers in a scenario are known by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(pub String);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Address for Name {}

#[derive(Copy, Clone, Debug)]
pub struct CliContext;

impl Context for CliContext {
    type Address = Name;
}
