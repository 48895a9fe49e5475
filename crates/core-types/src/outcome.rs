use core::fmt;

use crate::Nomination;

/// The result of a finished vote, fixed exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome {
    /// The nomination that won the plurality vote.
    Winner(Nomination),

    /// Voting closed without a single ballot.
    Undecided,
}

impl Outcome {
    /// The winning nomination, if any.
    pub fn winner(&self) -> Option<&Nomination> {
        match self {
            Self::Winner(nomination) => Some(nomination),
            Self::Undecided => None,
        }
    }

    /// The name of the winning nomination, if any.
    pub fn name(&self) -> Option<&str> {
        self.winner().map(|nomination| nomination.name.as_str())
    }

    pub fn is_undecided(&self) -> bool {
        matches!(self, Self::Undecided)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(nomination) => write!(f, "{}", nomination.name),
            Self::Undecided => write!(f, "undecided"),
        }
    }
}
