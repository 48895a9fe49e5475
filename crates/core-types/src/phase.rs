use core::fmt;

/// The engine-wide lifecycle stage.
///
/// Phases are ordered, and the engine only ever moves to a greater phase:
/// `Planning < Voting < Finished`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Phase {
    /// Nominations and participants are being registered.
    #[default]
    Planning,

    /// Ballots are being cast.
    Voting,

    /// The result is fixed. This phase is terminal.
    Finished,
}

impl Phase {
    pub fn is_planning(&self) -> bool {
        matches!(self, Self::Planning)
    }

    pub fn is_voting(&self) -> bool {
        matches!(self, Self::Voting)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Voting => write!(f, "voting"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
