use displaydoc::Display;

/// Why a ballot was not accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Rejection {
    /// voting closed during this call
    VotingClosed,
    /// caller is not a registered participant
    NotParticipant,
    /// no such nomination
    UnknownNomination,
    /// participant already voted
    AlreadyVoted,
}

/// Whether a ballot was accepted.
///
/// A rejected ballot leaves the engine state untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VoteStatus {
    Accepted,
    Rejected(Rejection),
}

impl VoteStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}
