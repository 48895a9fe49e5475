use derive_where::derive_where;
use displaydoc::Display;
use thiserror::Error;

use quorumvote_core_types::{Context, Phase, Tick};

/// The mutating operations of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    /// register a nomination
    RegisterNomination,
    /// register a participant
    RegisterParticipant,
    /// open voting
    OpenVoting,
    /// set the deadline
    SetDeadline,
    /// extend the deadline
    ExtendDeadline,
    /// reduce the deadline
    ReduceDeadline,
    /// vote
    Vote,
}

impl Operation {
    /// The phase the engine must be in for this operation to be accepted.
    pub fn required_phase(&self) -> Phase {
        match self {
            Self::RegisterNomination | Self::RegisterParticipant | Self::OpenVoting => {
                Phase::Planning
            }
            Self::SetDeadline | Self::ExtendDeadline | Self::ReduceDeadline | Self::Vote => {
                Phase::Voting
            }
        }
    }

    /// Whether only an authorized administrator may perform this operation.
    pub fn is_administrative(&self) -> bool {
        !matches!(self, Self::Vote)
    }
}

/// The errors which may be returned by the engine.
///
/// The engine state is left untouched by the operation that failed.
#[derive_where(Clone, Debug, PartialEq, Eq)]
#[derive(Error)]
pub enum Error<Ctx>
where
    Ctx: Context,
{
    /// The caller is not authorized to administer the engine.
    #[error("Access denied: {caller} is not allowed to {operation}")]
    AccessDenied {
        operation: Operation,
        caller: Ctx::Address,
    },

    /// The operation was attempted outside of its required phase.
    #[error("Cannot {operation} in the {phase} phase")]
    PhaseViolation { operation: Operation, phase: Phase },

    /// The requested deadline would fall before the current logical time.
    #[error("Cannot {operation} to before the current time {now}")]
    InvalidDeadline { operation: Operation, now: Tick },
}

impl<Ctx> Error<Ctx>
where
    Ctx: Context,
{
    /// The operation which failed.
    pub fn operation(&self) -> Operation {
        match self {
            Self::AccessDenied { operation, .. }
            | Self::PhaseViolation { operation, .. }
            | Self::InvalidDeadline { operation, .. } => *operation,
        }
    }
}
