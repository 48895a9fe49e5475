//! Append-only ballot log.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use derive_where::derive_where;
use thiserror::Error;

use quorumvote_core_types::{Ballot, Context};

use crate::count::Tally;
use crate::{is_quorum, Count, Threshold};

/// Errors can that be yielded when recording a ballot.
#[derive_where(Clone, Debug, PartialEq, Eq)]
#[derive(Error)]
pub enum RecordBallotError<Ctx>
where
    Ctx: Context,
{
    /// Attempted to record a second ballot for the same voter.
    #[error("Duplicate ballot from {voter}")]
    DuplicateBallot {
        /// The voter who already has a ballot in the log.
        voter: Ctx::Address,
    },
}

/// Keeps the ordered log of accepted ballots and reports when a quorum is reached.
///
/// Ballots are never reordered nor removed once recorded.
#[derive_where(Clone, Debug, Default)]
pub struct VoteKeeper<Ctx>
where
    Ctx: Context,
{
    ballots: Vec<Ballot<Ctx>>,
    voters: BTreeSet<Ctx::Address>,
    quorum_emitted: bool,
}

impl<Ctx> VoteKeeper<Ctx>
where
    Ctx: Context,
{
    /// Create a new, empty `VoteKeeper`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ballot to the log.
    ///
    /// Returns [`Threshold::Quorum`] the first time the number of recorded ballots
    /// reaches a quorum of the `eligible` voters, [`Threshold::Unreached`] otherwise.
    pub fn apply_ballot(
        &mut self,
        ballot: Ballot<Ctx>,
        eligible: Count,
    ) -> Result<Threshold, RecordBallotError<Ctx>> {
        if self.voters.contains(&ballot.voter) {
            return Err(RecordBallotError::DuplicateBallot {
                voter: ballot.voter,
            });
        }

        self.voters.insert(ballot.voter.clone());
        self.ballots.push(ballot);

        if !self.quorum_emitted && is_quorum(self.len(), eligible) {
            self.quorum_emitted = true;
            return Ok(Threshold::Quorum);
        }

        Ok(Threshold::Unreached)
    }

    /// Whether the voter has a ballot in the log.
    pub fn has_voted(&self, voter: &Ctx::Address) -> bool {
        self.voters.contains(voter)
    }

    /// The ballots, in the order they were accepted.
    pub fn ballots(&self) -> &[Ballot<Ctx>] {
        &self.ballots
    }

    /// Number of recorded ballots.
    pub fn len(&self) -> Count {
        self.ballots.len() as Count
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }

    /// Replay the ballot log into a fresh tally.
    pub fn tally(&self) -> Tally {
        Tally::from_ballots(&self.ballots)
    }
}
