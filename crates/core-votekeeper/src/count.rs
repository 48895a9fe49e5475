use alloc::collections::BTreeMap;

use quorumvote_core_types::{Ballot, Context, NominationId};

use crate::Count;

/// Running vote counts per nomination, derived by replaying the ballot log.
///
/// The leader only changes when a nomination's count becomes strictly greater
/// than the current maximum. Ties are therefore broken in favor of the
/// nomination that reached the winning count first in ballot order,
/// not in favor of the lowest nomination number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<NominationId, Count>,
    leader: Option<(NominationId, Count)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay the given ballots, in order.
    pub fn from_ballots<'a, Ctx>(ballots: impl IntoIterator<Item = &'a Ballot<Ctx>>) -> Self
    where
        Ctx: Context,
    {
        let mut tally = Self::new();
        for ballot in ballots {
            tally.add(ballot.nomination);
        }
        tally
    }

    /// Count one more vote for the nomination and return its new count.
    pub fn add(&mut self, nomination: NominationId) -> Count {
        let entry = self.counts.entry(nomination).or_insert(0);
        *entry += 1;
        let count = *entry;

        let overtakes = match self.leader {
            Some((_, max)) => count > max,
            None => true,
        };

        if overtakes {
            self.leader = Some((nomination, count));
        }

        count
    }

    /// Return the count for the nomination, or 0 if it received no vote.
    pub fn get(&self, nomination: &NominationId) -> Count {
        self.counts.get(nomination).copied().unwrap_or(0)
    }

    /// Return the sum of all counts.
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    /// The current leader and its count, if any ballot was counted.
    pub fn leader(&self) -> Option<(NominationId, Count)> {
        self.leader
    }

    /// The winning nomination, if any ballot was counted.
    pub fn winner(&self) -> Option<NominationId> {
        self.leader.map(|(nomination, _)| nomination)
    }

    /// Iterate over the nominations that received at least one vote, by nomination number.
    pub fn iter(&self) -> impl Iterator<Item = (NominationId, Count)> + '_ {
        self.counts.iter().map(|(nomination, count)| (*nomination, *count))
    }
}
