use displaydoc::Display;

use quorumvote_core_types::Tick;

/// Why voting was closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Closure {
    /// deadline
    Deadline,

    /// quorum
    Quorum,
}

/// Outputs of the phase state machine, to be carried out by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// The deadline is now the given tick.
    ScheduleDeadline(Tick),

    /// Voting is closed, tally the ballots and fix the result.
    Finalize(Closure),
}
