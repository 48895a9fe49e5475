use displaydoc::Display;

use quorumvote_core_types::Tick;

/// Inputs to the phase state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum Input {
    /// open voting at {now} for {period} ticks
    OpenVoting {
        /// The current logical time.
        now: Tick,
        /// How long voting stays open.
        period: u64,
    },

    /// move the deadline to {0}
    Reschedule(Tick),

    /// the deadline elapsed
    DeadlineElapsed,

    /// a quorum of ballots was reached
    QuorumReached,
}
