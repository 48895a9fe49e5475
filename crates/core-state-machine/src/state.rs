use quorumvote_core_types::{Phase, Tick};

use crate::input::Input;
use crate::state_machine::apply;
use crate::transition::Transition;

/// The state of the ballot lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// The current phase.
    pub phase: Phase,

    /// The deadline, unset until voting opens.
    pub deadline: Option<Tick>,
}

impl State {
    /// A fresh state in the planning phase, without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    pub fn with_deadline(self, deadline: Tick) -> Self {
        Self {
            deadline: Some(deadline),
            ..self
        }
    }

    /// Whether voting is open and its deadline has elapsed at `now`.
    pub fn deadline_elapsed(&self, now: Tick) -> bool {
        self.phase.is_voting() && self.deadline.is_some_and(|deadline| deadline.has_elapsed(now))
    }

    /// The phase as it would be observed at `now`,
    /// taking into account a deadline which elapsed but was not yet acted upon.
    pub fn phase_at(&self, now: Tick) -> Phase {
        if self.deadline_elapsed(now) {
            Phase::Finished
        } else {
            self.phase
        }
    }

    /// Apply the given input to the current state, triggering a transition.
    pub fn apply(self, input: Input) -> Transition {
        apply(self, input)
    }
}
