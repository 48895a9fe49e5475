//! The phase state machine: Planning -> Voting -> Finished.

use quorumvote_core_types::Phase;

use crate::input::Input;
use crate::output::{Closure, Output};
use crate::state::State;
use crate::transition::Transition;

/// Apply an input to the given state, and return the resulting transition.
///
/// Valid transitions:
///
/// | From     | Input             | To       | Output                    |
/// |----------|-------------------|----------|---------------------------|
/// | Planning | `OpenVoting`      | Voting   | `ScheduleDeadline(now+p)` |
/// | Voting   | `Reschedule(t)`   | Voting   | `ScheduleDeadline(t)`     |
/// | Voting   | `DeadlineElapsed` | Finished | `Finalize(Deadline)`      |
/// | Voting   | `QuorumReached`   | Finished | `Finalize(Quorum)`        |
///
/// Any other combination is invalid and leaves the state unchanged.
pub fn apply(state: State, input: Input) -> Transition {
    match (state.phase, input) {
        (Phase::Planning, Input::OpenVoting { now, period }) => {
            let deadline = now.saturating_add(period);

            Transition::to(state.with_phase(Phase::Voting).with_deadline(deadline))
                .with_output(Output::ScheduleDeadline(deadline))
        }

        (Phase::Voting, Input::Reschedule(deadline)) => {
            Transition::to(state.with_deadline(deadline))
                .with_output(Output::ScheduleDeadline(deadline))
        }

        (Phase::Voting, Input::DeadlineElapsed) => finalize(state, Closure::Deadline),
        (Phase::Voting, Input::QuorumReached) => finalize(state, Closure::Quorum),

        _ => Transition::invalid(state),
    }
}

fn finalize(state: State, closure: Closure) -> Transition {
    Transition::to(state.with_phase(Phase::Finished)).with_output(Output::Finalize(closure))
}
