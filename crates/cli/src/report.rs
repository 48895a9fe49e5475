use serde::Serialize;

use quorumvote_core_types::{NominationId, Outcome, Phase, Tick};
use quorumvote_engine::Engine;

use crate::context::CliContext;

/// The state of the engine once a scenario has been played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub phase: Phase,
    pub deadline: Option<Tick>,
    pub closed_by: Option<String>,
    pub outcome: Option<Outcome>,
    pub tally: Vec<TallyEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub nomination: NominationId,
    pub name: String,
    pub ballots: u64,
}

impl Report {
    pub fn new(engine: &Engine<CliContext>) -> Self {
        let tally = engine.tally();

        Self {
            phase: engine.current_phase(),
            deadline: engine.deadline(),
            closed_by: engine.closed_by().map(|closure| closure.to_string()),
            outcome: engine.result().cloned(),
            tally: engine
                .nominations()
                .iter()
                .map(|nomination| TallyEntry {
                    nomination: nomination.id,
                    name: nomination.name.clone(),
                    ballots: tally.get(&nomination.id),
                })
                .collect(),
        }
    }
}
