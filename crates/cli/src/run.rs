//! Run command

use std::path::Path;

use color_eyre::eyre::Result;
use tracing::{info, warn};

use quorumvote_core_types::{NominationId, Params, Tick};
use quorumvote_engine::{Engine, Error};

use crate::context::{CliContext, Name};
use crate::report::Report;
use crate::scenario::{Action, Scenario, Step};

/// Execute the run command
pub fn run(scenario_file: &Path, params: Params) -> Result<Report> {
    let scenario = Scenario::load(scenario_file)?;
    Ok(play(scenario, params))
}

/// Apply every step of the scenario to a fresh engine.
///
/// Failing steps are logged and do not stop the scenario.
pub fn play(scenario: Scenario, params: Params) -> Report {
    let mut engine = Engine::<CliContext>::new(Name(scenario.coordinator), params);

    info!(
        coordinator = %engine.coordinator(),
        voting_period = params.voting_period,
        "Playing scenario"
    );

    for (index, step) in scenario.steps.into_iter().enumerate() {
        let at = Tick::new(step.at);
        let action = step.action.to_string();

        match apply(&mut engine, step) {
            Ok(outcome) => info!(step = index, %at, "{action}: {outcome}"),
            Err(e) => warn!(step = index, %at, "{action}: {e}"),
        }
    }

    Report::new(&engine)
}

fn apply(engine: &mut Engine<CliContext>, step: Step) -> Result<String, Error<CliContext>> {
    let caller = Name(step.caller);
    let now = Tick::new(step.at);

    match step.action {
        Action::Nominate(name) => engine
            .register_nomination(&caller, now, name)
            .map(|id| format!("nomination {id}")),

        Action::Register { address, name } => engine
            .register_participant(&caller, now, Name(address), name)
            .map(|count| format!("{count} registered")),

        Action::Open => engine
            .open_voting(&caller, now)
            .map(|()| format!("open until {}", engine.deadline().unwrap_or(now))),

        Action::SetDeadline(deadline) => engine
            .set_deadline(&caller, now, Tick::new(deadline))
            .map(|deadline| format!("deadline {deadline}")),

        Action::ExtendDeadline(span) => engine
            .extend_deadline(&caller, now, span)
            .map(|deadline| format!("deadline {deadline}")),

        Action::ReduceDeadline(span) => engine
            .reduce_deadline(&caller, now, span)
            .map(|deadline| format!("deadline {deadline}")),

        Action::Vote(nomination) => engine
            .try_vote(&caller, now, NominationId::new(nomination))
            .map(|status| match status.rejection() {
                None => "accepted".to_string(),
                Some(rejection) => format!("rejected, {rejection}"),
            }),
    }
}
