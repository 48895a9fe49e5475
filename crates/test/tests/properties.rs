use std::collections::BTreeSet;

use arbtest::arbitrary::{self, Unstructured};

use quorumvote_core_types::{Params, Phase, RegistrationCount, Tick};
use quorumvote_core_votekeeper::quorum_threshold;
use quorumvote_engine::{Closure, Engine};

use quorumvote_test::utils::{make_participants, nomination, planned_engine, COORDINATOR};
use quorumvote_test::{Address, TestContext};

const PARTICIPANTS: usize = 6;

/// Perform one arbitrary operation at `now`, by an arbitrary caller.
fn step(
    u: &mut Unstructured<'_>,
    engine: &mut Engine<TestContext>,
    callers: &[Address],
    now: Tick,
) -> arbitrary::Result<()> {
    let caller = *u.choose(callers)?;

    // Errors and rejections are part of the exercise
    match u.int_in_range(0..=7)? {
        0 => drop(engine.register_nomination(&caller, now, "Picnic Spot")),
        1 => {
            let address = *u.choose(callers)?;
            drop(engine.register_participant(&caller, now, address, "friend"))
        }
        2 => drop(engine.open_voting(&caller, now)),
        3 => {
            let deadline = now.saturating_add(u.int_in_range(0..=300)?);
            drop(engine.set_deadline(&caller, now, deadline))
        }
        4 => drop(engine.extend_deadline(&caller, now, u.int_in_range(0..=300)?)),
        5 => drop(engine.reduce_deadline(&caller, now, u.int_in_range(0..=300)?)),
        _ => {
            let choice = nomination(u.int_in_range(0..=4)?);
            drop(engine.vote(&caller, now, choice))
        }
    }

    Ok(())
}

fn callers() -> Vec<Address> {
    let mut callers = make_participants::<PARTICIPANTS>().to_vec();
    callers.push(COORDINATOR);
    callers.push(Address::from_index(42));
    callers
}

#[test]
fn phase_never_goes_backwards() {
    arbtest::arbtest(|u| {
        let callers = callers();
        let mut engine = planned_engine(Params::default(), &callers[..PARTICIPANTS]);
        let mut now = Tick::ZERO;
        let mut phase = engine.current_phase();

        for _ in 0..u.int_in_range(1..=64)? {
            now = now.saturating_add(u.int_in_range(0..=40)?);
            step(u, &mut engine, &callers, now)?;

            assert!(engine.current_phase() >= phase);
            phase = engine.current_phase();
        }

        Ok(())
    });
}

#[test]
fn each_participant_votes_at_most_once() {
    arbtest::arbtest(|u| {
        let callers = callers();
        let mut engine = planned_engine(Params::default(), &callers[..PARTICIPANTS]);
        let mut now = Tick::ZERO;

        for _ in 0..u.int_in_range(1..=64)? {
            now = now.saturating_add(u.int_in_range(0..=10)?);
            step(u, &mut engine, &callers, now)?;
        }

        let voters: BTreeSet<_> = engine.ballots().iter().map(|b| b.voter).collect();
        assert_eq!(voters.len(), engine.ballots().len());

        for ballot in engine.ballots() {
            let participant = engine
                .participant(&ballot.voter)
                .expect("only participants have ballots");

            assert!(participant.has_voted);
            assert!(engine.nomination(ballot.nomination).is_some());
        }

        Ok(())
    });
}

#[test]
fn result_is_set_exactly_when_finished() {
    arbtest::arbtest(|u| {
        let callers = callers();
        let mut engine = planned_engine(Params::default(), &callers[..PARTICIPANTS]);
        let mut now = Tick::ZERO;
        let mut fixed = None;

        for _ in 0..u.int_in_range(1..=64)? {
            now = now.saturating_add(u.int_in_range(0..=40)?);
            step(u, &mut engine, &callers, now)?;

            let finished = engine.current_phase() == Phase::Finished;
            assert_eq!(engine.result().is_some(), finished);
            assert_eq!(engine.closed_by().is_some(), finished);

            match (&fixed, engine.result()) {
                (None, Some(result)) => fixed = Some(result.clone()),
                (Some(fixed), result) => assert_eq!(Some(fixed), result),
                (None, None) => (),
            }
        }

        Ok(())
    });
}

#[test]
fn quorum_closure_means_a_majority_voted() {
    arbtest::arbtest(|u| {
        let callers = callers();
        let registration_count =
            *u.choose(&[RegistrationCount::Distinct, RegistrationCount::Cumulative])?;
        let params = Params {
            registration_count,
            ..Params::default()
        };

        let mut engine = planned_engine(params, &callers[..PARTICIPANTS]);
        let mut now = Tick::ZERO;

        for _ in 0..u.int_in_range(1..=64)? {
            now = now.saturating_add(u.int_in_range(0..=10)?);
            step(u, &mut engine, &callers, now)?;
        }

        if engine.closed_by() == Some(Closure::Quorum) {
            let cast = engine.ballots().len() as u64;
            assert_eq!(cast, quorum_threshold(engine.eligible_voters()));
        }

        Ok(())
    });
}
