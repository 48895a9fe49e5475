use pretty_assertions::assert_eq;

use quorumvote_core_types::{Params, Phase, Tick};
use quorumvote_engine::{Closure, Error, Operation};

use quorumvote_test::utils::{make_participants, nomination, voting_engine, COORDINATOR};

#[test]
fn set_deadline_accepts_any_tick_not_before_now() {
    let participants = make_participants::<2>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::ZERO);

    let deadline = engine
        .set_deadline(&COORDINATOR, Tick::new(50), Tick::new(60))
        .unwrap();
    assert_eq!(deadline, Tick::new(60));
    assert_eq!(engine.deadline(), Some(Tick::new(60)));

    let err = engine
        .set_deadline(&COORDINATOR, Tick::new(50), Tick::new(49))
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDeadline {
            operation: Operation::SetDeadline,
            now: Tick::new(50)
        }
    );
    assert_eq!(engine.deadline(), Some(Tick::new(60)));
}

#[test]
fn deadline_set_to_now_closes_on_the_next_call() {
    let participants = make_participants::<2>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::ZERO);

    engine
        .set_deadline(&COORDINATOR, Tick::new(50), Tick::new(50))
        .unwrap();
    assert_eq!(engine.current_phase(), Phase::Voting);

    assert!(!engine.vote(&participants[0], Tick::new(50), nomination(1)).unwrap());
    assert_eq!(engine.current_phase(), Phase::Finished);
    assert_eq!(engine.closed_by(), Some(Closure::Deadline));
}

#[test]
fn extend_shifts_the_deadline_forward() {
    let participants = make_participants::<2>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::new(10));

    let deadline = engine.extend_deadline(&COORDINATOR, Tick::new(20), 100).unwrap();
    assert_eq!(deadline, Tick::new(390));

    // Voting now stays open past the initial deadline
    assert!(engine.vote(&participants[0], Tick::new(300), nomination(2)).unwrap());
    assert_eq!(engine.current_phase(), Phase::Voting);
}

#[test]
fn extend_saturates() {
    let participants = make_participants::<2>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::ZERO);

    let deadline = engine
        .extend_deadline(&COORDINATOR, Tick::new(1), u64::MAX)
        .unwrap();
    assert_eq!(deadline, Tick::MAX);
}

#[test]
fn reduce_must_not_move_the_deadline_into_the_past() {
    let participants = make_participants::<2>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::ZERO);

    let deadline = engine.reduce_deadline(&COORDINATOR, Tick::new(100), 80).unwrap();
    assert_eq!(deadline, Tick::new(200));

    // 200 - 101 = 99 < 100
    let err = engine
        .reduce_deadline(&COORDINATOR, Tick::new(100), 101)
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDeadline {
            operation: Operation::ReduceDeadline,
            now: Tick::new(100)
        }
    );

    // Below zero
    let err = engine
        .reduce_deadline(&COORDINATOR, Tick::new(100), 1_000)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDeadline { .. }));

    assert_eq!(engine.deadline(), Some(Tick::new(200)));

    // Down to exactly now is fine
    let deadline = engine.reduce_deadline(&COORDINATOR, Tick::new(100), 100).unwrap();
    assert_eq!(deadline, Tick::new(100));
}

#[test]
fn deadline_is_kept_after_finishing() {
    let participants = make_participants::<1>();
    let mut engine = voting_engine(Params::default(), &participants, Tick::new(5));

    engine.vote(&participants[0], Tick::new(6), nomination(1)).unwrap();

    assert_eq!(engine.current_phase(), Phase::Finished);
    assert_eq!(engine.deadline(), Some(Tick::new(285)));
}

#[test]
fn custom_voting_period() {
    let participants = make_participants::<2>();
    let params = Params {
        voting_period: 10,
        ..Params::default()
    };
    let mut engine = voting_engine(params, &participants, Tick::new(5));

    assert_eq!(engine.deadline(), Some(Tick::new(15)));
    assert_eq!(engine.phase_at(Tick::new(15)), Phase::Finished);
}
