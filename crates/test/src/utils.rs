//! Fixtures for setting up engines in tests.

use quorumvote_core_types::{NominationId, Params, Tick};
use quorumvote_engine::Engine;

use crate::{Address, TestContext};

/// The identity which creates, and therefore coordinates, test engines.
pub const COORDINATOR: Address = Address::from_index(1);

/// The nominations registered by [`planned_engine`].
pub const VENUES: [&str; 2] = ["Courtyard Cafe", "Uni Cafe"];

/// Deterministic participant identities, distinct from [`COORDINATOR`].
pub fn make_participants<const N: usize>() -> [Address; N] {
    core::array::from_fn(|i| Address::from_index(100 + i as u8))
}

/// An engine coordinated by [`COORDINATOR`], still in the planning phase.
pub fn new_engine(params: Params) -> Engine<TestContext> {
    Engine::new(COORDINATOR, params)
}

/// An engine in the planning phase, with [`VENUES`] nominated
/// and the given participants registered, all at tick zero.
pub fn planned_engine(params: Params, participants: &[Address]) -> Engine<TestContext> {
    let mut engine = new_engine(params);

    for venue in VENUES {
        engine
            .register_nomination(&COORDINATOR, Tick::ZERO, venue)
            .expect("coordinator can nominate while planning");
    }

    for (i, participant) in participants.iter().enumerate() {
        engine
            .register_participant(&COORDINATOR, Tick::ZERO, *participant, format!("friend-{i}"))
            .expect("coordinator can register while planning");
    }

    engine
}

/// Like [`planned_engine`], with voting opened at `opened_at`.
pub fn voting_engine(
    params: Params,
    participants: &[Address],
    opened_at: Tick,
) -> Engine<TestContext> {
    let mut engine = planned_engine(params, participants);

    engine
        .open_voting(&COORDINATOR, opened_at)
        .expect("coordinator can open voting while planning");

    engine
}

/// Shorthand for a nomination number.
pub fn nomination(id: u32) -> NominationId {
    NominationId::new(id)
}
