//! An engine shared between threads.

use std::sync::Arc;

use derive_where::derive_where;
use parking_lot::RwLock;

use quorumvote_core_types::{
    Authority, Context, Coordinator, NominationId, Outcome, Params, Phase, Tick,
};
use quorumvote_core_votekeeper::Count;

use crate::engine::Engine;
use crate::error::Error;
use crate::status::VoteStatus;
use crate::Closure;

/// A consistent view of the engine, taken under a single lock acquisition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub deadline: Option<Tick>,
    pub ballots_cast: Count,
    pub outcome: Option<Outcome>,
    pub closed_by: Option<Closure>,
}

/// A handle to an engine which serializes all mutating operations.
///
/// Each mutating operation holds the write lock for its whole duration,
/// including the deadline check which may close the vote.
/// Reads share the lock and never observe a half-applied operation.
#[derive_where(Clone)]
pub struct SharedEngine<Ctx, A = Coordinator<Ctx>>
where
    Ctx: Context,
    A: Authority<Ctx>,
{
    inner: Arc<RwLock<Engine<Ctx, A>>>,
}

impl<Ctx> SharedEngine<Ctx>
where
    Ctx: Context,
{
    /// Create a shared engine administered by the given coordinator.
    pub fn with_coordinator(coordinator: Ctx::Address, params: Params) -> Self {
        Self::new(Engine::new(coordinator, params))
    }
}

impl<Ctx, A> SharedEngine<Ctx, A>
where
    Ctx: Context,
    A: Authority<Ctx>,
{
    pub fn new(engine: Engine<Ctx, A>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Run `f` with shared access to the engine.
    pub fn read<R>(&self, f: impl FnOnce(&Engine<Ctx, A>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the engine.
    pub fn write<R>(&self, f: impl FnOnce(&mut Engine<Ctx, A>) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn register_nomination(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        name: impl Into<String>,
    ) -> Result<NominationId, Error<Ctx>> {
        self.write(|engine| engine.register_nomination(caller, now, name))
    }

    pub fn register_participant(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        address: Ctx::Address,
        name: impl Into<String>,
    ) -> Result<Count, Error<Ctx>> {
        self.write(|engine| engine.register_participant(caller, now, address, name))
    }

    pub fn open_voting(&self, caller: &Ctx::Address, now: Tick) -> Result<(), Error<Ctx>> {
        self.write(|engine| engine.open_voting(caller, now))
    }

    pub fn set_deadline(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        deadline: Tick,
    ) -> Result<Tick, Error<Ctx>> {
        self.write(|engine| engine.set_deadline(caller, now, deadline))
    }

    pub fn extend_deadline(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        span: u64,
    ) -> Result<Tick, Error<Ctx>> {
        self.write(|engine| engine.extend_deadline(caller, now, span))
    }

    pub fn reduce_deadline(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        span: u64,
    ) -> Result<Tick, Error<Ctx>> {
        self.write(|engine| engine.reduce_deadline(caller, now, span))
    }

    pub fn vote(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        nomination: NominationId,
    ) -> Result<bool, Error<Ctx>> {
        self.write(|engine| engine.vote(caller, now, nomination))
    }

    pub fn try_vote(
        &self,
        caller: &Ctx::Address,
        now: Tick,
        nomination: NominationId,
    ) -> Result<VoteStatus, Error<Ctx>> {
        self.write(|engine| engine.try_vote(caller, now, nomination))
    }

    pub fn current_phase(&self) -> Phase {
        self.read(|engine| engine.current_phase())
    }

    pub fn result(&self) -> Option<Outcome> {
        self.read(|engine| engine.result().cloned())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.read(|engine| Snapshot {
            phase: engine.current_phase(),
            deadline: engine.deadline(),
            ballots_cast: engine.ballots().len() as Count,
            outcome: engine.result().cloned(),
            closed_by: engine.closed_by(),
        })
    }
}
