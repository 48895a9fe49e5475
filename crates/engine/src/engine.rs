use std::collections::BTreeMap;

use derive_where::derive_where;
use tracing::{debug, info, warn};

use quorumvote_core_state_machine::input::Input;
use quorumvote_core_state_machine::output::{Closure, Output};
use quorumvote_core_state_machine::state::State;
use quorumvote_core_types::{
    Authority, Ballot, Context, Coordinator, Nomination, NominationId, Outcome, Params,
    Participant, Phase, RegistrationCount, Tick,
};
use quorumvote_core_votekeeper::{
    quorum_threshold, Count, RecordBallotError, Tally, Threshold, VoteKeeper,
};

use crate::error::{Error, Operation};
use crate::status::{Rejection, VoteStatus};

/// The ballot engine.
///
/// Every mutating operation is given the identity of its caller and the current
/// value of the logical clock. Before anything else, each of them checks whether
/// the deadline has elapsed and, if so, closes the vote. Only then are the
/// caller's role and the operation's required phase checked, in that order.
#[derive_where(Debug; A)]
pub struct Engine<Ctx, A = Coordinator<Ctx>>
where
    Ctx: Context,
    A: Authority<Ctx>,
{
    params: Params,
    authority: A,
    state: State,

    /// Registered nominations, the nomination numbered `n` is at index `n - 1`.
    nominations: Vec<Nomination>,
    participants: BTreeMap<Ctx::Address, Participant<Ctx>>,

    /// Number of participant registrations performed, including overwrites.
    registrations: Count,

    votes: VoteKeeper<Ctx>,
    outcome: Option<Outcome>,
    closed_by: Option<Closure>,
}

impl<Ctx> Engine<Ctx>
where
    Ctx: Context,
{
    /// Create an engine administered by the given coordinator.
    pub fn new(coordinator: Ctx::Address, params: Params) -> Self {
        Self::with_authority(Coordinator::new(coordinator), params)
    }

    /// The coordinator of this engine.
    pub fn coordinator(&self) -> &Ctx::Address {
        self.authority.address()
    }
}

impl<Ctx, A> Engine<Ctx, A>
where
    Ctx: Context,
    A: Authority<Ctx>,
{
    /// Create an engine administered by whoever the given authority approves of.
    pub fn with_authority(authority: A, params: Params) -> Self {
        Self {
            params,
            authority,
            state: State::new(),
            nominations: Vec::new(),
            participants: BTreeMap::new(),
            registrations: 0,
            votes: VoteKeeper::new(),
            outcome: None,
            closed_by: None,
        }
    }

    /// Register a nomination and return its number.
    pub fn register_nomination(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        name: impl Into<String>,
    ) -> Result<NominationId, Error<Ctx>> {
        self.administer(Operation::RegisterNomination, caller, now, |this| {
            let id = NominationId::new(this.nominations.len() as u32 + 1);
            let nomination = Nomination::new(id, name);

            debug!(%id, name = %nomination.name, "Registered nomination");

            this.nominations.push(nomination);
            Ok(id)
        })
    }

    /// Register a participant, or overwrite an existing one,
    /// and return the number of registrations as counted by [`Params::registration_count`].
    pub fn register_participant(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        address: Ctx::Address,
        name: impl Into<String>,
    ) -> Result<Count, Error<Ctx>> {
        self.administer(Operation::RegisterParticipant, caller, now, |this| {
            let participant = Participant::new(address.clone(), name);
            let previous = this.participants.insert(address.clone(), participant);
            this.registrations += 1;

            let count = this.eligible_voters();

            debug!(
                %address,
                overwritten = previous.is_some(),
                %count,
                "Registered participant"
            );

            Ok(count)
        })
    }

    /// Close registrations and open voting until `now` plus the voting period.
    pub fn open_voting(&mut self, caller: &Ctx::Address, now: Tick) -> Result<(), Error<Ctx>> {
        self.administer(Operation::OpenVoting, caller, now, |this| {
            this.apply(Input::OpenVoting {
                now,
                period: this.params.voting_period,
            });

            Ok(())
        })
    }

    /// Move the deadline to the given tick, which must not be before `now`.
    pub fn set_deadline(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        deadline: Tick,
    ) -> Result<Tick, Error<Ctx>> {
        self.administer(Operation::SetDeadline, caller, now, |this| {
            if deadline < now {
                return Err(Error::InvalidDeadline {
                    operation: Operation::SetDeadline,
                    now,
                });
            }

            Ok(this.reschedule(deadline))
        })
    }

    /// Push the deadline `span` ticks further.
    pub fn extend_deadline(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        span: u64,
    ) -> Result<Tick, Error<Ctx>> {
        self.administer(Operation::ExtendDeadline, caller, now, |this| {
            let deadline = this.current_deadline(now).saturating_add(span);
            Ok(this.reschedule(deadline))
        })
    }

    /// Bring the deadline `span` ticks closer, as long as it does not fall before `now`.
    pub fn reduce_deadline(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        span: u64,
    ) -> Result<Tick, Error<Ctx>> {
        self.administer(Operation::ReduceDeadline, caller, now, |this| {
            let deadline = this
                .current_deadline(now)
                .checked_sub(span)
                .filter(|deadline| *deadline >= now)
                .ok_or(Error::InvalidDeadline {
                    operation: Operation::ReduceDeadline,
                    now,
                })?;

            Ok(this.reschedule(deadline))
        })
    }

    /// Cast a ballot for the given nomination, and return whether it was accepted.
    ///
    /// See [`Engine::try_vote`] for the reason of a rejection.
    pub fn vote(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        nomination: NominationId,
    ) -> Result<bool, Error<Ctx>> {
        self.try_vote(caller, now, nomination)
            .map(|status| status.is_accepted())
    }

    /// Cast a ballot for the given nomination.
    ///
    /// Ineligible ballots are rejected without error and without effect.
    /// An error is only returned when voting is not open,
    /// unless it was closed by the deadline during this very call.
    pub fn try_vote(
        &mut self,
        caller: &Ctx::Address,
        now: Tick,
        nomination: NominationId,
    ) -> Result<VoteStatus, Error<Ctx>> {
        if self.enforce_deadline(now) {
            return Ok(self.reject(caller, nomination, Rejection::VotingClosed));
        }

        self.require_phase(Operation::Vote)?;

        let Some(participant) = self.participants.get(caller) else {
            return Ok(self.reject(caller, nomination, Rejection::NotParticipant));
        };

        if participant.has_voted {
            return Ok(self.reject(caller, nomination, Rejection::AlreadyVoted));
        }

        if self.nomination(nomination).is_none() {
            return Ok(self.reject(caller, nomination, Rejection::UnknownNomination));
        }

        let eligible = self.eligible_voters();
        let ballot = Ballot::new(caller.clone(), nomination);

        let threshold = match self.votes.apply_ballot(ballot, eligible) {
            Ok(threshold) => threshold,
            Err(RecordBallotError::DuplicateBallot { .. }) => {
                return Ok(self.reject(caller, nomination, Rejection::AlreadyVoted));
            }
        };

        if let Some(participant) = self.participants.get_mut(caller) {
            participant.has_voted = true;
        }

        debug!(
            voter = %caller,
            %nomination,
            cast = self.votes.len(),
            quorum = quorum_threshold(eligible),
            "Accepted ballot"
        );

        if threshold == Threshold::Quorum {
            self.apply(Input::QuorumReached);
        }

        Ok(VoteStatus::Accepted)
    }

    /// The current phase, as of the last mutating operation.
    pub fn current_phase(&self) -> Phase {
        self.state.phase
    }

    /// The phase as it would be observed by a mutating operation at `now`.
    pub fn phase_at(&self, now: Tick) -> Phase {
        self.state.phase_at(now)
    }

    /// The result, fixed once voting is finished.
    pub fn result(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Why voting was closed, once it is finished.
    pub fn closed_by(&self) -> Option<Closure> {
        self.closed_by
    }

    /// The deadline, set once voting opens.
    pub fn deadline(&self) -> Option<Tick> {
        self.state.deadline
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// The registered nominations, in registration order.
    pub fn nominations(&self) -> &[Nomination] {
        &self.nominations
    }

    pub fn nomination(&self, id: NominationId) -> Option<&Nomination> {
        id.index().and_then(|index| self.nominations.get(index))
    }

    pub fn participant(&self, address: &Ctx::Address) -> Option<&Participant<Ctx>> {
        self.participants.get(address)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant<Ctx>> {
        self.participants.values()
    }

    /// Number of distinct registered participants.
    pub fn participant_count(&self) -> Count {
        self.participants.len() as Count
    }

    /// Number of participant registrations performed, including overwrites.
    pub fn registrations(&self) -> Count {
        self.registrations
    }

    /// Number of voters the quorum is computed from.
    pub fn eligible_voters(&self) -> Count {
        match self.params.registration_count {
            RegistrationCount::Distinct => self.participant_count(),
            RegistrationCount::Cumulative => self.registrations,
        }
    }

    /// The accepted ballots, in the order they were cast.
    pub fn ballots(&self) -> &[Ballot<Ctx>] {
        self.votes.ballots()
    }

    /// The tally of the ballots cast so far.
    pub fn tally(&self) -> Tally {
        self.votes.tally()
    }

    /// Run an administrative operation: close the vote if the deadline elapsed,
    /// then check the caller's role and the operation's phase before running `f`.
    fn administer<T>(
        &mut self,
        operation: Operation,
        caller: &Ctx::Address,
        now: Tick,
        f: impl FnOnce(&mut Self) -> Result<T, Error<Ctx>>,
    ) -> Result<T, Error<Ctx>> {
        self.enforce_deadline(now);

        self.authorize(operation, caller)
            .and_then(|()| self.require_phase(operation))
            .and_then(|()| f(self))
            .inspect_err(|e| warn!(%caller, %now, "{e}"))
    }

    fn authorize(&self, operation: Operation, caller: &Ctx::Address) -> Result<(), Error<Ctx>> {
        if operation.is_administrative() && !self.authority.is_authorized(caller) {
            return Err(Error::AccessDenied {
                operation,
                caller: caller.clone(),
            });
        }

        Ok(())
    }

    fn require_phase(&self, operation: Operation) -> Result<(), Error<Ctx>> {
        let phase = self.state.phase;

        if phase != operation.required_phase() {
            return Err(Error::PhaseViolation { operation, phase });
        }

        Ok(())
    }

    /// Close the vote if its deadline has elapsed at `now`.
    /// Returns whether the vote was closed by this call.
    fn enforce_deadline(&mut self, now: Tick) -> bool {
        if !self.state.deadline_elapsed(now) {
            return false;
        }

        debug!(%now, deadline = ?self.state.deadline, "Deadline elapsed");
        self.apply(Input::DeadlineElapsed)
    }

    fn current_deadline(&self, now: Tick) -> Tick {
        self.state.deadline.unwrap_or(now)
    }

    fn reschedule(&mut self, deadline: Tick) -> Tick {
        self.apply(Input::Reschedule(deadline));
        deadline
    }

    /// Apply the input to the phase state machine and carry out its output.
    /// Returns whether the transition was valid.
    fn apply(&mut self, input: Input) -> bool {
        let transition = self.state.apply(input);

        if !transition.valid {
            debug!(phase = %self.state.phase, "Ignoring invalid transition: {input}");
            return false;
        }

        let previous = self.state.phase;
        self.state = transition.next_state;

        if previous != self.state.phase {
            info!(from = %previous, to = %self.state.phase, "Phase changed");
        }

        match transition.output {
            Some(Output::ScheduleDeadline(deadline)) => {
                info!(%deadline, "Deadline scheduled");
            }
            Some(Output::Finalize(closure)) => self.finalize(closure),
            None => (),
        }

        true
    }

    /// Tally the ballot log and fix the result.
    fn finalize(&mut self, closure: Closure) {
        let outcome = self
            .votes
            .tally()
            .winner()
            .and_then(|id| self.nomination(id))
            .cloned()
            .map_or(Outcome::Undecided, Outcome::Winner);

        info!(
            closed_by = %closure,
            ballots = self.votes.len(),
            %outcome,
            "Voting finished"
        );

        self.outcome = Some(outcome);
        self.closed_by = Some(closure);
    }

    fn reject(
        &self,
        caller: &Ctx::Address,
        nomination: NominationId,
        rejection: Rejection,
    ) -> VoteStatus {
        warn!(voter = %caller, %nomination, "Rejected ballot: {rejection}");
        VoteStatus::Rejected(rejection)
    }
}
