use derive_where::derive_where;

use crate::{Context, NominationId};

/// An immutable record of one accepted vote.
///
/// Ballots carry no sequence number of their own: their position
/// in the ballot log is their sequence number.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct Ballot<Ctx>
where
    Ctx: Context,
{
    pub voter: Ctx::Address,
    pub nomination: NominationId,
}

impl<Ctx> Ballot<Ctx>
where
    Ctx: Context,
{
    pub fn new(voter: Ctx::Address, nomination: NominationId) -> Self {
        Self { voter, nomination }
    }
}
