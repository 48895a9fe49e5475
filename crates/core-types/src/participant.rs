use alloc::string::String;

use derive_where::derive_where;

use crate::Context;

/// An identity allowed to cast exactly one ballot.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct Participant<Ctx>
where
    Ctx: Context,
{
    pub address: Ctx::Address,
    pub name: String,
    pub has_voted: bool,
}

impl<Ctx> Participant<Ctx>
where
    Ctx: Context,
{
    /// A freshly registered participant, who has not voted yet.
    pub fn new(address: Ctx::Address, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            has_voted: false,
        }
    }
}
