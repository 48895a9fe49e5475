use alloc::collections::BTreeSet;

use derive_where::derive_where;

use crate::Context;

/// Decides whether a caller may administer the engine,
/// ie. register nominations and participants and manage the voting lifecycle.
pub trait Authority<Ctx>
where
    Ctx: Context,
{
    /// Whether `caller` is authorized to administer the engine.
    fn is_authorized(&self, caller: &Ctx::Address) -> bool;
}

/// A single coordinator identity, fixed at construction.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct Coordinator<Ctx>
where
    Ctx: Context,
{
    address: Ctx::Address,
}

impl<Ctx> Coordinator<Ctx>
where
    Ctx: Context,
{
    pub fn new(address: Ctx::Address) -> Self {
        Self { address }
    }

    pub fn address(&self) -> &Ctx::Address {
        &self.address
    }
}

impl<Ctx> Authority<Ctx> for Coordinator<Ctx>
where
    Ctx: Context,
{
    fn is_authorized(&self, caller: &Ctx::Address) -> bool {
        caller == &self.address
    }
}

/// A fixed set of identities, any of which may administer the engine.
#[derive_where(Clone, Debug, PartialEq, Eq)]
pub struct Committee<Ctx>
where
    Ctx: Context,
{
    members: BTreeSet<Ctx::Address>,
}

impl<Ctx> Committee<Ctx>
where
    Ctx: Context,
{
    pub fn new(members: impl IntoIterator<Item = Ctx::Address>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> impl Iterator<Item = &Ctx::Address> {
        self.members.iter()
    }
}

impl<Ctx> Authority<Ctx> for Committee<Ctx>
where
    Ctx: Context,
{
    fn is_authorized(&self, caller: &Ctx::Address) -> bool {
        self.members.contains(caller)
    }
}
