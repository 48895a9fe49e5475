use core::fmt::{Debug, Display};

/// The identity of a caller, as supplied by the environment on every call.
///
/// The engine never inspects an address beyond comparing it, so any
/// totally ordered, printable identifier will do.
pub trait Address
where
    Self: Clone + Debug + Display + Eq + Ord + Send + Sync,
{
}

/// This trait allows to abstract over the various datatypes
/// that are used by the ballot engine.
pub trait Context
where
    Self: Sized + Clone + Send + Sync + 'static,
{
    /// The type of caller identities.
    type Address: Address;
}
