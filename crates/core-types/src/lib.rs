//! Common data types and abstractions for the quorumvote ballot engine.

#![no_std]
#![forbid(unsafe_code)]
#![deny(unused_crate_dependencies, trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

extern crate alloc;

mod authority;
mod ballot;
mod context;
mod nomination;
mod outcome;
mod params;
mod participant;
mod phase;
mod tick;

pub use authority::{Authority, Committee, Coordinator};
pub use ballot::Ballot;
pub use context::{Address, Context};
pub use nomination::{Nomination, NominationId};
pub use outcome::Outcome;
pub use params::{Params, RegistrationCount, DEFAULT_VOTING_PERIOD};
pub use participant::Participant;
pub use phase::Phase;
pub use tick::Tick;
