//! Phase state machine of the ballot engine.
//!
//! The state machine is pure: it never looks at the clock nor at the ballots.
//! The engine feeds it inputs and carries out the outputs it returns.

#![no_std]
#![forbid(unsafe_code)]
#![deny(unused_crate_dependencies, trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

pub mod input;
pub mod output;
pub mod state;
pub mod state_machine;
pub mod transition;
