//! The ballot engine: collects nominations and participants, then runs a
//! single-round plurality vote closing on quorum or on deadline.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod engine;
pub use engine::Engine;

mod error;
pub use error::{Error, Operation};

mod shared;
pub use shared::{SharedEngine, Snapshot};

mod status;
pub use status::{Rejection, VoteStatus};

pub use quorumvote_core_state_machine::output::Closure;
pub use quorumvote_core_votekeeper::{quorum_threshold, Count, Tally};
