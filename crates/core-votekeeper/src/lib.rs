//! Record ballots and tally them.

#![no_std]
#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

extern crate alloc;

pub mod count;
pub mod keeper;

pub use count::Tally;
pub use keeper::{RecordBallotError, VoteKeeper};

/// Number of ballots.
pub type Count = u64;

/// Represents the different vote thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Threshold {
    /// Not enough ballots have been cast yet
    Unreached,
    /// A strict majority of the eligible voters has cast a ballot
    Quorum,
}

/// Number of ballots needed for a quorum out of `eligible` voters,
/// ie. `floor(eligible / 2) + 1`.
pub fn quorum_threshold(eligible: Count) -> Count {
    eligible / 2 + 1
}

/// Returns whether or not `cast >= floor(eligible / 2) + 1`.
pub fn is_quorum(cast: Count, eligible: Count) -> bool {
    cast >= quorum_threshold(eligible)
}
