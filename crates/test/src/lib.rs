#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]

mod address;
mod context;

pub mod utils;

pub use crate::address::*;
pub use crate::context::*;
