use quorumvote_core_types::Context;

use crate::address::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TestContext;

impl TestContext {
    pub fn new() -> Self {
        Self
    }
}

impl Context for TestContext {
    type Address = Address;
}
