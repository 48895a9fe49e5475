use crate::output::Output;
use crate::state::State;

/// The result of applying an input to a state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next_state: State,
    pub output: Option<Output>,
    pub valid: bool,
}

impl Transition {
    pub fn to(next_state: State) -> Self {
        Self {
            next_state,
            output: None,
            valid: true,
        }
    }

    pub fn invalid(next_state: State) -> Self {
        Self {
            next_state,
            output: None,
            valid: false,
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }
}
