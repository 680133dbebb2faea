//! Actions and the button-index resolver.

use crate::state::State;
use std::fmt;

/// Button index that resolves to a decrement when the counter is above zero.
///
/// Button indices are 1-based positions of the rendered controls.
pub const DECREMENT_BUTTON_INDEX: u32 = 2;

/// The operation applied to the state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add one to the counter.
    Increment,
    /// Subtract one from the counter, floored at zero.
    Decrement,
}

impl Action {
    /// Returns the label of the control that triggers this action.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Increment => "+",
            Action::Decrement => "-",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Increment => f.write_str("increment"),
            Action::Decrement => f.write_str("decrement"),
        }
    }
}

/// Resolves the pressed button against the incoming state.
///
/// Only "+" is rendered at the floor, so every signal means increment
/// there. Above the floor, only [`DECREMENT_BUTTON_INDEX`] decrements.
pub fn resolve_action(state: &State, button_index: Option<u32>) -> Action {
    if state.is_at_floor() {
        return Action::Increment;
    }
    match button_index {
        Some(DECREMENT_BUTTON_INDEX) => Action::Decrement,
        _ => Action::Increment,
    }
}
