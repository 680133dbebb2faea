//! Property-based test generators using proptest.
//!
//! Provides strategies for generating states, actions and button
//! signals within the integer range a feed client can represent.

use counterframe_protocol::{Action, State};
use proptest::prelude::*;

/// Largest field value generated (2^53 - 1, the JSON-safe integer limit).
pub const MAX_GENERATED_FIELD: u64 = (1 << 53) - 1;

/// Strategy for a single state field.
pub fn field_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        4 => 0u64..1_000,
        1 => 0u64..=MAX_GENERATED_FIELD,
    ]
}

/// Strategy for arbitrary states (fields are independent).
pub fn state_strategy() -> impl Strategy<Value = State> {
    (field_strategy(), field_strategy(), field_strategy(), field_strategy())
        .prop_map(|(count, incs, decs, clicks)| State::new(count, incs, decs, clicks))
}

/// Strategy for states with `clicks == incs + decs` and `count == incs - decs`.
///
/// These are exactly the states reachable from zero without a decrement
/// at the floor.
pub fn consistent_state_strategy() -> impl Strategy<Value = State> {
    (0u64..1_000_000)
        .prop_flat_map(|incs| (Just(incs), 0..=incs))
        .prop_map(|(incs, decs)| State::new(incs - decs, incs, decs, incs + decs))
}

/// Strategy for states at the floor.
pub fn floor_state_strategy() -> impl Strategy<Value = State> {
    state_strategy().prop_map(|state| State { count: 0, ..state })
}

/// Strategy for actions.
pub fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Increment), Just(Action::Decrement)]
}

/// Strategy for the button signal a client might send, absent included.
pub fn button_index_strategy() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![
        3 => (1u32..=2).prop_map(Some),
        1 => Just(None),
        1 => any::<u32>().prop_map(Some),
    ]
}

/// Strategy for a sequence of button presses.
pub fn press_sequence_strategy(
    min_presses: usize,
    max_presses: usize,
) -> impl Strategy<Value = Vec<Option<u32>>> {
    prop::collection::vec(button_index_strategy(), min_presses..max_presses)
}

/// Case budgets for the property suites.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Inputs `prop_assume!` may discard before the run fails.
    pub max_global_rejects: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_global_rejects: 4096,
        }
    }
}

impl PropTestConfig {
    /// Small budget for in-crate smoke properties.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_global_rejects: 1024,
        }
    }

    /// Budget for properties that sign a token per generated press.
    #[must_use]
    pub fn sequences() -> Self {
        Self {
            cases: 64,
            ..Self::default()
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_global_rejects: self.max_global_rejects,
            ..ProptestConfig::default()
        }
    }
}
