//! Golden end-to-end scenarios.
//!
//! Each scenario fixes the incoming state (or its absence), the pressed
//! button, and the exact state and controls the next frame must carry.

use counterframe_protocol::State;
use serde::{Deserialize, Serialize};

/// A single request and its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier for this scenario.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// State carried by the presented token; `None` means no token.
    pub incoming: Option<State>,
    /// Button index sent by the client.
    pub button_index: Option<u32>,
    /// State the returned token must decode to.
    pub expected: State,
    /// Labels of the controls the returned frame must declare.
    pub expected_buttons: Vec<String>,
}

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| (*l).to_string()).collect()
}

/// The reference request/response scenarios.
pub fn golden_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "first_interaction".into(),
            description: "No token presented starts from zero and increments".into(),
            incoming: None,
            button_index: Some(1),
            expected: State::new(1, 1, 0, 1),
            expected_buttons: labels(&["+", "-"]),
        },
        Scenario {
            id: "decrement_to_floor".into(),
            description: "Decrement from one lands on the floor".into(),
            incoming: Some(State::new(1, 1, 0, 1)),
            button_index: Some(2),
            expected: State::new(0, 1, 1, 2),
            expected_buttons: labels(&["+"]),
        },
        Scenario {
            id: "decrement_signal_at_floor".into(),
            description: "Button 2 at the floor resolves to an increment".into(),
            incoming: Some(State::new(0, 1, 1, 2)),
            button_index: Some(2),
            expected: State::new(1, 2, 1, 3),
            expected_buttons: labels(&["+", "-"]),
        },
        Scenario {
            id: "increment_above_floor".into(),
            description: "Button 1 above the floor increments".into(),
            incoming: Some(State::new(5, 7, 2, 9)),
            button_index: Some(1),
            expected: State::new(6, 8, 2, 10),
            expected_buttons: labels(&["+", "-"]),
        },
        Scenario {
            id: "missing_button_above_floor".into(),
            description: "An absent button index above the floor increments".into(),
            incoming: Some(State::new(5, 7, 2, 9)),
            button_index: None,
            expected: State::new(6, 8, 2, 10),
            expected_buttons: labels(&["+", "-"]),
        },
        Scenario {
            id: "out_of_range_button".into(),
            description: "An out-of-range button index increments".into(),
            incoming: Some(State::new(5, 7, 2, 9)),
            button_index: Some(3),
            expected: State::new(6, 8, 2, 10),
            expected_buttons: labels(&["+", "-"]),
        },
        Scenario {
            id: "decrement_above_floor".into(),
            description: "Button 2 above the floor decrements".into(),
            incoming: Some(State::new(5, 7, 2, 9)),
            button_index: Some(2),
            expected: State::new(4, 7, 3, 10),
            expected_buttons: labels(&["+", "-"]),
        },
    ]
}
