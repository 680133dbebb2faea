//! Counter state and the transition engine.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// The counter state carried inside a token.
///
/// Field order matches the JSON handed to the image renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    /// Current counter value. Never negative.
    pub count: u64,
    /// Total increments performed.
    pub incs: u64,
    /// Total decrements performed.
    pub decs: u64,
    /// Total actions processed.
    pub clicks: u64,
}

impl State {
    /// Creates a state from its four fields.
    pub fn new(count: u64, incs: u64, decs: u64, clicks: u64) -> Self {
        Self {
            count,
            incs,
            decs,
            clicks,
        }
    }

    /// The state used when no token is presented.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Returns true if the counter is at its floor.
    pub fn is_at_floor(&self) -> bool {
        self.count == 0
    }

    /// Derives the next state for `action`.
    ///
    /// A decrement at the floor leaves `count` and `decs` untouched but
    /// still consumes a click.
    #[must_use]
    pub fn transition(&self, action: Action) -> State {
        let mut next = *self;
        match action {
            Action::Increment => {
                next.count = next.count.saturating_add(1);
                next.incs = next.incs.saturating_add(1);
            }
            Action::Decrement if next.count > 0 => {
                next.count -= 1;
                next.decs = next.decs.saturating_add(1);
            }
            Action::Decrement => {}
        }
        next.clicks = next.clicks.saturating_add(1);
        next
    }
}
