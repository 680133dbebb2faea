//! Benchmark utilities.

use counterframe_protocol::State;
use rand::Rng;

/// Generates `count` random states with fields below `max`.
pub fn random_states(count: usize, max: u64) -> Vec<State> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let incs = rng.gen_range(0..max);
            let decs = rng.gen_range(0..=incs);
            State::new(incs - decs, incs, decs, incs + decs)
        })
        .collect()
}
