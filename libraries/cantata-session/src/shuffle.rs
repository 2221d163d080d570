//! Queue randomization

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Shuffle the id queue in place (Fisher-Yates).
///
/// Called by the navigator on every traversal while the shuffle flag is
/// set, so the mapping from index to physical track changes between
/// calls. That per-call reshuffle is existing behavior the rest of the
/// session logic is built around.
pub fn shuffle_queue(queue: &mut [String]) {
    let mut rng = thread_rng();
    queue.shuffle(&mut rng);
}
