//! Completion tracking: compares observed-and-reachable cells against the
//! total reachable set to decide whether exploration is done.

use slam_env::ReachableMask;
use slam_map::SharedMap;

/// `(known_reachable, total_reachable, progress_ratio)`.
///
/// An empty reachable set (nothing to explore) reports `1.0` — immediate
/// completion, per §4.2's "empty mask is valid" note.
pub fn progress(shared: &SharedMap, reachable: &ReachableMask) -> (usize, usize, f64) {
    let total = reachable.total_reachable();
    let known = shared.known_reachable_count(reachable);
    let ratio = if total == 0 { 1.0 } else { known as f64 / total as f64 };
    (known, total, ratio)
}

/// Exploration is complete once every reachable cell has been observed.
pub fn is_complete(progress_ratio: f64) -> bool {
    progress_ratio >= 1.0
}
