use std::cmp::Ordering;

/// Canonical action order: ascending by the action's `Ord` (for board
/// actions: relative index, then target), duplicates removed. Every
/// tie-break in the solvers relies on this order.
#[inline]
pub fn order_actions<A: Ord>(actions: &mut Vec<A>) {
    actions.sort_unstable();
    actions.dedup();
}

/// Sort root candidates best first for diagnostics. Stable, so equal values
/// keep canonical order; unfinished entries (`None`) go last.
pub fn rank_candidates<A>(candidates: &mut [(A, Option<f64>)]) {
    candidates.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
