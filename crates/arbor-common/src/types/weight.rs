//! Edge weights and the "infinity" sentinel.

/// Signed edge weight. Negative values are only meaningful to algorithms
/// that document support for them (Bellman-Ford, Floyd-Warshall).
pub type Weight = i64;

/// Sentinel meaning "unreachable" in distance arrays and "no edge" in
/// weighted adjacency matrices.
pub const INFINITY: Weight = Weight::MAX;

/// Returns true if `weight` is the [`INFINITY`] sentinel.
#[inline]
#[must_use]
pub const fn is_infinite(weight: Weight) -> bool {
    weight == INFINITY
}

/// Extends a tentative distance by an edge weight.
///
/// [`INFINITY`] is absorbing on either side, and finite sums clamp instead of
/// wrapping, so an overflowing sum can never look shorter than a real path.
#[inline]
#[must_use]
pub const fn saturating_distance(distance: Weight, weight: Weight) -> Weight {
    if is_infinite(distance) || is_infinite(weight) {
        return INFINITY;
    }
    distance.saturating_add(weight)
}
