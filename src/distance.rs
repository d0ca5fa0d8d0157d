//! Distance metrics and the nearest-site classifier
//!
//! Classification only needs relative ordering, so the hot path compares
//! squared distances. [`distance`] takes the square root for callers that
//! need an actual metric value.

use glam::DVec2;

/// Squared Euclidean distance `(ax-bx)² + (ay-by)²`
///
/// Written out term by term so every strategy in [`crate::grid`] produces
/// bit-identical values for the same pair of points.
#[inline]
pub fn distance_squared(a: DVec2, b: DVec2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance `sqrt(dx² + dy²)`
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Index of the site closest to `query`
///
/// Exact ties go to the lowest index: a later site only wins when it is
/// strictly closer. Returns 0 for an empty slice.
pub fn nearest(query: DVec2, sites: &[DVec2]) -> usize {
    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;

    for (index, &site) in sites.iter().enumerate() {
        let d = distance_squared(query, site);
        if d < best_dist {
            best_dist = d;
            best_index = index;
        }
    }

    best_index
}
