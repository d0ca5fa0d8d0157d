//! Reproducible random seed sets
//!
//! Uses a ChaCha8 generator so the same seed yields the same points on every
//! platform. Handy for demos, benchmarks and property-style tests.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bounds::Extent;
use crate::error::Result;
use crate::point::PointSet;

/// Draw `count` points uniformly inside `extent`
///
/// # Errors
///
/// Returns `InsufficientPoints` when `count` is below two.
///
/// # Example
///
/// ```
/// use grid_voronoi::*;
///
/// let extent = Extent::new(0.0, 100.0, 0.0, 100.0).unwrap();
/// let a = random_points(20, &extent, 42).unwrap();
/// let b = random_points(20, &extent, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_points(count: usize, extent: &Extent, seed: u64) -> Result<PointSet> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let points = (0..count)
        .map(|_| {
            DVec2::new(
                sample_axis(&mut rng, extent.xmin, extent.xmax),
                sample_axis(&mut rng, extent.ymin, extent.ymax),
            )
        })
        .collect();

    PointSet::new(points)
}

fn sample_axis(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}
