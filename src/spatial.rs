//! Spatial indexing for fast position-to-site lookups
//!
//! This module is only available with the `spatial-index` feature.

use glam::DVec2;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

use crate::distance::distance_squared;
use crate::point::PointSet;

/// Wrapper around a KD-tree for nearest-site queries
///
/// Answers the same question as [`crate::distance::nearest`] in O(log n)
/// instead of O(n), including the tie rule: when several sites are exactly
/// equally close, the lowest index is returned.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n), plus a short scan over sites tied with the nearest one
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
    sites: Vec<DVec2>,
}

impl SpatialIndex {
    /// Build a spatial index over the seeds of `sites`
    ///
    /// # Example
    ///
    /// ```
    /// use grid_voronoi::*;
    ///
    /// let sites: PointSet = "0,0\n10,0\n0,10".parse().unwrap();
    /// let index = SpatialIndex::new(&sites);
    /// assert_eq!(index.find_nearest(DVec2::new(9.0, 1.0)), 1);
    /// ```
    pub fn new(sites: &PointSet) -> Self {
        let points: Vec<[f64; 2]> = sites.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
            sites: sites.as_slice().to_vec(),
        }
    }

    /// Number of indexed sites
    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Find the label of the site nearest to `position`
    ///
    /// The tree may report any of several equidistant sites, so every site
    /// within the reported distance is re-measured exactly and the lowest
    /// index among the closest wins.
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let query = [position.x, position.y];
        let best = self.tree.nearest_one::<SquaredEuclidean>(&query);

        let mut best_index = best.item as usize;
        let mut best_dist = distance_squared(position, self.sites[best_index]);

        // Slack so rounding differences inside the tree never hide a tie
        let radius = best.distance + best.distance * 1e-9 + f64::EPSILON;
        for candidate in self
            .tree
            .within_unsorted::<SquaredEuclidean>(&query, radius)
        {
            let index = candidate.item as usize;
            let d = distance_squared(position, self.sites[index]);
            if d < best_dist || (d == best_dist && index < best_index) {
                best_dist = d;
                best_index = index;
            }
        }

        best_index
    }
}
