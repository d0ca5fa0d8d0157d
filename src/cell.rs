//! Voronoi Cell Structure
//!
//! A polygonal cell produced by the geometric (bisector) variant.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One seed's region as a polygon
///
/// Each cell carries:
/// - the label of its seed, the same index the label grid uses
/// - the seed position, which lies inside (or on) the polygon of an exact
///   cell; raw cells may miss it
/// - the labels of neighbouring seeds whose bisectors bound the cell
/// - the boundary vertices, ordered counter-clockwise
///
/// Cells are only built when at least three vertices were found, so
/// `vertices.len() >= 3` always holds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    /// Label of the seed (index in the originating point set)
    pub site: usize,

    /// Seed position
    pub center: DVec2,

    /// Labels of adjacent seeds, sorted ascending
    ///
    /// Seeds that only touch this cell at a single vertex are included.
    pub neighbors: Vec<usize>,

    /// Polygon vertices, counter-clockwise
    pub vertices: Vec<DVec2>,
}

impl VoronoiCell {
    pub fn new(site: usize, center: DVec2, neighbors: Vec<usize>, vertices: Vec<DVec2>) -> Self {
        Self {
            site,
            center,
            neighbors,
            vertices,
        }
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn is_neighbor_of(&self, other_site: usize) -> bool {
        self.neighbors.binary_search(&other_site).is_ok()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Polygon area (shoelace formula)
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            twice_area += a.perp_dot(b);
        }
        twice_area * 0.5
    }

    /// Area centroid, or the seed position for a collapsed polygon
    pub fn centroid(&self) -> DVec2 {
        let n = self.vertices.len();
        let area = self.signed_area();
        if n < 3 || area.abs() < 1e-12 {
            return self.center;
        }

        let mut acc = DVec2::ZERO;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            acc += (a + b) * a.perp_dot(b);
        }
        acc / (6.0 * area)
    }

    /// Whether `point` lies inside or on the boundary of the polygon
    pub fn contains(&self, point: DVec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let scale = self
            .vertices
            .iter()
            .fold(1.0_f64, |m, v| m.max((*v - self.center).length_squared()));
        let tolerance = 1e-9 * scale;

        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            (b - a).perp_dot(point - a) >= -tolerance
        })
    }
}
