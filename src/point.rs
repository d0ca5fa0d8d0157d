//! Seed points and the validated point set
//!
//! A site's identity is its position in the [`PointSet`]. That index is the
//! label every grid cell carries, so the set never reorders or filters its
//! points once built.

use glam::DVec2;
use std::fmt::Write as _;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::distance;
use crate::error::{Result, VoronoiError};

/// Minimum number of seeds a diagram needs
pub const MIN_POINTS: usize = 2;

/// A seed resolved to its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    /// Label of this seed (position in the originating point set)
    pub index: usize,
    /// Seed coordinates
    pub position: DVec2,
}

/// An ordered, immutable sequence of at least two finite points
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<DVec2>", into = "Vec<DVec2>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<DVec2>,
}

impl PointSet {
    /// Build a point set, enforcing the size and finiteness invariants
    ///
    /// # Errors
    ///
    /// - `InsufficientPoints` if fewer than [`MIN_POINTS`] points are given
    /// - `NonFiniteCoordinate` if any coordinate is NaN or infinite
    pub fn new(points: Vec<DVec2>) -> Result<Self> {
        if points.len() < MIN_POINTS {
            return Err(VoronoiError::InsufficientPoints {
                required: MIN_POINTS,
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(VoronoiError::NonFiniteCoordinate(index));
        }
        Ok(Self { points })
    }

    /// Number of points (always at least [`MIN_POINTS`])
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; present for API symmetry with slices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Iterate seeds paired with their labels
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(index, &position)| Site { index, position })
    }

    /// Bounding box of all points
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::enclosing(self.points[0], &self.points[1..])
    }

    /// Label of the seed closest to `query` (lowest index on ties)
    #[inline]
    pub fn nearest(&self, query: DVec2) -> usize {
        distance::nearest(query, &self.points)
    }

    /// Serialize back to the `x,y` per-line text format
    ///
    /// Coordinates are written with the shortest representation that reads
    /// back to the same `f64`, so parsing the output yields an equal set.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 16);
        for p in &self.points {
            let _ = writeln!(out, "{},{}", p.x, p.y);
        }
        out
    }

    pub fn into_inner(self) -> Vec<DVec2> {
        self.points
    }
}

impl Index<usize> for PointSet {
    type Output = DVec2;

    fn index(&self, index: usize) -> &DVec2 {
        &self.points[index]
    }
}

impl TryFrom<Vec<DVec2>> for PointSet {
    type Error = VoronoiError;

    fn try_from(points: Vec<DVec2>) -> Result<Self> {
        PointSet::new(points)
    }
}

impl From<PointSet> for Vec<DVec2> {
    fn from(set: PointSet) -> Self {
        set.points
    }
}

impl FromStr for PointSet {
    type Err = VoronoiError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_points(s)
    }
}
