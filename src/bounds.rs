//! Axis-aligned bounds of a point set and the sampling extent derived from them

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Minimal axis-aligned rectangle enclosing a set of seeds
///
/// A degenerate axis (every point shares the coordinate) keeps its zero
/// width in `min`/`max` but reports a unit span, so callers dividing by the
/// span never divide by zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Compute the bounding box of `points`, or `None` for an empty slice
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::enclosing(*first, rest))
    }

    /// Bounding box of `first` and every point in `rest`
    pub(crate) fn enclosing(first: DVec2, rest: &[DVec2]) -> Self {
        let init = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        rest.iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        })
    }

    /// True when every point shares the same x coordinate
    #[inline]
    pub fn is_degenerate_x(&self) -> bool {
        self.max_x <= self.min_x
    }

    /// True when every point shares the same y coordinate
    #[inline]
    pub fn is_degenerate_y(&self) -> bool {
        self.max_y <= self.min_y
    }

    /// Width of the box, or 1.0 on a degenerate axis
    #[inline]
    pub fn span_x(&self) -> f64 {
        if self.is_degenerate_x() {
            1.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Height of the box, or 1.0 on a degenerate axis
    #[inline]
    pub fn span_y(&self) -> f64 {
        if self.is_degenerate_y() {
            1.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Bottom-left corner
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.min_x, self.min_y)
    }

    /// Top-right corner
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.max_x, self.max_y)
    }
}

/// The coordinate rectangle a label grid samples
///
/// This is the `(xmin, xmax, ymin, ymax)` tuple a renderer needs to place a
/// label grid back into point coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extent {
    /// Create an extent, rejecting non-finite or inverted ranges
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if ![xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite()) {
            return Err(VoronoiError::InvalidConfig(format!(
                "extent must be finite (got x {}..{}, y {}..{})",
                xmin, xmax, ymin, ymax
            )));
        }
        if xmin > xmax || ymin > ymax {
            return Err(VoronoiError::InvalidConfig(format!(
                "extent is inverted (got x {}..{}, y {}..{})",
                xmin, xmax, ymin, ymax
            )));
        }
        Ok(Self { xmin, xmax, ymin, ymax })
    }

    /// Grow a bounding box by `padding` times its span on every side
    ///
    /// A degenerate axis is first widened to a unit range centred on the
    /// shared coordinate, so the extent never collapses to a line.
    pub fn around(bounds: &BoundingBox, padding: f64) -> Self {
        let (xmin, xmax) = padded_axis(bounds.min_x, bounds.max_x, padding);
        let (ymin, ymax) = padded_axis(bounds.min_y, bounds.max_y, padding);
        Self { xmin, xmax, ymin, ymax }
    }

    /// Whether every bound is a finite number
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.xmin.is_finite()
            && self.xmax.is_finite()
            && self.ymin.is_finite()
            && self.ymax.is_finite()
    }

    /// `(xmin, xmax, ymin, ymax)`
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether `p` lies inside the extent, allowing `tolerance` slack
    pub fn contains(&self, p: DVec2, tolerance: f64) -> bool {
        p.x >= self.xmin - tolerance
            && p.x <= self.xmax + tolerance
            && p.y >= self.ymin - tolerance
            && p.y <= self.ymax + tolerance
    }

    /// Corners in counter-clockwise order starting at the bottom-left
    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::new(self.xmin, self.ymin),
            DVec2::new(self.xmax, self.ymin),
            DVec2::new(self.xmax, self.ymax),
            DVec2::new(self.xmin, self.ymax),
        ]
    }
}

fn padded_axis(min: f64, max: f64, padding: f64) -> (f64, f64) {
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, min + 0.5)
    };
    let pad = padding * (hi - lo);
    (lo - pad, hi + pad)
}
