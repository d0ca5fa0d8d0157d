//! Label grids: nearest-site assignment over a discrete sampling grid
//!
//! A [`SampleGrid`] fixes which coordinate every cell samples; a
//! [`LabelGrid`] stores, for each cell, the index of the nearest seed.
//!
//! # Layout
//!
//! Labels are stored row-major with shape `(height, width)`. Row 0 samples
//! the minimum y of the extent (the bottom, matching a lower-left plotting
//! origin) and column 0 samples the minimum x.
//!
//! # Strategies
//!
//! All strategies produce bit-identical grids; they differ only in cost.
//!
//! - [`GridStrategy::Scalar`]: one nearest-site scan per cell, O(W·H·N).
//!   The reference implementation.
//! - [`GridStrategy::Batched`]: one squared-distance field per site folded
//!   into a running minimum. Same asymptotic cost but no per-cell scan, so it
//!   is the better choice when W·H·N is large.
//! - `GridStrategy::Indexed` (feature `spatial-index`): kd-tree lookup per
//!   cell, O(W·H·log N).

mod batched;
mod scalar;
#[cfg(feature = "spatial-index")]
mod indexed;

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Extent;
use crate::error::{Result, VoronoiError};
use crate::point::PointSet;

/// How a label grid is computed
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStrategy {
    /// Per-cell scan over every site
    Scalar,
    /// Per-site distance fields folded into a running minimum
    #[default]
    Batched,
    /// Per-cell kd-tree lookup
    #[cfg(feature = "spatial-index")]
    Indexed,
}

impl GridStrategy {
    /// Human-readable name, used in logs and benchmarks
    pub fn name(self) -> &'static str {
        match self {
            GridStrategy::Scalar => "scalar",
            GridStrategy::Batched => "batched",
            #[cfg(feature = "spatial-index")]
            GridStrategy::Indexed => "indexed",
        }
    }
}

/// The sample coordinates of a `width` × `height` grid
///
/// Columns are evenly spaced from `extent.xmin` to `extent.xmax` inclusive,
/// rows from `extent.ymin` to `extent.ymax`. A dimension of 1 samples only
/// the minimum of its axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    extent: Extent,
    width: usize,
    height: usize,
}

impl SampleGrid {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero
    pub fn new(extent: Extent, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "grid dimensions must be positive (got {}x{})",
                width, height
            )));
        }
        Ok(Self {
            extent,
            width,
            height,
        })
    }

    /// Pixel grid: column `c` samples x = c and row `r` samples y = r
    ///
    /// This is the grid for points already normalized onto a canvas.
    pub fn canvas(width: usize, height: usize) -> Result<Self> {
        let extent = Extent {
            xmin: 0.0,
            xmax: width.saturating_sub(1) as f64,
            ymin: 0.0,
            ymax: height.saturating_sub(1) as f64,
        };
        Self::new(extent, width, height)
    }

    /// Grid over the bounding box of `points`, grown by `padding` × span
    ///
    /// Degenerate axes are widened to a unit range, so the grid always
    /// covers the full requested dimension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the padding is negative or the padded box
    /// no longer fits in `f64`.
    pub fn around(points: &PointSet, padding: f64, width: usize, height: usize) -> Result<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "padding must be a non-negative number (got {})",
                padding
            )));
        }
        let extent = Extent::around(&points.bounding_box(), padding);
        if !extent.is_finite() {
            return Err(VoronoiError::InvalidConfig(format!(
                "bounding box padded by {} overflows: {:?}",
                padding,
                extent.as_tuple()
            )));
        }
        Self::new(extent, width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// X coordinate sampled by column `col`
    #[inline]
    pub fn x_at(&self, col: usize) -> f64 {
        linspace_at(self.extent.xmin, self.extent.xmax, self.width, col)
    }

    /// Y coordinate sampled by row `row`
    #[inline]
    pub fn y_at(&self, row: usize) -> f64 {
        linspace_at(self.extent.ymin, self.extent.ymax, self.height, row)
    }

    /// X coordinates of every column
    pub fn xs(&self) -> Vec<f64> {
        (0..self.width).map(|c| self.x_at(c)).collect()
    }

    /// Y coordinates of every row, bottom first
    pub fn ys(&self) -> Vec<f64> {
        (0..self.height).map(|r| self.y_at(r)).collect()
    }
}

fn linspace_at(start: f64, stop: f64, count: usize, i: usize) -> f64 {
    if count <= 1 {
        return start;
    }
    if i + 1 == count {
        return stop;
    }
    let step = (stop - start) / (count - 1) as f64;
    start + i as f64 * step
}

/// Nearest-site labels for every cell of a sampling grid
///
/// Deserialization checks the shape and that every label names a site.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLabelGrid"))]
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGrid {
    width: usize,
    height: usize,
    extent: Extent,
    site_count: usize,
    labels: Vec<usize>,
}

impl LabelGrid {
    /// Label every cell of `grid` with its nearest site
    ///
    /// Exact distance ties go to the lowest site index regardless of
    /// strategy.
    pub fn generate(sites: &PointSet, grid: &SampleGrid, strategy: GridStrategy) -> Self {
        let start = Instant::now();
        let labels = match strategy {
            GridStrategy::Scalar => scalar::label_cells(sites.as_slice(), grid),
            GridStrategy::Batched => batched::label_cells(sites.as_slice(), grid),
            #[cfg(feature = "spatial-index")]
            GridStrategy::Indexed => indexed::label_cells(sites, grid),
        };
        log::debug!(
            "{}x{} label grid over {} sites ({}) in {:.2?}",
            grid.width(),
            grid.height(),
            sites.len(),
            strategy.name(),
            start.elapsed()
        );

        Self {
            width: grid.width(),
            height: grid.height(),
            extent: grid.extent(),
            site_count: sites.len(),
            labels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Coordinate rectangle the grid samples
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of sites the labels refer to
    #[inline]
    pub fn site_count(&self) -> usize {
        self.site_count
    }

    /// Label of the cell at `(row, col)`, row 0 being the bottom
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.labels.get(row * self.width + col).copied()
    }

    /// All labels, row-major from the bottom row
    #[inline]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Rows from bottom to top
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[usize]> + ExactSizeIterator + '_ {
        self.labels.chunks(self.width)
    }

    /// Number of cells assigned to each site
    pub fn region_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.site_count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLabelGrid {
    width: usize,
    height: usize,
    extent: Extent,
    site_count: usize,
    labels: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLabelGrid> for LabelGrid {
    type Error = VoronoiError;

    fn try_from(raw: RawLabelGrid) -> Result<Self> {
        if raw.width == 0 || raw.height == 0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "label grid dimensions must be positive (got {}x{})",
                raw.width, raw.height
            )));
        }
        if raw.labels.len() != raw.width * raw.height {
            return Err(VoronoiError::InvalidConfig(format!(
                "{}x{} label grid holds {} labels",
                raw.width,
                raw.height,
                raw.labels.len()
            )));
        }
        if let Some(&label) = raw.labels.iter().find(|&&l| l >= raw.site_count) {
            return Err(VoronoiError::InvalidConfig(format!(
                "label {} out of range for {} sites",
                label, raw.site_count
            )));
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            extent: raw.extent,
            site_count: raw.site_count,
            labels: raw.labels,
        })
    }
}

/// Label a `width` × `height` pixel canvas with the default strategy
///
/// Column `c`, row `r` samples the point `(c, r)`, so `sites` should already
/// be in canvas coordinates (see [`crate::normalize`]).
pub fn generate(sites: &PointSet, width: usize, height: usize) -> Result<LabelGrid> {
    let grid = SampleGrid::canvas(width, height)?;
    Ok(LabelGrid::generate(sites, &grid, GridStrategy::default()))
}
