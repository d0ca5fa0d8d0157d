//! Diagram Configuration and Builder
//!
//! This module provides the configuration types for the diagram pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};
use crate::grid::GridStrategy;

/// Default grid width and height in cells
pub const DEFAULT_SIZE: usize = 500;

/// Default canvas margin in cells
pub const DEFAULT_MARGIN: f64 = 30.0;

/// Where the label grid samples relative to the seeds
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    /// Normalize seeds onto the pixel range `0..=size - 1`, keeping `margin`
    /// cells clear on every side, and sample integer pixel coordinates
    Canvas {
        /// Padding between the outermost seeds and the canvas edge
        margin: f64,
    },
    /// Keep seeds in their own coordinates and sample their bounding box,
    /// grown by `padding` times its span on every side
    BoundingBox {
        /// Fraction of the bounding box span added around it
        padding: f64,
    },
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling::Canvas {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Configuration for a diagram computation
///
/// # Example
///
/// ```rust
/// use grid_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .size(200, 100)
///     .unwrap()
///     .margin(10.0)
///     .unwrap()
///     .strategy(GridStrategy::Scalar)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width, 200);
/// assert_eq!(config.sampling, Sampling::Canvas { margin: 10.0 });
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Number of grid columns
    pub width: usize,

    /// Number of grid rows
    pub height: usize,

    /// How seeds map onto the grid
    pub sampling: Sampling,

    /// Label grid algorithm
    ///
    /// Every strategy yields the same grid; only the running time differs.
    pub strategy: GridStrategy,

    /// Whether polygon cells are clipped to the grid extent
    ///
    /// Unclipped cells on the convex hull of the seeds are open and usually
    /// absent.
    pub clip_cells: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            sampling: Sampling::default(),
            strategy: GridStrategy::default(),
            clip_cells: true,
        }
    }
}

/// Builder for creating DiagramConfig with validation
///
/// Defaults:
/// - size: 500 × 500
/// - sampling: canvas with a 30-cell margin
/// - strategy: batched
/// - clip_cells: true
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    config: DiagramConfig,
}

impl DiagramConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DiagramConfig::default(),
        }
    }

    /// Set the grid size in cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero
    pub fn size(mut self, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "grid size must be positive (got {}x{})",
                width, height
            )));
        }
        self.config.width = width;
        self.config.height = height;
        Ok(self)
    }

    /// Sample a normalized canvas with the given margin
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the margin is negative or not finite
    pub fn margin(mut self, margin: f64) -> Result<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "margin must be >= 0 (got {})",
                margin
            )));
        }
        self.config.sampling = Sampling::Canvas { margin };
        Ok(self)
    }

    /// Sample the seeds' own bounding box, grown by `padding` × span
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the padding is negative or not finite
    pub fn padding(mut self, padding: f64) -> Result<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "padding must be >= 0 (got {})",
                padding
            )));
        }
        self.config.sampling = Sampling::BoundingBox { padding };
        Ok(self)
    }

    pub fn strategy(mut self, strategy: GridStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn clip_cells(mut self, clip: bool) -> Self {
        self.config.clip_cells = clip;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if canvas sampling is asked for on a grid
    /// narrower than two cells, or if its margin leaves no room inside the
    /// pixel range `0..=size - 1` (twice the margin exceeds it).
    pub fn build(self) -> Result<DiagramConfig> {
        if let Sampling::Canvas { margin } = self.config.sampling {
            let smallest = self.config.width.min(self.config.height);
            if smallest < 2 {
                return Err(VoronoiError::InvalidConfig(format!(
                    "canvas sampling needs at least 2x2 cells (got {}x{})",
                    self.config.width, self.config.height
                )));
            }
            if 2.0 * margin > (smallest - 1) as f64 {
                return Err(VoronoiError::InvalidConfig(format!(
                    "margin {} leaves no room on a {}x{} grid",
                    margin, self.config.width, self.config.height
                )));
            }
        }
        Ok(self.config)
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
