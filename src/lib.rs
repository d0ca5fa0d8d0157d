//! Discrete Voronoi diagrams over 2-D point sets
//!
//! Reads seed points from text, labels every cell of a sampling grid with
//! its nearest seed, and optionally builds polygonal cells from pairwise
//! perpendicular bisectors.
//!
//! # Quick Start
//!
//! ```rust
//! use grid_voronoi::*;
//!
//! // Seeds normally come from `read_points(path)`
//! let points: PointSet = "2,4\n5.3,4.5\n18,29\n12.5,23.7".parse().unwrap();
//!
//! let config = DiagramConfigBuilder::new()
//!     .size(120, 80).unwrap()
//!     .margin(8.0).unwrap()
//!     .build().unwrap();
//!
//! let diagram = VoronoiDiagram::generate(points, config).unwrap();
//! for row in diagram.grid().rows().rev() {
//!     // Render top row first
//!     assert_eq!(row.len(), 120);
//! }
//!
//! let cells = diagram.cells();
//! assert_eq!(cells.len(), 4);
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables the kd-tree grid strategy and [`SpatialIndex`]
//! - `serde`: Enables serialization support for configuration, point sets, grids and cells

// Modules
pub mod error;
pub mod bounds;
pub mod point;
pub mod parser;
pub mod distance;
pub mod grid;
pub mod normalize;
pub mod bisector;
pub mod cell;
pub mod sampling;
pub mod config;
pub mod diagram;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use bounds::{BoundingBox, Extent};
pub use point::{PointSet, Site, MIN_POINTS};
pub use parser::{parse_points, read_points};
pub use distance::{distance, distance_squared, nearest};
pub use grid::{generate, GridStrategy, LabelGrid, SampleGrid};
pub use normalize::normalize;
pub use bisector::{bisector, intersect_lines, BisectorCellBuilder};
pub use cell::VoronoiCell;
pub use sampling::random_points;
pub use config::{DiagramConfig, DiagramConfigBuilder, Sampling};
pub use diagram::VoronoiDiagram;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
