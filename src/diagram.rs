//! VoronoiDiagram main structure

use std::path::Path;
use std::time::Instant;

use glam::DVec2;

use crate::bisector::BisectorCellBuilder;
use crate::bounds::Extent;
use crate::cell::VoronoiCell;
use crate::config::{DiagramConfig, Sampling};
use crate::error::Result;
use crate::grid::{LabelGrid, SampleGrid};
use crate::normalize::normalize;
use crate::parser::read_points;
use crate::point::PointSet;

/// A discrete Voronoi diagram: seeds plus their label grid
///
/// The diagram keeps both the seeds as given and the seeds in grid space.
/// With [`Sampling::Canvas`] these differ (seeds are normalized onto the
/// canvas first); with [`Sampling::BoundingBox`] they are the same.
///
/// # Examples
///
/// ```
/// use grid_voronoi::*;
///
/// let points: PointSet = "2,4\n5.3,4.5\n18,29\n12.5,23.7".parse().unwrap();
/// let config = DiagramConfigBuilder::new()
///     .size(100, 100)
///     .unwrap()
///     .margin(10.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let diagram = VoronoiDiagram::generate(points, config).unwrap();
/// assert_eq!(diagram.grid().shape(), (100, 100));
/// assert_eq!(diagram.label_at(10, 10), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    /// Configuration used to build this diagram
    config: DiagramConfig,

    /// Seeds as supplied
    points: PointSet,

    /// Seeds in the coordinates the grid samples
    grid_points: PointSet,

    /// Nearest-seed label of every grid cell
    grid: LabelGrid,
}

impl VoronoiDiagram {
    /// Build the label grid for `points` according to `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not fit the grid
    /// (zero dimensions, oversized margin, negative padding).
    pub fn generate(points: PointSet, config: DiagramConfig) -> Result<Self> {
        let start = Instant::now();

        let (grid_points, sample) = match config.sampling {
            Sampling::Canvas { margin } => {
                // Pixel centres run from 0 to size - 1
                let canvas = normalize(
                    &points,
                    config.width.saturating_sub(1) as f64,
                    config.height.saturating_sub(1) as f64,
                    margin,
                )?;
                (canvas, SampleGrid::canvas(config.width, config.height)?)
            }
            Sampling::BoundingBox { padding } => {
                let sample = SampleGrid::around(&points, padding, config.width, config.height)?;
                (points.clone(), sample)
            }
        };

        let grid = LabelGrid::generate(&grid_points, &sample, config.strategy);

        log::debug!(
            "diagram of {} seeds on {}x{} grid in {:.2?}",
            points.len(),
            config.width,
            config.height,
            start.elapsed()
        );

        Ok(Self {
            config,
            points,
            grid_points,
            grid,
        })
    }

    /// Read seeds from a text file and build their diagram
    ///
    /// # Errors
    ///
    /// Any error from [`read_points`] or [`VoronoiDiagram::generate`].
    pub fn from_file<P: AsRef<Path>>(path: P, config: DiagramConfig) -> Result<Self> {
        let points = read_points(path)?;
        Self::generate(points, config)
    }

    #[inline]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Seeds as supplied
    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Seeds in grid coordinates
    #[inline]
    pub fn grid_points(&self) -> &PointSet {
        &self.grid_points
    }

    #[inline]
    pub fn grid(&self) -> &LabelGrid {
        &self.grid
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.points.len()
    }

    /// Rectangle covered by the grid, in grid coordinates
    #[inline]
    pub fn extent(&self) -> Extent {
        self.grid.extent()
    }

    /// Label of the grid cell at `(row, col)`, row 0 being the bottom
    #[inline]
    pub fn label_at(&self, row: usize, col: usize) -> Option<usize> {
        self.grid.get(row, col)
    }

    /// Nearest seed to an arbitrary position in grid coordinates
    ///
    /// Unlike [`label_at`](Self::label_at) this is exact rather than sampled.
    pub fn site_at(&self, position: DVec2) -> usize {
        self.grid_points.nearest(position)
    }

    /// Polygonal cells of the seeds, in grid coordinates
    ///
    /// Cells hold exact Voronoi vertices. When `clip_cells` is set, cells are
    /// clipped to [`extent`](Self::extent), which contains every seed, so
    /// each seed gets one. Otherwise only bounded cells are returned.
    pub fn cells(&self) -> Vec<VoronoiCell> {
        let builder = if self.config.clip_cells {
            BisectorCellBuilder::clipped(self.extent())
        } else {
            BisectorCellBuilder::new().exact()
        };
        builder.cells(&self.grid_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagramConfigBuilder;
    use crate::grid::GridStrategy;

    fn scenario() -> PointSet {
        "2,4\n5.3,4.5\n18,29\n12.5,23.7".parse().unwrap()
    }

    #[test]
    fn test_canvas_diagram() {
        let config = DiagramConfigBuilder::new()
            .size(200, 150)
            .unwrap()
            .margin(20.0)
            .unwrap()
            .build()
            .unwrap();

        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        assert_eq!(diagram.site_count(), 4);
        assert_eq!(diagram.grid().shape(), (150, 200));
        assert_eq!(diagram.extent().as_tuple(), (0.0, 199.0, 0.0, 149.0));
        assert_eq!(diagram.points(), &scenario());

        // Extremes land on the margins of the pixel range
        assert_eq!(diagram.grid_points()[0], DVec2::new(20.0, 20.0));
        assert_eq!(diagram.grid_points()[2], DVec2::new(179.0, 129.0));

        assert_eq!(diagram.label_at(0, 0), Some(0));
        assert_eq!(diagram.label_at(149, 199), Some(2));
        assert_eq!(diagram.label_at(150, 0), None);
    }

    #[test]
    fn test_bounding_box_diagram() {
        let config = DiagramConfigBuilder::new()
            .size(40, 40)
            .unwrap()
            .padding(0.1)
            .unwrap()
            .build()
            .unwrap();

        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        assert_eq!(diagram.grid_points(), diagram.points());
        let extent = diagram.extent();
        assert!((extent.xmin - 0.4).abs() < 1e-12);
        assert!((extent.xmax - 19.6).abs() < 1e-12);
        assert!((extent.ymin - 1.5).abs() < 1e-12);
        assert!((extent.ymax - 31.5).abs() < 1e-12);

        let sizes = diagram.grid().region_sizes();
        assert!(sizes.iter().all(|&n| n > 0), "{:?}", sizes);
    }

    #[test]
    fn test_strategy_does_not_change_grid() {
        let build = |strategy| {
            let config = DiagramConfigBuilder::new()
                .size(60, 60)
                .unwrap()
                .margin(5.0)
                .unwrap()
                .strategy(strategy)
                .build()
                .unwrap();
            VoronoiDiagram::generate(scenario(), config).unwrap()
        };

        let scalar = build(GridStrategy::Scalar);
        let batched = build(GridStrategy::Batched);
        assert_eq!(scalar.grid(), batched.grid());
    }

    #[test]
    fn test_site_at_matches_labels() {
        let config = DiagramConfigBuilder::new()
            .size(50, 50)
            .unwrap()
            .margin(5.0)
            .unwrap()
            .build()
            .unwrap();
        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        for row in (0..50).step_by(7) {
            for col in (0..50).step_by(7) {
                let position = DVec2::new(col as f64, row as f64);
                assert_eq!(diagram.label_at(row, col), Some(diagram.site_at(position)));
            }
        }
    }

    #[test]
    fn test_clipped_cells_cover_every_seed() {
        let config = DiagramConfigBuilder::new()
            .size(100, 100)
            .unwrap()
            .margin(10.0)
            .unwrap()
            .build()
            .unwrap();
        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        let cells = diagram.cells();
        assert_eq!(cells.len(), 4);

        let total: f64 = cells.iter().map(|c| c.area()).sum();
        let extent = diagram.extent();
        assert!((total - extent.width() * extent.height()).abs() < 1e-6);

        for cell in &cells {
            assert!(cell.contains(diagram.grid_points()[cell.site]));
        }
    }

    fn assert_cells_tile(diagram: &VoronoiDiagram) {
        let cells = diagram.cells();
        assert_eq!(cells.len(), diagram.site_count());

        let extent = diagram.extent();
        let total: f64 = cells.iter().map(|c| c.area()).sum();
        assert!(
            (total - extent.width() * extent.height()).abs() < 1e-6 * total.max(1.0),
            "total area {}",
            total
        );
        for cell in &cells {
            let seed = diagram.grid_points()[cell.site];
            assert!(extent.contains(seed, 0.0), "seed {:?} outside grid", seed);
            assert!(cell.contains(seed), "cell {} misses its seed", cell.site);
        }
    }

    #[test]
    fn test_zero_margin_cells() {
        let config = DiagramConfigBuilder::new()
            .size(20, 20)
            .unwrap()
            .margin(0.0)
            .unwrap()
            .build()
            .unwrap();
        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        assert_eq!(diagram.grid_points()[0], DVec2::new(0.0, 0.0));
        assert_eq!(diagram.grid_points()[2], DVec2::new(19.0, 19.0));
        assert_eq!(diagram.label_at(19, 19), Some(2));
        assert_cells_tile(&diagram);
    }

    #[test]
    fn test_zero_padding_cells() {
        let config = DiagramConfigBuilder::new()
            .size(16, 16)
            .unwrap()
            .padding(0.0)
            .unwrap()
            .build()
            .unwrap();

        let corner: PointSet = "0,0\n1,0\n0,1".parse().unwrap();
        let diagram = VoronoiDiagram::generate(corner, config).unwrap();
        assert_eq!(diagram.extent().as_tuple(), (0.0, 1.0, 0.0, 1.0));
        assert_cells_tile(&diagram);

        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();
        assert_cells_tile(&diagram);
    }

    #[test]
    fn test_unclipped_cells() {
        let config = DiagramConfigBuilder::new()
            .size(100, 100)
            .unwrap()
            .clip_cells(false)
            .build()
            .unwrap();
        let diagram = VoronoiDiagram::generate(scenario(), config).unwrap();

        // Every seed of this layout lies on the convex hull
        assert!(diagram.cells().is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        let result = VoronoiDiagram::from_file(
            "/definitely/not/here/points.txt",
            DiagramConfig::default(),
        );
        assert!(matches!(
            result,
            Err(crate::VoronoiError::SourceNotFound { .. })
        ));
    }
}
