//! Kd-tree strategy (feature `spatial-index`)

use glam::DVec2;

use super::SampleGrid;
use crate::point::PointSet;
use crate::spatial::SpatialIndex;

pub(crate) fn label_cells(sites: &PointSet, grid: &SampleGrid) -> Vec<usize> {
    let index = SpatialIndex::new(sites);
    let xs = grid.xs();
    let mut labels = Vec::with_capacity(grid.len());

    for row in 0..grid.height() {
        let y = grid.y_at(row);
        labels.extend(xs.iter().map(|&x| index.find_nearest(DVec2::new(x, y))));
    }

    labels
}
