//! Reference strategy: one nearest-site scan per cell

use glam::DVec2;

use super::SampleGrid;
use crate::distance::nearest;

pub(crate) fn label_cells(sites: &[DVec2], grid: &SampleGrid) -> Vec<usize> {
    let mut labels = Vec::with_capacity(grid.len());

    for row in 0..grid.height() {
        let y = grid.y_at(row);
        for col in 0..grid.width() {
            labels.push(nearest(DVec2::new(grid.x_at(col), y), sites));
        }
    }

    labels
}
