//! Distance-field strategy
//!
//! Keeps a running minimum squared distance for every cell. Each site
//! contributes one full distance field and takes over the cells where it is
//! strictly closer than everything seen so far, so the first site wins exact
//! ties just like the per-cell scan.

use glam::DVec2;

use super::SampleGrid;

pub(crate) fn label_cells(sites: &[DVec2], grid: &SampleGrid) -> Vec<usize> {
    let width = grid.width();
    let xs = grid.xs();
    let ys = grid.ys();

    let mut min_dist = vec![f64::INFINITY; grid.len()];
    let mut labels = vec![0usize; grid.len()];
    // dx² only depends on the column, so it is shared by every row
    let mut dx_sq = vec![0.0; width];

    for (index, site) in sites.iter().enumerate() {
        for (d, &x) in dx_sq.iter_mut().zip(&xs) {
            let dx = x - site.x;
            *d = dx * dx;
        }

        for (row, &y) in ys.iter().enumerate() {
            let dy = y - site.y;
            let dy_sq = dy * dy;
            let span = row * width..(row + 1) * width;

            for ((best, label), &dx2) in min_dist[span.clone()]
                .iter_mut()
                .zip(&mut labels[span])
                .zip(&dx_sq)
            {
                let d = dx2 + dy_sq;
                if d < *best {
                    *best = d;
                    *label = index;
                }
            }
        }
    }

    labels
}
