//! Example: Polygonal Voronoi cells from perpendicular bisectors
//!
//! Compares raw cells (every bisector intersection is a vertex), exact
//! unclipped cells (only interior seeds get one) and cells clipped to the
//! sampling extent, and checks the clipped ones against the label grid.

use grid_voronoi::*;

fn main() {
    println!("Bisector Cell Example");
    println!("=====================\n");

    let extent = Extent::new(0.0, 50.0, 0.0, 50.0).unwrap();
    let points = random_points(10, &extent, 7).unwrap();

    // Raw: far-off intersections make oversized polygons
    let raw = BisectorCellBuilder::new().cells(&points);
    println!("Raw: {} cells", raw.len());
    for cell in raw.iter().take(3) {
        println!(
            "  Seed {}: {} vertices, area {:.2}",
            cell.site,
            cell.vertex_count(),
            cell.area()
        );
    }
    println!();

    // Exact, unclipped: hull seeds have open regions and are skipped
    let open = BisectorCellBuilder::new().exact().cells(&points);
    println!("Exact: {} of {} seeds have a bounded cell", open.len(), points.len());
    for cell in &open {
        println!(
            "  Seed {}: {} vertices, area {:.2}, neighbors {:?}",
            cell.site,
            cell.vertex_count(),
            cell.area(),
            cell.neighbors
        );
    }
    println!();

    // Clipped to the extent: every seed gets a cell and the areas tile it
    let clipped = BisectorCellBuilder::clipped(extent).cells(&points);
    let total: f64 = clipped.iter().map(|c| c.area()).sum();
    println!("Clipped: {} cells", clipped.len());
    for cell in &clipped {
        let c = cell.centroid();
        println!(
            "  Seed {}: area {:7.2}, centroid ({:5.2}, {:5.2}), neighbors {:?}",
            cell.site, cell.area(), c.x, c.y, cell.neighbors
        );
    }
    println!(
        "  Total area {:.2} (extent {:.2})",
        total,
        extent.width() * extent.height()
    );
    println!();

    // Each sampled grid cell should fall inside its label's polygon
    let sample = SampleGrid::new(extent, 51, 51).unwrap();
    let grid = LabelGrid::generate(&points, &sample, GridStrategy::default());
    let mut mismatches = 0;
    for row in 0..sample.height() {
        for col in 0..sample.width() {
            let position = DVec2::new(sample.x_at(col), sample.y_at(row));
            let Some(label) = grid.get(row, col) else {
                continue;
            };
            let inside = clipped
                .iter()
                .find(|c| c.site == label)
                .is_some_and(|c| c.contains(position));
            if !inside {
                mismatches += 1;
            }
        }
    }
    println!("Grid/polygon mismatches: {}", mismatches);
}
