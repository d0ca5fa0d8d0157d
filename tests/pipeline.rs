use std::fs;
use std::path::PathBuf;

use grid_voronoi::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "grid_voronoi_{}_{}.txt",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_points_from_file() {
    let path = temp_file("four", "2,4\n5.3,4.5\n\n18,29\n12.5,23.7\n");
    let points = read_points(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(points.len(), 4);
    assert_eq!(points[0], DVec2::new(2.0, 4.0));
    assert_eq!(points[1], DVec2::new(5.3, 4.5));
    assert_eq!(points[2], DVec2::new(18.0, 29.0));
    assert_eq!(points[3], DVec2::new(12.5, 23.7));
}

#[test]
fn test_file_errors() {
    let missing = std::env::temp_dir().join("grid_voronoi_no_such_file.txt");
    assert!(matches!(
        read_points(&missing),
        Err(VoronoiError::SourceNotFound { .. })
    ));

    let path = temp_file("bad", "1,2\nabc,def\n");
    let result = read_points(&path);
    fs::remove_file(&path).ok();
    match result {
        Err(VoronoiError::NonNumericValue { line, field }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "abc");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let path = temp_file("single", "5,10\n");
    let result = read_points(&path);
    fs::remove_file(&path).ok();
    assert_eq!(
        result,
        Err(VoronoiError::InsufficientPoints {
            required: 2,
            found: 1
        })
    );
}

#[test]
fn test_text_round_trip_through_file() {
    let extent = Extent::new(-1000.0, 1000.0, -0.5, 0.5).unwrap();
    let points = random_points(40, &extent, 11).unwrap();

    let path = temp_file("round_trip", &points.to_text());
    let restored = read_points(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(points, restored);
}

#[test]
fn test_three_site_grid() {
    let sites: PointSet = "0,0\n1,0\n0,1".parse().unwrap();
    let sample = SampleGrid::around(&sites, 0.0, 10, 10).unwrap();
    let grid = LabelGrid::generate(&sites, &sample, GridStrategy::Batched);

    assert_eq!(grid.shape(), (10, 10));
    assert_eq!(grid.extent().as_tuple(), (0.0, 1.0, 0.0, 1.0));
    assert_eq!(grid.get(0, 0), Some(0));
    assert_eq!(grid.get(0, 9), Some(1));
    assert_eq!(grid.get(9, 0), Some(2));
    // (1, 1) is equidistant from sites 1 and 2
    assert_eq!(grid.get(9, 9), Some(1));
}

#[test]
fn test_grid_matches_nearest_everywhere() {
    let extent = Extent::new(-3.0, 3.0, -2.0, 2.0).unwrap();
    let sites = random_points(9, &extent, 5).unwrap();
    let sample = SampleGrid::new(extent, 31, 21).unwrap();
    let grid = LabelGrid::generate(&sites, &sample, GridStrategy::default());

    for row in 0..sample.height() {
        for col in 0..sample.width() {
            let position = DVec2::new(sample.x_at(col), sample.y_at(row));
            assert_eq!(grid.get(row, col), Some(nearest(position, sites.as_slice())));
        }
    }
}

#[test]
fn test_diagram_from_file() {
    let path = temp_file("diagram", "2,4\n5.3,4.5\n18,29\n12.5,23.7\n");
    let config = DiagramConfigBuilder::new()
        .size(80, 60)
        .unwrap()
        .padding(0.2)
        .unwrap()
        .build()
        .unwrap();
    let diagram = VoronoiDiagram::from_file(&path, config).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(diagram.site_count(), 4);
    assert_eq!(diagram.grid().shape(), (60, 80));
    assert!(diagram.grid().region_sizes().iter().all(|&n| n > 0));

    let cells = diagram.cells();
    assert_eq!(cells.len(), 4);
    for cell in &cells {
        for &other in &cell.neighbors {
            let back = cells.iter().find(|c| c.site == other).unwrap();
            assert!(back.is_neighbor_of(cell.site));
        }
    }
}

#[test]
fn test_cells_agree_with_grid() {
    let extent = Extent::new(0.0, 40.0, 0.0, 40.0).unwrap();
    let sites = random_points(8, &extent, 3).unwrap();
    let cells = BisectorCellBuilder::clipped(extent).cells(&sites);
    assert_eq!(cells.len(), sites.len());

    let sample = SampleGrid::new(extent, 41, 41).unwrap();
    let grid = LabelGrid::generate(&sites, &sample, GridStrategy::Scalar);
    for row in 0..sample.height() {
        for col in 0..sample.width() {
            let position = DVec2::new(sample.x_at(col), sample.y_at(row));
            let label = grid.get(row, col).unwrap();
            let cell = cells.iter().find(|c| c.site == label).unwrap();
            assert!(cell.contains(position), "({}, {}) outside cell {}", row, col, label);
        }
    }
}

#[test]
fn test_interior_cell_is_bounded() {
    let sites: PointSet = "0,0\n4,0\n2,4\n2,1.5".parse().unwrap();
    let builder = BisectorCellBuilder::new().exact();

    assert!(builder.cell_for(0, &sites).is_none());
    let cell = builder.cell_for(3, &sites).unwrap();
    assert_eq!(cell.neighbors, vec![0, 1, 2]);
    assert_eq!(cell.vertex_count(), 3);
    assert!(cell.contains(DVec2::new(2.0, 1.5)));
}

#[test]
fn test_raw_hull_cell() {
    let sites: PointSet = "0,0\n4,0\n0,4\n5,5".parse().unwrap();
    let cell = BisectorCellBuilder::new().cell_for(0, &sites).unwrap();

    assert_eq!(cell.vertex_count(), 3);
    assert!((cell.area() - 0.5).abs() < 1e-12);
    assert!((cell.centroid() - DVec2::new(7.0 / 3.0, 7.0 / 3.0)).length() < 1e-12);
}

#[test]
fn test_edge_seeds_keep_their_cells() {
    for config in [
        DiagramConfigBuilder::new()
            .size(25, 25)
            .unwrap()
            .margin(0.0)
            .unwrap()
            .build()
            .unwrap(),
        DiagramConfigBuilder::new()
            .size(25, 25)
            .unwrap()
            .padding(0.0)
            .unwrap()
            .build()
            .unwrap(),
    ] {
        let extent = Extent::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let points = random_points(7, &extent, 21).unwrap();
        let diagram = VoronoiDiagram::generate(points, config).unwrap();

        let cells = diagram.cells();
        assert_eq!(cells.len(), 7);
        let total: f64 = cells.iter().map(|c| c.area()).sum();
        let extent = diagram.extent();
        assert!((total - extent.width() * extent.height()).abs() < 1e-6 * total);
        for cell in &cells {
            assert!(cell.contains(diagram.grid_points()[cell.site]));
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_diagram_parts_serialize() {
    let sites: PointSet = "0,0\n1,0\n0,1".parse().unwrap();
    let grid = generate(&sites, 4, 4).unwrap();

    let json = serde_json::to_string(&grid).unwrap();
    let restored: LabelGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(grid, restored);

    let json = serde_json::to_string(&sites).unwrap();
    let restored: PointSet = serde_json::from_str(&json).unwrap();
    assert_eq!(sites, restored);
}
