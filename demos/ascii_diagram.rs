//! Example: Render a discrete Voronoi diagram as ASCII
//!
//! Usage: `cargo run --example ascii_diagram [points.txt]`
//!
//! Without a file, a reproducible random seed set is used.

use grid_voronoi::*;

const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

fn main() {
    println!("Discrete Voronoi Diagram Example");
    println!("================================\n");

    let points = match std::env::args().nth(1) {
        Some(path) => match read_points(&path) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let extent = Extent::new(0.0, 100.0, 0.0, 100.0).unwrap();
            random_points(12, &extent, 42).unwrap()
        }
    };

    let config = DiagramConfigBuilder::new()
        .size(72, 36)
        .unwrap()
        .margin(3.0)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seeds: {}", points.len());
    println!("  Grid: {}x{}", config.width, config.height);
    println!("  Strategy: {}", config.strategy.name());
    println!();

    let diagram = VoronoiDiagram::generate(points, config).unwrap();

    // Mark the pixel nearest each seed with '*'
    let seeds: Vec<(usize, usize)> = diagram
        .grid_points()
        .iter()
        .map(|p| (p.y.round() as usize, p.x.round() as usize))
        .collect();

    // Row 0 is the bottom, so print in reverse
    for (row_index, row) in diagram.grid().rows().enumerate().rev() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(col, &label)| {
                if seeds.contains(&(row_index, col)) {
                    '*'
                } else {
                    SYMBOLS[label % SYMBOLS.len()] as char
                }
            })
            .collect();
        println!("{}", line);
    }

    println!("\nRegion sizes:");
    for (site, size) in diagram.grid().region_sizes().iter().enumerate() {
        let p = diagram.points()[site];
        println!(
            "  {} seed {:2} at ({:.2}, {:.2}): {} cells",
            SYMBOLS[site % SYMBOLS.len()] as char,
            site,
            p.x,
            p.y,
            size
        );
    }
}
