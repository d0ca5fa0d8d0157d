//! Mapping raw seed coordinates onto a fixed-size canvas
//!
//! Each axis is mapped linearly from its bounding-box range onto
//! `[margin, dimension - margin]`. The map is monotone, so point order and
//! ties survive; a degenerate axis collapses every point onto `margin`.

use glam::DVec2;

use crate::error::{Result, VoronoiError};
use crate::point::PointSet;

/// Map `points` into a `width` × `height` canvas, keeping `margin` clear
///
/// # Errors
///
/// Returns `InvalidConfig` if a dimension is not positive, or if the margin
/// is negative, non-finite, or wider than half of a dimension.
///
/// # Example
///
/// ```
/// use grid_voronoi::*;
///
/// let raw: PointSet = "0,0\n10,5\n20,10".parse().unwrap();
/// let canvas = normalize(&raw, 500.0, 500.0, 30.0).unwrap();
/// assert_eq!(canvas[0], DVec2::new(30.0, 30.0));
/// assert_eq!(canvas[2], DVec2::new(470.0, 470.0));
/// ```
pub fn normalize(points: &PointSet, width: f64, height: f64, margin: f64) -> Result<PointSet> {
    validate_canvas(width, height, margin)?;

    let bounds = points.bounding_box();
    // Halved before subtracting so spans wider than f64::MAX stay finite;
    // halving is exact, so the ratio matches the unscaled one
    let half_min = bounds.min() * 0.5;
    let half_span = DVec2::new(
        half_axis_span(bounds.min_x, bounds.max_x),
        half_axis_span(bounds.min_y, bounds.max_y),
    );
    let usable = DVec2::new(width - 2.0 * margin, height - 2.0 * margin);
    let lo = DVec2::splat(margin);
    let hi = DVec2::new(width - margin, height - margin);

    let mapped = points
        .iter()
        .map(|p| {
            let t = (p * 0.5 - half_min) / half_span;
            // Rounding must never push a point past the margin
            (lo + t * usable).clamp(lo, hi)
        })
        .collect();

    PointSet::new(mapped)
}

/// Half of `max - min`, or 1.0 for a degenerate axis
fn half_axis_span(min: f64, max: f64) -> f64 {
    if max > min {
        max * 0.5 - min * 0.5
    } else {
        1.0
    }
}

fn validate_canvas(width: f64, height: f64, margin: f64) -> Result<()> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(VoronoiError::InvalidConfig(format!(
            "canvas dimensions must be positive (got {}x{})",
            width, height
        )));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(VoronoiError::InvalidConfig(format!(
            "margin must be a non-negative number (got {})",
            margin
        )));
    }
    if 2.0 * margin > width || 2.0 * margin > height {
        return Err(VoronoiError::InvalidConfig(format!(
            "margin {} leaves no room on a {}x{} canvas",
            margin, width, height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Extent;
    use crate::sampling::random_points;

    #[test]
    fn test_maps_bounding_box_to_margins() {
        let raw: PointSet = "2,4\n5.3,4.5\n18,29\n12.5,23.7".parse().unwrap();
        let out = normalize(&raw, 400.0, 300.0, 20.0).unwrap();

        assert_eq!(out.len(), raw.len());
        assert_eq!(out[0].x, 20.0);
        assert_eq!(out[0].y, 20.0);
        assert_eq!(out[2].x, 380.0);
        assert_eq!(out[2].y, 280.0);
    }

    #[test]
    fn test_bounds_hold_for_random_input() {
        let extent = Extent::new(-1e4, 3e-3, 17.0, 17.5).unwrap();
        for seed in 0..5 {
            let raw = random_points(50, &extent, seed).unwrap();
            let margin = 12.5;
            let out = normalize(&raw, 333.0, 211.0, margin).unwrap();
            for p in out.iter() {
                assert!(p.x >= margin && p.x <= 333.0 - margin, "{:?}", p);
                assert!(p.y >= margin && p.y <= 211.0 - margin, "{:?}", p);
            }
        }
    }

    #[test]
    fn test_preserves_order_and_ties() {
        let raw: PointSet = "3,1\n-2,1\n3,8\n0.5,-4".parse().unwrap();
        let out = normalize(&raw, 100.0, 100.0, 10.0).unwrap();

        for i in 0..raw.len() {
            for j in 0..raw.len() {
                assert_eq!(raw[i].x < raw[j].x, out[i].x < out[j].x);
                assert_eq!(raw[i].x == raw[j].x, out[i].x == out[j].x);
                assert_eq!(raw[i].y < raw[j].y, out[i].y < out[j].y);
                assert_eq!(raw[i].y == raw[j].y, out[i].y == out[j].y);
            }
        }
    }

    #[test]
    fn test_degenerate_axis_collapses_to_margin() {
        let raw: PointSet = "7,1\n7,2\n7,3".parse().unwrap();
        let out = normalize(&raw, 50.0, 50.0, 5.0).unwrap();
        assert!(out.iter().all(|p| p.x == 5.0));
        assert_eq!(out[0].y, 5.0);
        assert_eq!(out[2].y, 45.0);

        let same: PointSet = "1,1\n1,1".parse().unwrap();
        let out = normalize(&same, 50.0, 50.0, 5.0).unwrap();
        assert!(out.iter().all(|p| p == DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_huge_span_keeps_order() {
        let raw: PointSet = "-1e308,0\n1e308,1\n0,0.5\n1.7e308,0.25".parse().unwrap();
        let out = normalize(&raw, 100.0, 100.0, 10.0).unwrap();

        assert_eq!(out[0], DVec2::new(10.0, 10.0));
        assert_eq!(out[1].y, 90.0);
        assert_eq!(out[3].x, 90.0);
        assert!(out.iter().all(|p| p.is_finite()));
        assert!(out[0].x < out[2].x && out[2].x < out[1].x && out[1].x < out[3].x);
        assert!((out[2].x - (10.0 + 80.0 / 2.7)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_margin() {
        let raw: PointSet = "0,0\n1,1".parse().unwrap();
        let out = normalize(&raw, 10.0, 10.0, 0.0).unwrap();
        assert_eq!(out[0], DVec2::ZERO);
        assert_eq!(out[1], DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_invalid_canvas() {
        let raw: PointSet = "0,0\n1,1".parse().unwrap();
        assert!(normalize(&raw, 0.0, 10.0, 0.0).is_err());
        assert!(normalize(&raw, 10.0, 10.0, -1.0).is_err());
        assert!(normalize(&raw, 10.0, 10.0, 6.0).is_err());
        assert!(normalize(&raw, 10.0, f64::NAN, 1.0).is_err());
    }
}
