//! Polygon cells from perpendicular-bisector intersections
//!
//! For a fixed seed, every other seed contributes one bisector line. Every
//! non-parallel pair of those lines is intersected and each intersection
//! becomes a candidate vertex. Candidates are ordered by angle around their
//! mean, which lies inside the polygon even when the seed sits on its
//! boundary.
//!
//! Two modes decide which candidates are kept:
//!
//! - raw (the default, [`BisectorCellBuilder::new`]): every finite
//!   intersection is a vertex. This is a coarse approximation; far-off
//!   intersections of unrelated bisectors end up in the polygon too.
//! - exact ([`BisectorCellBuilder::exact`], implied by
//!   [`BisectorCellBuilder::clipped`]): candidates that another seed is
//!   strictly closer to are discarded, so the vertices are true Voronoi
//!   vertices of the cell.
//!
//! # Limitations
//!
//! This is an approximation, not a robust computational-geometry kernel:
//!
//! - Cells on the convex hull of the seeds are unbounded. In exact mode
//!   without clipping they keep only their finite vertices and are usually
//!   absent (fewer than three vertices). Use [`BisectorCellBuilder::clipped`]
//!   to bound them.
//! - Seeds that coincide with the fixed seed have no bisector and are
//!   ignored, so duplicated seeds get identical, overlapping cells.
//! - Cost is O(N³) per cell; intended for point sets of modest size.

use glam::DVec2;

use crate::bounds::Extent;
use crate::cell::VoronoiCell;
use crate::distance::distance_squared;
use crate::point::PointSet;

/// Relative tolerance for parallel lines and vertex acceptance
const EPSILON: f64 = 1e-9;

/// Minimum number of vertices for a cell to exist
const MIN_VERTICES: usize = 3;

/// Perpendicular bisector of `a` and `b` as `(midpoint, direction)`
///
/// The direction is `b - a` rotated a quarter turn counter-clockwise.
/// Returns `None` when the points coincide.
pub fn bisector(a: DVec2, b: DVec2) -> Option<(DVec2, DVec2)> {
    let delta = b - a;
    if delta == DVec2::ZERO {
        return None;
    }
    Some(((a + b) * 0.5, delta.perp()))
}

/// Intersection of the lines `p1 + t·d1` and `p2 + u·d2`
///
/// Solves the 2×2 system for `t` by Cramer's rule. Returns `None` when the
/// system is singular (parallel or degenerate lines).
pub fn intersect_lines(p1: DVec2, d1: DVec2, p2: DVec2, d2: DVec2) -> Option<DVec2> {
    let denom = d1.perp_dot(d2);
    if denom.abs() <= EPSILON * d1.length() * d2.length() {
        return None;
    }
    let t = (p2 - p1).perp_dot(d2) / denom;
    Some(p1 + d1 * t)
}

/// What produced a line bounding a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineSource {
    Site(usize),
    Boundary,
}

#[derive(Debug, Clone, Copy)]
struct Line {
    point: DVec2,
    direction: DVec2,
    source: LineSource,
}

#[derive(Debug, Clone)]
struct Candidate {
    position: DVec2,
    sources: Vec<LineSource>,
}

/// Builds polygonal Voronoi cells from bisector intersections
///
/// # Example
///
/// ```
/// use grid_voronoi::*;
///
/// let sites: PointSet = "1,1\n3,1".parse().unwrap();
///
/// // Two seeds only give one bisector: no bounded cell
/// assert!(BisectorCellBuilder::new().cell_for(0, &sites).is_none());
///
/// // Clipping to a box bounds both cells
/// let extent = Extent::new(0.0, 4.0, 0.0, 2.0).unwrap();
/// let cell = BisectorCellBuilder::clipped(extent).cell_for(0, &sites).unwrap();
/// assert!((cell.area() - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BisectorCellBuilder {
    clip: Option<Extent>,
    exact: bool,
}

impl BisectorCellBuilder {
    /// Raw builder: every bisector intersection is a vertex, no clipping
    pub fn new() -> Self {
        Self {
            clip: None,
            exact: false,
        }
    }

    /// Exact builder that bounds every cell by `extent`
    ///
    /// Clipped cells of seeds inside `extent` tile it.
    pub fn clipped(extent: Extent) -> Self {
        Self {
            clip: Some(extent),
            exact: true,
        }
    }

    /// Keep only candidates no other seed is strictly closer to
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// The clipping rectangle, if any
    #[inline]
    pub fn clip(&self) -> Option<Extent> {
        self.clip
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Cell of seed `site`, or `None` when fewer than three vertices survive
    ///
    /// Also `None` when `site` is out of range.
    pub fn cell_for(&self, site: usize, sites: &PointSet) -> Option<VoronoiCell> {
        let center = sites.get(site)?;
        let lines = self.lines_for(site, center, sites);

        let mut kept: Vec<Candidate> = Vec::new();
        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                let Some(position) = intersect_lines(a.point, a.direction, b.point, b.direction)
                else {
                    log::trace!("site {}: dropping parallel line pair", site);
                    continue;
                };
                if self.admits(position, site, center, sites) {
                    merge_candidate(&mut kept, position, [a.source, b.source]);
                }
            }
        }

        if kept.len() < MIN_VERTICES {
            log::trace!(
                "site {}: only {} usable vertices, no cell",
                site,
                kept.len()
            );
            return None;
        }

        // The seed may itself be a vertex, so order around the vertex mean
        let pivot = kept.iter().map(|c| c.position).sum::<DVec2>() / kept.len() as f64;
        kept.sort_by(|a, b| {
            let ta = a.position - pivot;
            let tb = b.position - pivot;
            ta.y.atan2(ta.x).total_cmp(&tb.y.atan2(tb.x))
        });

        let mut neighbors: Vec<usize> = kept
            .iter()
            .flat_map(|c| c.sources.iter())
            .filter_map(|s| match *s {
                LineSource::Site(index) => Some(index),
                LineSource::Boundary => None,
            })
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();

        let vertices = kept.into_iter().map(|c| c.position).collect();
        Some(VoronoiCell::new(site, center, neighbors, vertices))
    }

    /// Every seed's cell, in seed order, skipping absent cells
    pub fn cells(&self, sites: &PointSet) -> Vec<VoronoiCell> {
        let cells: Vec<VoronoiCell> = (0..sites.len())
            .filter_map(|site| self.cell_for(site, sites))
            .collect();
        log::debug!(
            "built {} of {} bisector cells ({}{})",
            cells.len(),
            sites.len(),
            if self.exact { "exact" } else { "raw" },
            if self.clip.is_some() { ", clipped" } else { "" }
        );
        cells
    }

    fn lines_for(&self, site: usize, center: DVec2, sites: &PointSet) -> Vec<Line> {
        let mut lines: Vec<Line> = sites
            .sites()
            .filter(|other| other.index != site)
            .filter_map(|other| {
                let (point, direction) = bisector(center, other.position)?;
                Some(Line {
                    point,
                    direction,
                    source: LineSource::Site(other.index),
                })
            })
            .collect();

        if let Some(extent) = self.clip {
            let corners = extent.corners();
            for i in 0..corners.len() {
                let next = corners[(i + 1) % corners.len()];
                lines.push(Line {
                    point: corners[i],
                    direction: next - corners[i],
                    source: LineSource::Boundary,
                });
            }
        }

        lines
    }

    /// A vertex belongs to the cell when it is finite and inside the clip
    /// rectangle; in exact mode no other seed may be strictly closer to it
    /// than `center`
    fn admits(&self, position: DVec2, site: usize, center: DVec2, sites: &PointSet) -> bool {
        if !position.is_finite() {
            return false;
        }
        if let Some(extent) = self.clip {
            let scale = extent.width().max(extent.height()).max(1.0);
            if !extent.contains(position, EPSILON * scale) {
                return false;
            }
        }
        if !self.exact {
            return true;
        }

        let own = distance_squared(position, center);
        let slack = EPSILON * own.max(1.0);
        sites
            .sites()
            .filter(|other| other.index != site)
            .all(|other| distance_squared(position, other.position) >= own - slack)
    }
}

/// Add `position` to `kept`, folding it into an existing vertex when the two
/// coincide up to tolerance
fn merge_candidate(kept: &mut Vec<Candidate>, position: DVec2, sources: [LineSource; 2]) {
    let tolerance = EPSILON * position.length().max(1.0);
    match kept
        .iter_mut()
        .find(|c| c.position.distance(position) <= tolerance)
    {
        Some(existing) => {
            for s in sources {
                if !existing.sources.contains(&s) {
                    existing.sources.push(s);
                }
            }
        }
        None => kept.push(Candidate {
            position,
            sources: sources.to_vec(),
        }),
    }
}
