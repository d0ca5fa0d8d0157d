//! Seed-point text format
//!
//! One point per line as `x,y`, decimal literals, optionally signed. Blank
//! lines are skipped but still counted, so reported line numbers match what
//! an editor shows. Parsing is all-or-nothing: the first bad line aborts and
//! no partial point set is ever returned.

use glam::DVec2;
use std::fs;
use std::path::Path;

use crate::error::{Result, VoronoiError};
use crate::point::{PointSet, MIN_POINTS};

/// Read and parse a point file
///
/// # Errors
///
/// `SourceNotFound` if the file is missing or unreadable, reported before
/// any content is inspected. `MalformedLine` for the first line that is not
/// valid UTF-8. Otherwise the errors of [`parse_points`].
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| VoronoiError::SourceNotFound {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let text = String::from_utf8(bytes)
        .map_err(|err| invalid_utf8(err.as_bytes(), err.utf8_error().valid_up_to()))?;

    let points = parse_points(&text)?;
    log::debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Locate the line holding the first byte that is not valid UTF-8
fn invalid_utf8(bytes: &[u8], valid_up_to: usize) -> VoronoiError {
    let line_start = bytes[..valid_up_to]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line_end = bytes[valid_up_to..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| valid_up_to + i);

    VoronoiError::MalformedLine {
        line: bytes[..line_start].iter().filter(|&&b| b == b'\n').count() + 1,
        content: String::from_utf8_lossy(&bytes[line_start..line_end])
            .trim()
            .to_string(),
    }
}

/// Parse seed points from text
///
/// # Errors
///
/// - `MalformedLine` if a non-blank line does not hold exactly two fields
/// - `NonNumericValue` if a field is not a finite number
/// - `InsufficientPoints` if fewer than two points were read
pub fn parse_points(text: &str) -> Result<PointSet> {
    let mut points = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            log::trace!("skipping blank line {}", line_no);
            continue;
        }
        points.push(parse_line(line, line_no)?);
    }

    if points.len() < MIN_POINTS {
        return Err(VoronoiError::InsufficientPoints {
            required: MIN_POINTS,
            found: points.len(),
        });
    }

    PointSet::new(points)
}

fn parse_line(line: &str, line_no: usize) -> Result<DVec2> {
    let mut fields = line.split(',');
    let (x, y) = match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => {
            return Err(VoronoiError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })
        }
    };

    Ok(DVec2::new(
        parse_coordinate(x, line_no)?,
        parse_coordinate(y, line_no)?,
    ))
}

fn parse_coordinate(field: &str, line_no: usize) -> Result<f64> {
    let field = field.trim();
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(VoronoiError::NonNumericValue {
            line: line_no,
            field: field.to_string(),
        }),
    }
}
