//! Error types for point loading and diagram generation

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading seed points or generating a diagram
#[derive(Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// The point source does not exist or could not be read
    SourceNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure, as reported by the OS
        reason: String,
    },
    /// A non-blank line did not split into exactly two comma-separated fields
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },
    /// A field could not be read as a finite decimal number
    NonNumericValue {
        /// 1-based line number
        line: usize,
        /// The offending field, trimmed
        field: String,
    },
    /// Fewer points than a diagram needs
    InsufficientPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points actually available
        found: usize,
    },
    /// A point built in code carries a NaN or infinite coordinate
    NonFiniteCoordinate(usize),
    /// Configuration or argument validation failed
    InvalidConfig(String),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::SourceNotFound { path, reason } => {
                write!(f, "point source not found: {} ({})", path.display(), reason)
            }
            VoronoiError::MalformedLine { line, content } => write!(
                f,
                "line {}: malformed entry '{}', expected format: x,y",
                line, content
            ),
            VoronoiError::NonNumericValue { line, field } => {
                write!(f, "line {}: '{}' is not a finite number", line, field)
            }
            VoronoiError::InsufficientPoints { required, found } => write!(
                f,
                "at least {} points are required, found {}",
                required, found
            ),
            VoronoiError::NonFiniteCoordinate(index) => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            VoronoiError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for VoronoiError {}

/// Result type alias for voronoi operations
pub type Result<T> = std::result::Result<T, VoronoiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_diagnostics() {
        let err = VoronoiError::NonNumericValue {
            line: 3,
            field: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("abc"));

        let err = VoronoiError::MalformedLine {
            line: 7,
            content: "1;2".to_string(),
        };
        assert!(err.to_string().contains("x,y"));

        let err = VoronoiError::InsufficientPoints { required: 2, found: 1 };
        assert_eq!(err.to_string(), "at least 2 points are required, found 1");
    }
}
