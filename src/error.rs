//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// out-of-range element access, and ragged row input.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Element access outside the matrix bounds.
    IndexOutOfRange {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// Row-of-rows construction received rows of differing lengths.
    RaggedInput {
        /// Index of the offending row
        row: usize,
        /// Length established by the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index out of range: ({row}, {col}) for {rows}x{cols} matrix"
                )
            }
            MatrizError::RaggedInput {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Ragged input: row {row} has {actual} elements, expected {expected}"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two shapes
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "2x2".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x2"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrizError::IndexOutOfRange {
            row: 2,
            col: 5,
            rows: 2,
            cols: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Index out of range"));
        assert!(msg.contains("(2, 5)"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_ragged_input_display() {
        let err = MatrizError::RaggedInput {
            row: 1,
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Ragged input"));
        assert!(msg.contains("row 1"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_from_str() {
        let err: MatrizError = "test error".into();
        assert!(matches!(err, MatrizError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: MatrizError = "test error".to_string().into();
        assert!(matches!(err, MatrizError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = MatrizError::shape_mismatch((2, 2), (3, 2));
        let msg = err.to_string();
        assert!(msg.contains("expected 2x2"));
        assert!(msg.contains("got 3x2"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::Other("test error".to_string());
        assert!(err == "test error");
        assert!("test error" == err);
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::Other("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Other"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = MatrizError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
