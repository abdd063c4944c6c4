//! Error types for the checked swap routines.
//!
//! The raw kernels never fail; these errors are only produced by the safe
//! wrappers that validate slice extents before handing pointers to them.

use std::fmt;

/// Errors that can occur when validating a swap request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZswapError {
    /// A vector is too short for the requested count and stride.
    InsufficientLength {
        /// Which vector (`"x"` or `"y"`).
        vector: &'static str,
        /// Number of complex elements the buffer holds.
        len: usize,
        /// Number of complex elements the access pattern spans.
        required: usize,
        /// Requested element count.
        n: isize,
        /// Requested element stride.
        stride: isize,
    },
    /// An offset-addressed access falls outside the buffer.
    IndexOutOfBounds {
        /// Which vector (`"x"` or `"y"`).
        vector: &'static str,
        /// Logical element index that would be touched.
        index: isize,
        /// Number of complex elements the buffer holds.
        len: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for ZswapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZswapError::InsufficientLength {
                vector,
                len,
                required,
                n,
                stride,
            } => write!(
                f,
                "{vector} slice length {len} is insufficient for n={n} and stride={stride}. Required: {required}"
            ),
            ZswapError::IndexOutOfBounds { vector, index, len } => write!(
                f,
                "{vector} index {index} is out of bounds for length {len}"
            ),
            ZswapError::ValidationError { message } => {
                write!(f, "Validation error: {message}")
            }
        }
    }
}

impl std::error::Error for ZswapError {}

/// Result type alias for checked swap operations.
pub type Result<T> = std::result::Result<T, ZswapError>;

/// Creates an insufficient length error.
pub fn insufficient_length(
    vector: &'static str,
    len: usize,
    required: usize,
    n: isize,
    stride: isize,
) -> ZswapError {
    ZswapError::InsufficientLength {
        vector,
        len,
        required,
        n,
        stride,
    }
}

/// Creates an index out of bounds error.
pub fn index_out_of_bounds(vector: &'static str, index: isize, len: usize) -> ZswapError {
    ZswapError::IndexOutOfBounds { vector, index, len }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> ZswapError {
    ZswapError::ValidationError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_length_display() {
        let error = insufficient_length("x", 3, 5, 3, 2);
        assert_eq!(
            error.to_string(),
            "x slice length 3 is insufficient for n=3 and stride=2. Required: 5"
        );
    }

    #[test]
    fn test_index_out_of_bounds_display() {
        let error = index_out_of_bounds("y", -2, 4);
        let display = format!("{}", error);
        assert!(display.contains("y index -2"));
        assert!(display.contains("length 4"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("vectors must have the same length");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("vectors must have the same length"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = insufficient_length("x", 1, 2, 2, 1);
        let error2 = insufficient_length("x", 1, 2, 2, 1);
        let error3 = insufficient_length("y", 1, 2, 2, 1);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = validation_error("test error");

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
