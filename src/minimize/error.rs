//! Error types for minimization

use std::fmt;
use std::io;

/// Errors raised by the minimization entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// The expression mentions more variables than the configured bound
    ///
    /// Minimization cost is exponential in the variable count, so the bound
    /// is checked up front and no partial work is performed.
    TooManyVariables {
        /// Distinct variables collected from the tree
        count: usize,
        /// The configured upper bound
        limit: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::TooManyVariables { count, limit } => write!(
                f,
                "Expression has {} variables, exceeding the configured limit of {}",
                count, limit
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_variables_message() {
        let err = MinimizeError::TooManyVariables {
            count: 24,
            limit: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("24 variables"));
        assert!(msg.contains("limit of 16"));
    }

    #[test]
    fn test_minimize_error_to_io_error() {
        let err = MinimizeError::TooManyVariables { count: 20, limit: 16 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
