//! Error types for expression parsing, loading and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors produced when expression text does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input could not be parsed as a boolean expression
    InvalidSyntax {
        /// Diagnostic reported by the parser
        message: Arc<str>,
        /// The text that was being parsed
        input: Arc<str>,
        /// Byte offset in the input where the error occurred
        position: Option<usize>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                write!(f, "Cannot parse {:?} as a boolean expression: {}", input, message)?;
                if let Some(pos) = position {
                    write!(f, " (at position {})", pos)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while loading an expression tree from a structured document
///
/// These errors occur when a JSON value does not match the nested node shape:
/// `{"variable": .., "has_not": ..}` leaves and
/// `{"operator": .., "left": .., "right": .., "has_not": ..}` internal nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A node position held something other than a JSON object
    NotAnObject {
        /// JSON type actually found at that position
        found: Arc<str>,
    },
    /// A required key was absent from a node object
    MissingKey {
        /// The key that was expected
        key: Arc<str>,
    },
    /// A key was present but held a value of the wrong type
    InvalidValue {
        /// The key whose value was rejected
        key: Arc<str>,
        /// Description of the expected value type
        expected: &'static str,
    },
    /// The `operator` key named an operator the engine does not know
    UnknownOperator {
        /// The operator string as it appeared in the document
        name: Arc<str>,
    },
    /// The `variable` key held an empty string
    EmptyVariableName,
    /// The document was not valid JSON at all
    Json {
        /// The underlying JSON parser message
        message: Arc<str>,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnObject { found } => {
                write!(f, "Expected a JSON object describing a node, found {}", found)
            }
            SchemaError::MissingKey { key } => {
                write!(f, "Missing required key {:?} in node object", key)
            }
            SchemaError::InvalidValue { key, expected } => {
                write!(f, "Invalid value for key {:?}: expected {}", key, expected)
            }
            SchemaError::UnknownOperator { name } => write!(
                f,
                "Unknown operator {:?} (expected one of: and, or, xor, nand, nor, xnor)",
                name
            ),
            SchemaError::EmptyVariableName => write!(f, "Variable name must not be empty"),
            SchemaError::Json { message } => {
                write!(f, "Failed to parse JSON document: {}", message)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Json {
            message: Arc::from(err.to_string().as_str()),
        }
    }
}

impl From<SchemaError> for io::Error {
    fn from(err: SchemaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while evaluating an expression against an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Evaluation referenced a variable absent from the assignment
    UnboundVariable {
        /// The name that was looked up and not found
        name: Arc<str>,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { name } => {
                write!(f, "Variable '{}' is not bound in the assignment", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
