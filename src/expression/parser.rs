//! Parsing support for boolean expressions

use super::error::ParseError;
use super::Node;
use lalrpop_util::ParseError as LalrpopError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/grammar.rs"));
}

impl Node {
    /// Parse a boolean expression from a string
    ///
    /// Word operators and their symbol aliases are interchangeable:
    /// - `or`, `+`, `|`, `||` for OR
    /// - `and`, `*`, `&`, `&&` for AND
    /// - `xor`, `^` for XOR, `xnor`, `-^` for XNOR
    /// - `nor`, `-+` for NOR, `nand`, `-*` for NAND
    /// - `not`, `~`, `!` for NOT
    /// - Parentheses or square brackets for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    ///
    /// Binary operators associate left. NOT binds tighter than every binary
    /// operator, so `not a or b` parses as `(not(a) or b)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Node;
    ///
    /// # fn main() -> Result<(), quine_logic::ParseError> {
    /// let parsed = Node::parse("not a or b and c")?;
    /// assert_eq!(parsed.to_string(), "(not(a) or (b and c))");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Failures report a byte offset into the input:
    ///
    /// ```
    /// use quine_logic::{Node, ParseError};
    ///
    /// let ParseError::InvalidSyntax { position, .. } =
    ///     Node::parse("a and and b").unwrap_err();
    /// assert_eq!(position, Some(6));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| convert_parse_error(input, e))
    }
}

/// Map the structured lalrpop error variants onto [`ParseError`]
///
/// Positions are byte offsets into the original input.
fn convert_parse_error<T: std::fmt::Display>(
    input: &str,
    error: LalrpopError<usize, T, &str>,
) -> ParseError {
    let (message, position) = match error {
        LalrpopError::InvalidToken { location } => ("invalid token".to_string(), Some(location)),
        LalrpopError::UnrecognizedEof { location, expected } => (
            format!("unexpected end of input, expected {}", one_of(&expected)),
            Some(location),
        ),
        LalrpopError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => (
            format!("unexpected token `{}`, expected {}", token, one_of(&expected)),
            Some(start),
        ),
        LalrpopError::ExtraToken {
            token: (start, token, _),
        } => (format!("extra token `{}` after expression", token), Some(start)),
        LalrpopError::User { error } => (error.to_string(), None),
    };
    ParseError::InvalidSyntax {
        message: Arc::from(message.as_str()),
        input: Arc::from(input),
        position,
    }
}

fn one_of(expected: &[String]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.clone(),
        _ => format!("one of: {}", expected.join(", ")),
    }
}
