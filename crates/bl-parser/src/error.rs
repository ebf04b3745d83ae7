// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parse error types.

use bl_ast::END_OF_INPUT;
use thiserror::Error;

/// A syntax error in a BL token stream.
///
/// The parser is fail-fast: the first error aborts the parse and the
/// partially built tree is discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found '{found}'")]
    Expected { expected: String, found: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("'{0}' does not name a condition")]
    UnknownCondition(String),

    #[error("'{0}' is not a valid instruction name")]
    InvalidCallName(String),
}

impl ParseError {
    /// Builds an "expected X" error for the token actually found, folding
    /// the end-of-input marker into its own variant.
    pub(crate) fn expected(expected: impl Into<String>, found: &str) -> ParseError {
        if found == END_OF_INPUT {
            ParseError::UnexpectedEnd { expected: expected.into() }
        } else {
            ParseError::Expected { expected: expected.into(), found: found.to_string() }
        }
    }
}
