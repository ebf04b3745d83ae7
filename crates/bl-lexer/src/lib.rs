// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tokenizer for BL source text.
//!
//! Splits source into whitespace-separated string tokens, strips `#` line
//! comments, and appends the end-of-input marker the parser expects.

mod lexer;

pub use lexer::{tokens, Lexer};
