// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement tree and token types for the BL block language.
//!
//! This crate defines the mutable statement tree shared between the lexer,
//! parser, and any tooling that edits BL programs structurally.

pub mod condition;
pub mod stmt;
pub mod token;

pub use condition::Condition;
pub use stmt::{Kind, Statement};
pub use token::{Tokens, END_OF_INPUT};
