//! The lexer implementation using logos.

use bl_ast::token::{Tokens, END_OF_INPUT};
use logos::Logos;

/// Raw token type for logos: any maximal run of non-whitespace is one
/// token, comments and whitespace are skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    #[regex(r"[^ \t\r\n\f#]+")]
    Word,
}

/// The lexer for BL source text.
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenizes the entire source and appends [`END_OF_INPUT`].
    ///
    /// Every non-whitespace run outside a comment is a token, so lexing
    /// cannot fail.
    pub fn tokenize(&self) -> Tokens {
        let mut tokens = Tokens::new();
        let mut logos_lexer = RawToken::lexer(self.source);

        while let Some(result) = logos_lexer.next() {
            if result.is_ok() {
                tokens.push(logos_lexer.slice());
            }
        }

        tokens.push(END_OF_INPUT);
        tokens
    }
}

/// Tokenizes `source` in one call.
pub fn tokens(source: &str) -> Tokens {
    Lexer::new(source).tokenize()
}
