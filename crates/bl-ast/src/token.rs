//! Token definitions: the reserved vocabulary and the token queue the
//! parser consumes.

use std::collections::VecDeque;

/// Marker token a tokenizer appends after the last source token.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

pub const KW_IF: &str = "IF";
pub const KW_THEN: &str = "THEN";
pub const KW_ELSE: &str = "ELSE";
pub const KW_END: &str = "END";
pub const KW_WHILE: &str = "WHILE";
pub const KW_DO: &str = "DO";

/// Returns true if `token` is a reserved keyword.
pub fn is_reserved(token: &str) -> bool {
    matches!(token, KW_IF | KW_THEN | KW_ELSE | KW_END | KW_WHILE | KW_DO)
}

/// Returns true if `token` is a valid instruction name: a letter followed
/// by letters, digits, or hyphens, and not a reserved word.
pub fn is_identifier(token: &str) -> bool {
    if is_reserved(token) {
        return false;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        None => false,
    }
}

/// A FIFO queue of source tokens.
///
/// When the queue runs dry, [`peek`](Tokens::peek) and [`pop`](Tokens::pop)
/// yield [`END_OF_INPUT`], so a stream missing its marker reads as a clean
/// end of input instead of a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    queue: VecDeque<String>,
}

impl Tokens {
    /// Creates an empty token queue.
    pub fn new() -> Tokens {
        Tokens { queue: VecDeque::new() }
    }

    /// Appends a token at the back.
    pub fn push(&mut self, token: impl Into<String>) {
        self.queue.push_back(token.into());
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> &str {
        self.queue.front().map(String::as_str).unwrap_or(END_OF_INPUT)
    }

    /// Removes and returns the next token.
    pub fn pop(&mut self) -> String {
        self.queue
            .pop_front()
            .unwrap_or_else(|| END_OF_INPUT.to_string())
    }

    /// Number of queued tokens, the end marker included if present.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// True once the next token is the end-of-input marker (or the queue
    /// has run dry).
    pub fn at_end(&self) -> bool {
        self.peek() == END_OF_INPUT
    }
}

impl FromIterator<String> for Tokens {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Tokens {
        Tokens { queue: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<&'a str> for Tokens {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Tokens {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Tokens {
        tokens.into_iter().collect()
    }
}
