// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The recursive-descent statement parser.
//!
//! One token of lookahead picks the statement form; control-structure
//! bodies recurse through [`Parser::parse_block`]. Recursion depth tracks
//! the nesting depth of the input, so pathologically deep programs can
//! exhaust the call stack.

use bl_ast::token::{self, KW_DO, KW_ELSE, KW_END, KW_IF, KW_THEN, KW_WHILE};
use bl_ast::{Condition, Statement, Tokens, END_OF_INPUT};

use crate::error::ParseError;

/// The parser for BL statement token streams.
pub struct Parser {
    tokens: Tokens,
}

impl Parser {
    pub fn new(tokens: Tokens) -> Self {
        Self { tokens }
    }

    /// Parses the whole stream as one block statement, requiring the
    /// end-of-input marker after it.
    pub fn parse(mut self) -> Result<Statement, ParseError> {
        let block = self.parse_block()?;
        if !self.at_end() {
            return Err(ParseError::expected("end of input", self.tokens.peek()));
        }
        Ok(block)
    }

    /// Parses statements into a block until the lookahead is `END`,
    /// `ELSE`, or the end of input. The terminator is left for the caller.
    pub fn parse_block(&mut self) -> Result<Statement, ParseError> {
        let mut block = Statement::new();
        while !self.at_block_end() {
            let stmt = self.parse_statement()?;
            let end = block.length_of_block();
            block.add_to_block(end, stmt);
        }
        Ok(block)
    }

    /// Parses a single statement, dispatching on one token of lookahead:
    /// `IF` and `WHILE` open control structures, anything else must be an
    /// instruction call.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.tokens.peek() {
            KW_IF => self.parse_if(),
            KW_WHILE => self.parse_while(),
            _ => self.parse_call(),
        }
    }

    // =========================================================================
    // Statement forms
    // =========================================================================

    /// `IF <condition> THEN <block> [ELSE <block>] END IF`
    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.expect(KW_IF)?;
        let cond = self.parse_condition()?;
        self.expect(KW_THEN)?;
        let then_body = self.parse_block()?;

        let mut stmt = Statement::new();
        if self.match_token(KW_ELSE) {
            let else_body = self.parse_block()?;
            self.expect(KW_END)?;
            self.expect(KW_IF)?;
            stmt.assemble_if_else(cond, then_body, else_body);
        } else {
            self.expect(KW_END)?;
            self.expect(KW_IF)?;
            stmt.assemble_if(cond, then_body);
        }
        Ok(stmt)
    }

    /// `WHILE <condition> DO <block> END WHILE`
    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        self.expect(KW_WHILE)?;
        let cond = self.parse_condition()?;
        self.expect(KW_DO)?;
        let body = self.parse_block()?;
        self.expect(KW_END)?;
        self.expect(KW_WHILE)?;

        let mut stmt = Statement::new();
        stmt.assemble_while(cond, body);
        Ok(stmt)
    }

    fn parse_call(&mut self) -> Result<Statement, ParseError> {
        let name = self.advance();
        if name == END_OF_INPUT {
            return Err(ParseError::UnexpectedEnd { expected: "a statement".to_string() });
        }
        if !token::is_identifier(&name) {
            return Err(ParseError::InvalidCallName(name));
        }
        let mut stmt = Statement::new();
        stmt.assemble_call(name);
        Ok(stmt)
    }

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let tok = self.advance();
        if tok == END_OF_INPUT {
            return Err(ParseError::UnexpectedEnd { expected: "a condition".to_string() });
        }
        Condition::from_token(&tok).ok_or(ParseError::UnknownCondition(tok))
    }

    // =========================================================================
    // Token navigation
    // =========================================================================

    fn at_end(&self) -> bool {
        self.tokens.at_end()
    }

    /// True at the tokens that terminate a block without belonging to it.
    fn at_block_end(&self) -> bool {
        matches!(self.tokens.peek(), KW_END | KW_ELSE | END_OF_INPUT)
    }

    fn advance(&mut self) -> String {
        self.tokens.pop()
    }

    fn check(&self, kw: &str) -> bool {
        self.tokens.peek() == kw
    }

    fn match_token(&mut self, kw: &str) -> bool {
        if self.check(kw) {
            self.tokens.pop();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kw: &'static str) -> Result<(), ParseError> {
        if self.check(kw) {
            self.tokens.pop();
            Ok(())
        } else {
            Err(ParseError::expected(format!("'{}'", kw), self.tokens.peek()))
        }
    }
}
