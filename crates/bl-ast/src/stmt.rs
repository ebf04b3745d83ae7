//! The BL statement tree.
//!
//! A [`Statement`] is a mutable, recursively defined value: a block of
//! child statements, an `IF`/`IF ELSE`/`WHILE` control structure, or an
//! instruction call. Control-structure bodies are themselves blocks, so a
//! single shape covers the whole tree.
//!
//! A populated statement can only be overwritten by first taking it apart:
//! the `assemble_*` operations insist on an empty block, and the
//! `disassemble_*` operations hand a statement's contents back to the
//! caller while resetting it to an empty block. Repurposing a node
//! therefore always routes its previous children through the caller's
//! hands instead of dropping them silently.

use crate::token::is_identifier;
use crate::Condition;

/// The discriminant of a [`Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

/// A BL statement.
///
/// Equality is structural: two statements are equal when their kinds match
/// and, recursively, their conditions, call names, and block children (in
/// order) match. A freshly constructed statement is an empty block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    kind: StatementKind,
}

/// The tagged union behind [`Statement`]. Body vectors hold the children
/// of the conceptual block child; the public API wraps them back into
/// block statements on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum StatementKind {
    Block(Vec<Statement>),
    If {
        cond: Condition,
        body: Vec<Statement>,
    },
    IfElse {
        cond: Condition,
        then_body: Vec<Statement>,
        else_body: Vec<Statement>,
    },
    While {
        cond: Condition,
        body: Vec<Statement>,
    },
    Call(String),
}

impl Default for Statement {
    fn default() -> Statement {
        Statement::new()
    }
}

impl Statement {
    /// Creates an empty block statement.
    pub fn new() -> Statement {
        Statement { kind: StatementKind::Block(Vec::new()) }
    }

    fn block_of(children: Vec<Statement>) -> Statement {
        Statement { kind: StatementKind::Block(children) }
    }

    /// The current discriminant.
    pub fn kind(&self) -> Kind {
        match self.kind {
            StatementKind::Block(_) => Kind::Block,
            StatementKind::If { .. } => Kind::If,
            StatementKind::IfElse { .. } => Kind::IfElse,
            StatementKind::While { .. } => Kind::While,
            StatementKind::Call(_) => Kind::Call,
        }
    }

    /// True if this statement is a block with no children.
    pub fn is_empty_block(&self) -> bool {
        matches!(self.kind, StatementKind::Block(ref children) if children.is_empty())
    }

    fn children(&self) -> &Vec<Statement> {
        match self.kind {
            StatementKind::Block(ref children) => children,
            _ => panic!("block operation on a {:?} statement", self.kind()),
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Statement> {
        match self.kind {
            StatementKind::Block(ref mut children) => children,
            _ => panic!("block operation on a {:?} statement", self.kind()),
        }
    }

    /// Number of direct children of this block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not a block.
    pub fn length_of_block(&self) -> usize {
        self.children().len()
    }

    /// Inserts `child` at `pos`, shifting later children right. The child
    /// is moved into the block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not a block, if `pos` is greater than
    /// [`length_of_block`](Statement::length_of_block), or if `child` is
    /// itself a block (blocks nest only through control structures).
    pub fn add_to_block(&mut self, pos: usize, child: Statement) {
        assert!(
            child.kind() != Kind::Block,
            "a block cannot be a direct child of a block"
        );
        let children = self.children_mut();
        assert!(
            pos <= children.len(),
            "position {} out of range for block of length {}",
            pos,
            children.len()
        );
        children.insert(pos, child);
    }

    /// Removes and returns the child at `pos`, shifting later children
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not a block or `pos` is out of range.
    pub fn remove_from_block(&mut self, pos: usize) -> Statement {
        let children = self.children_mut();
        assert!(
            pos < children.len(),
            "position {} out of range for block of length {}",
            pos,
            children.len()
        );
        children.remove(pos)
    }

    fn require_empty_for_assemble(&self) {
        assert!(
            self.is_empty_block(),
            "assemble requires an empty block; disassemble the previous contents first"
        );
    }

    fn body_children(body: Statement) -> Vec<Statement> {
        match body.kind {
            StatementKind::Block(children) => children,
            _ => panic!(
                "control-structure body must be a block, got {:?}",
                body.kind()
            ),
        }
    }

    /// Overwrites this empty block with an `IF` statement guarding `body`.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an empty block or `body` is not a
    /// block.
    pub fn assemble_if(&mut self, cond: Condition, body: Statement) {
        self.require_empty_for_assemble();
        self.kind = StatementKind::If { cond, body: Statement::body_children(body) };
    }

    /// Splits this `IF` statement into its condition and body block,
    /// leaving this statement an empty block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an `IF`.
    pub fn disassemble_if(&mut self) -> (Condition, Statement) {
        assert!(
            self.kind() == Kind::If,
            "disassemble_if on a {:?} statement",
            self.kind()
        );
        match std::mem::take(self).kind {
            StatementKind::If { cond, body } => (cond, Statement::block_of(body)),
            _ => unreachable!(),
        }
    }

    /// Overwrites this empty block with an `IF`/`ELSE` statement.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an empty block or either body is
    /// not a block.
    pub fn assemble_if_else(
        &mut self,
        cond: Condition,
        then_body: Statement,
        else_body: Statement,
    ) {
        self.require_empty_for_assemble();
        self.kind = StatementKind::IfElse {
            cond,
            then_body: Statement::body_children(then_body),
            else_body: Statement::body_children(else_body),
        };
    }

    /// Splits this `IF`/`ELSE` statement into its condition and both
    /// branch blocks, leaving this statement an empty block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an `IF`/`ELSE`.
    pub fn disassemble_if_else(&mut self) -> (Condition, Statement, Statement) {
        assert!(
            self.kind() == Kind::IfElse,
            "disassemble_if_else on a {:?} statement",
            self.kind()
        );
        match std::mem::take(self).kind {
            StatementKind::IfElse { cond, then_body, else_body } => (
                cond,
                Statement::block_of(then_body),
                Statement::block_of(else_body),
            ),
            _ => unreachable!(),
        }
    }

    /// Overwrites this empty block with a `WHILE` statement looping over
    /// `body`.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an empty block or `body` is not a
    /// block.
    pub fn assemble_while(&mut self, cond: Condition, body: Statement) {
        self.require_empty_for_assemble();
        self.kind = StatementKind::While { cond, body: Statement::body_children(body) };
    }

    /// Splits this `WHILE` statement into its condition and body block,
    /// leaving this statement an empty block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not a `WHILE`.
    pub fn disassemble_while(&mut self) -> (Condition, Statement) {
        assert!(
            self.kind() == Kind::While,
            "disassemble_while on a {:?} statement",
            self.kind()
        );
        match std::mem::take(self).kind {
            StatementKind::While { cond, body } => (cond, Statement::block_of(body)),
            _ => unreachable!(),
        }
    }

    /// Overwrites this empty block with a call of the instruction `name`.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not an empty block or `name` is not a
    /// valid instruction name.
    pub fn assemble_call(&mut self, name: impl Into<String>) {
        self.require_empty_for_assemble();
        let name = name.into();
        assert!(
            is_identifier(&name),
            "'{}' is not a valid instruction name",
            name
        );
        self.kind = StatementKind::Call(name);
    }

    /// Returns the called instruction's name, leaving this statement an
    /// empty block.
    ///
    /// # Panics
    ///
    /// Panics if this statement is not a call.
    pub fn disassemble_call(&mut self) -> String {
        assert!(
            self.kind() == Kind::Call,
            "disassemble_call on a {:?} statement",
            self.kind()
        );
        match std::mem::take(self).kind {
            StatementKind::Call(name) => name,
            _ => unreachable!(),
        }
    }
}
