//! Source positions and the fatal front-end error type.
//!
//! All errors raised by the lexer and the parse driver are fatal: the pass
//! that raised one is abandoned on first occurrence and no partial result is
//! considered valid. The variants are kept distinguishable so callers can
//! tell a malformed input apart from a malformed table.

use crate::grammar::NonTerminal;
use crate::table::Status;
use crate::token::Token;
use thiserror::Error;

/// A 1-based line/column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fatal failures of the front end.
///
/// None of these triggers a retry or any form of recovery.
#[derive(Debug, Error)]
pub enum FrontError {
    /// An input character matched none of whitespace, letter, digit, or the
    /// fixed punctuation set.
    #[error("unexpected character {ch:?} at {pos}")]
    Lexical {
        /// The offending character.
        ch: char,
        /// Where it occurred.
        pos: Position,
    },

    /// The LR table reported an error action for the current
    /// (state, lookahead) pair.
    #[error("syntax error in state {state} on token {token}")]
    Syntax {
        /// State on top of the state stack when the error was reported.
        state: Status,
        /// The unconsumed lookahead token.
        token: Token,
    },

    /// A reduce step's goto lookup was undefined for the exposed state and
    /// the production's head. Indicates a malformed table, not a
    /// recoverable condition.
    #[error("no goto from state {state} on nonterminal {head}")]
    Table {
        /// The state exposed after popping the production body.
        state: Status,
        /// The head nonterminal the goto was requested for.
        head: NonTerminal,
    },

    /// A symbol-table operation failed.
    #[error("symbol table error: {0}")]
    SymTab(#[from] crate::symtab::SymTabError),

    /// Driver misuse or contract violation, e.g. running without a loaded
    /// table or exhausting the token sequence without an accept.
    #[error("{0}")]
    Internal(&'static str),

    /// Failure in one of the thin file wrappers.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
