//! Grammar model: nonterminals, productions, and the parse-stack symbol.
//!
//! These types are shared between the externally built LR table and the
//! parse driver. The driver attaches no semantics to them beyond a
//! production's body length, which fixes the pop count on reduce.

use crate::token::Token;
use smartstring::alias::String;

/// A grammar nonterminal, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonTerminal(String);

impl NonTerminal {
    /// Creates a nonterminal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The nonterminal's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A terminal or nonterminal, used uniformly in production bodies and on
/// the parse symbol stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A terminal, wrapping the token it was shifted from.
    Token(Token),
    /// A nonterminal instance, pushed on reduce.
    NonTerminal(NonTerminal),
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Token(token) => f.write_str(token.terminal_text()),
            Symbol::NonTerminal(nt) => f.write_str(nt.name()),
        }
    }
}

/// A production: head nonterminal plus an ordered body of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// The head nonterminal the body reduces to.
    pub head: NonTerminal,
    /// Ordered body; its length determines the pop count on reduce.
    pub body: Vec<Symbol>,
}

impl Production {
    /// Creates a production `head -> body`.
    pub fn new(head: NonTerminal, body: Vec<Symbol>) -> Self {
        Self { head, body }
    }

    /// Body length, i.e. the number of stack frames popped on reduce.
    pub fn arity(&self) -> usize {
        self.body.len()
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ->", self.head)?;
        for sym in &self.body {
            write!(f, " {sym}")?;
        }
        Ok(())
    }
}
