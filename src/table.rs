//! The opaque LR action/goto table abstraction.
//!
//! Table construction is an external, offline step. The driver consumes a
//! finished table through the [`LrTable`] trait and makes no assumption
//! about its representation: a dense matrix, a hash map, or generated match
//! arms all work.

use crate::grammar::{NonTerminal, Production};
use crate::token::Token;

/// Opaque automaton state identifier, supplied entirely by the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(pub usize);

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cell of the action table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Consume the lookahead and move to the given state.
    Shift(Status),
    /// Replace the production's body on the stack with its head.
    Reduce(Production),
    /// Successful termination.
    Accept,
    /// No legal move; the parse is abandoned.
    Error,
}

/// An externally built LR action/goto relation.
///
/// `action` is total over (state, lookahead terminal); `goto` is partial
/// and must be defined whenever a reduce to `head` is reachable from
/// `state`.
pub trait LrTable {
    /// The designated initial state.
    fn init(&self) -> Status;

    /// The action for `state` on the given lookahead terminal.
    fn action(&self, state: Status, lookahead: &Token) -> Action;

    /// The goto target for `state` on `head`, if defined.
    fn goto(&self, state: Status, head: &NonTerminal) -> Option<Status>;
}
