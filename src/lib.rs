//! # lrfront
//!
//! A two-stage compiler front end: a hand-rolled finite-automaton lexical
//! analyzer and a generic table-driven LR parsing engine.
//!
//! The lexer turns raw source text into a finite token sequence ending in
//! an end-of-input sentinel, registering newly seen identifiers in a shared
//! [`SymbolTable`]. The parse driver consumes that sequence together with
//! an opaque, externally built action/goto table ([`LrTable`]) and emits
//! shift/reduce/accept events to registered [`ActionObserver`]s, always
//! notifying before mutating its stacks so semantic actions can read the
//! pre-reduction state.
//!
//! Table construction, observer-internal semantics, and error recovery are
//! external concerns: the front end aborts on the first lexical or syntax
//! error.
//!
//! ## Modules
//!
//! - [`token`] — the token model and the closed reserved set
//! - [`symtab`] — the shared, insertion-ordered symbol table
//! - [`lexer`] — lexical analysis
//! - [`grammar`] — nonterminals, productions, parse-stack symbols
//! - [`table`] — the opaque LR table abstraction
//! - [`parser`] — the parse driver and observer interface
//! - [`error`] — positions and the fatal error type
//!
//! ## Example
//!
//! ```rust
//! use lrfront::{LexicalAnalyzer, SymbolTable, Token};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let symtab = Rc::new(RefCell::new(SymbolTable::new()));
//! let mut lexer = LexicalAnalyzer::new(Rc::clone(&symtab));
//! lexer.load_source("int a = 10 ;");
//! lexer.run().unwrap();
//! assert_eq!(lexer.tokens().last(), Some(&Token::Eof));
//! assert!(symtab.borrow().has("a"));
//! ```

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod symtab;
pub mod table;
pub mod token;

pub use crate::error::{FrontError, Position};
pub use crate::grammar::{NonTerminal, Production, Symbol};
pub use crate::lexer::LexicalAnalyzer;
pub use crate::parser::{ActionObserver, SyntaxAnalyzer};
pub use crate::symtab::{IdentKind, SymTabError, SymbolEntry, SymbolTable};
pub use crate::table::{Action, LrTable, Status};
pub use crate::token::{NormalKind, Token};
