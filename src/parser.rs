//! # LR parse driver
//!
//! [`SyntaxAnalyzer`] is a grammar-agnostic stack machine. It consumes a
//! token sequence left to right, drives the automaton described by an
//! externally built [`LrTable`], and notifies every registered
//! [`ActionObserver`] on each shift, reduce, and accept, synchronously and
//! in registration order.
//!
//! Notification order is load-bearing: observers are called *before* the
//! stacks are mutated. On a reduce in particular, an observer implementing
//! semantic actions must be able to read attributes derived from the
//! pre-reduction top-of-stack frames; those frames are popped immediately
//! after the hook returns.
//!
//! The state stack and symbol stack move in lock-step and always have equal
//! length; the symbol stack's bottom element is the end-of-input sentinel.
//!
//! ## Example
//! ```rust
//! # use lrfront::{
//! #     Action, ActionObserver, LrTable, NonTerminal, Production, Status, Symbol,
//! #     SymbolTable, SyntaxAnalyzer, Token,
//! # };
//! # use std::cell::RefCell;
//! # use std::rc::Rc;
//! // Grammar S -> id, with a table small enough to write inline.
//! struct Tiny;
//! impl LrTable for Tiny {
//!     fn init(&self) -> Status {
//!         Status(0)
//!     }
//!     fn action(&self, state: Status, lookahead: &Token) -> Action {
//!         match (state.0, lookahead.terminal_text()) {
//!             (0, "id") => Action::Shift(Status(1)),
//!             (1, "$") => Action::Reduce(Production::new(
//!                 NonTerminal::new("S"),
//!                 vec![Symbol::Token(Token::id("x"))],
//!             )),
//!             (2, "$") => Action::Accept,
//!             _ => Action::Error,
//!         }
//!     }
//!     fn goto(&self, state: Status, head: &NonTerminal) -> Option<Status> {
//!         (state.0 == 0 && head.name() == "S").then_some(Status(2))
//!     }
//! }
//!
//! let symtab = Rc::new(RefCell::new(SymbolTable::new()));
//! let mut parser = SyntaxAnalyzer::new(symtab);
//! parser.load_tokens([Token::id("x"), Token::Eof]);
//! parser.load_lr_table(Tiny);
//! parser.run().unwrap();
//! ```

use crate::error::FrontError;
use crate::grammar::{Production, Symbol};
use crate::symtab::SymbolTable;
use crate::table::{Action, LrTable, Status};
use crate::token::Token;
use std::cell::RefCell;
use std::rc::Rc;

/// Capability interface for parse-event consumers.
///
/// Semantic actions live behind this trait, outside the driver. Unused
/// hooks default to no-ops so implementers only override what they need.
/// The shared symbol table is handed over at registration time, not at
/// construction; an observer must not assume table contents beyond what
/// the lexer has populated plus whatever earlier observers mutated during
/// the same event.
pub trait ActionObserver {
    /// Receives the shared symbol table when registered on a driver.
    fn bind_symbol_table(&mut self, symtab: Rc<RefCell<SymbolTable>>) {
        let _ = symtab;
    }

    /// A shift of `token` is about to be applied in `state`.
    fn on_shift(&mut self, state: Status, token: &Token) {
        let _ = (state, token);
    }

    /// A reduction by `production` is about to be applied in `state`. The
    /// pre-reduction stack frames are still live during this call and are
    /// gone immediately after it returns.
    fn on_reduce(&mut self, state: Status, production: &Production) {
        let _ = (state, production);
    }

    /// The parse was accepted in `state`.
    fn on_accept(&mut self, state: Status) {
        let _ = state;
    }
}

/// The table-driven LR parse driver.
pub struct SyntaxAnalyzer {
    symtab: Rc<RefCell<SymbolTable>>,
    observers: Vec<Box<dyn ActionObserver>>,
    tokens: Vec<Token>,
    cursor: usize,
    table: Option<Box<dyn LrTable>>,
}

impl SyntaxAnalyzer {
    /// Creates a driver bound to the shared symbol table.
    pub fn new(symtab: Rc<RefCell<SymbolTable>>) -> Self {
        Self {
            symtab,
            observers: Vec::new(),
            tokens: Vec::new(),
            cursor: 0,
            table: None,
        }
    }

    /// Registers an observer and hands it the shared symbol table. Every
    /// registered observer receives every event, in registration order.
    pub fn register_observer(&mut self, mut observer: impl ActionObserver + 'static) {
        observer.bind_symbol_table(Rc::clone(&self.symtab));
        self.observers.push(Box::new(observer));
    }

    /// Loads the token sequence to be consumed. The sequence is kept
    /// intact; an index cursor supports peeking the lookahead without
    /// consuming it.
    pub fn load_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.tokens = tokens.into_iter().collect();
        self.cursor = 0;
    }

    /// Binds the driver to an externally built action/goto table.
    pub fn load_lr_table(&mut self, table: impl LrTable + 'static) {
        self.table = Some(Box::new(table));
    }

    /// Runs the automaton to completion or failure.
    ///
    /// Terminates successfully only on an accept action. A syntax error or
    /// an undefined goto abandons the parse immediately; the sentinel token
    /// guarantees the table eventually reports accept or error, so
    /// exhausting the token sequence first is a contract violation.
    pub fn run(&mut self) -> Result<(), FrontError> {
        let table = self
            .table
            .as_ref()
            .ok_or(FrontError::Internal("LR table not loaded"))?;

        let mut states = vec![table.init()];
        let mut symbols = vec![Symbol::Token(Token::Eof)];

        while self.cursor < self.tokens.len() {
            debug_assert_eq!(states.len(), symbols.len());
            let lookahead = &self.tokens[self.cursor];
            let top = states[states.len() - 1];

            match table.action(top, lookahead) {
                Action::Shift(next) => {
                    log::trace!("shift {next} on {lookahead} (depth {})", states.len());
                    for observer in &mut self.observers {
                        observer.on_shift(top, lookahead);
                    }
                    states.push(next);
                    symbols.push(Symbol::Token(lookahead.clone()));
                    self.cursor += 1;
                }
                Action::Reduce(production) => {
                    log::trace!("reduce {production} (depth {})", states.len());
                    for observer in &mut self.observers {
                        observer.on_reduce(top, &production);
                    }
                    // Pop only after every observer has seen the
                    // pre-reduction stack.
                    for _ in 0..production.arity() {
                        states.pop();
                        symbols.pop();
                    }
                    debug_assert_eq!(states.len(), symbols.len());
                    let exposed = states[states.len() - 1];
                    let next =
                        table
                            .goto(exposed, &production.head)
                            .ok_or_else(|| FrontError::Table {
                                state: exposed,
                                head: production.head.clone(),
                            })?;
                    states.push(next);
                    symbols.push(Symbol::NonTerminal(production.head.clone()));
                }
                Action::Accept => {
                    log::trace!("accept in {top}");
                    for observer in &mut self.observers {
                        observer.on_accept(top);
                    }
                    return Ok(());
                }
                Action::Error => {
                    return Err(FrontError::Syntax {
                        state: top,
                        token: lookahead.clone(),
                    });
                }
            }
        }

        Err(FrontError::Internal("token sequence exhausted before accept"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::NonTerminal;
    use crate::lexer::LexicalAnalyzer;
    use crate::symtab::IdentKind;
    use std::collections::HashMap;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Hash-map-backed table, built cell by cell in tests.
    #[derive(Default)]
    struct MapTable {
        init: Status,
        actions: HashMap<(Status, &'static str), Action>,
        gotos: HashMap<(Status, NonTerminal), Status>,
    }

    impl MapTable {
        fn action(mut self, state: usize, terminal: &'static str, action: Action) -> Self {
            self.actions.insert((Status(state), terminal), action);
            self
        }

        fn goto(mut self, state: usize, head: &str, target: usize) -> Self {
            self.gotos
                .insert((Status(state), NonTerminal::new(head)), Status(target));
            self
        }
    }

    impl LrTable for MapTable {
        fn init(&self) -> Status {
            self.init
        }

        fn action(&self, state: Status, lookahead: &Token) -> Action {
            self.actions
                .get(&(state, lookahead.terminal_text()))
                .cloned()
                .unwrap_or(Action::Error)
        }

        fn goto(&self, state: Status, head: &NonTerminal) -> Option<Status> {
            self.gotos.get(&(state, head.clone())).copied()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Shift(Status, String),
        Reduce(Status, String),
        Accept(Status),
    }

    /// Observer that records every event it receives.
    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl ActionObserver for Recorder {
        fn on_shift(&mut self, state: Status, token: &Token) {
            self.events
                .borrow_mut()
                .push(Event::Shift(state, token.terminal_text().to_string()));
        }

        fn on_reduce(&mut self, state: Status, production: &Production) {
            self.events
                .borrow_mut()
                .push(Event::Reduce(state, production.to_string()));
        }

        fn on_accept(&mut self, state: Status) {
            self.events.borrow_mut().push(Event::Accept(state));
        }
    }

    fn prod(head: &str, body: Vec<Symbol>) -> Production {
        Production::new(NonTerminal::new(head), body)
    }

    /// Table for the minimal grammar S -> E, E -> id.
    fn minimal_table() -> MapTable {
        MapTable::default()
            .action(0, "id", Action::Shift(Status(1)))
            .action(
                1,
                "$",
                Action::Reduce(prod("E", vec![Symbol::Token(Token::id("x"))])),
            )
            .action(
                2,
                "$",
                Action::Reduce(prod("S", vec![Symbol::NonTerminal(NonTerminal::new("E"))])),
            )
            .action(3, "$", Action::Accept)
            .goto(0, "E", 2)
            .goto(0, "S", 3)
    }

    fn new_parser() -> SyntaxAnalyzer {
        init_logger();
        SyntaxAnalyzer::new(Rc::new(RefCell::new(SymbolTable::new())))
    }

    #[test]
    fn minimal_grammar_emits_events_in_exact_order() {
        let mut parser = new_parser();
        let events = Rc::new(RefCell::new(Vec::new()));
        parser.register_observer(Recorder {
            events: Rc::clone(&events),
        });
        parser.load_tokens([Token::id("x"), Token::Eof]);
        parser.load_lr_table(minimal_table());
        parser.run().unwrap();

        assert_eq!(
            *events.borrow(),
            [
                Event::Shift(Status(0), "id".to_string()),
                Event::Reduce(Status(1), "E -> id".to_string()),
                Event::Reduce(Status(2), "S -> E".to_string()),
                Event::Accept(Status(3)),
            ]
        );
    }

    #[test]
    fn all_observers_receive_every_event_in_registration_order() {
        let mut parser = new_parser();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        parser.register_observer(Recorder {
            events: Rc::clone(&first),
        });
        parser.register_observer(Recorder {
            events: Rc::clone(&second),
        });
        parser.load_tokens([Token::id("x"), Token::Eof]);
        parser.load_lr_table(minimal_table());
        parser.run().unwrap();

        assert_eq!(first.borrow().len(), 4);
        assert_eq!(*first.borrow(), *second.borrow());
    }

    #[test]
    fn syntax_error_fails_fast_at_the_offending_token() {
        let mut parser = new_parser();
        let events = Rc::new(RefCell::new(Vec::new()));
        parser.register_observer(Recorder {
            events: Rc::clone(&events),
        });
        // Error on the second id: state 1 has no action for "id".
        parser.load_tokens([Token::id("x"), Token::id("y"), Token::Eof]);
        parser.load_lr_table(minimal_table());

        let err = parser.run().unwrap_err();
        match err {
            FrontError::Syntax { state, token } => {
                assert_eq!(state, Status(1));
                assert_eq!(token, Token::id("y"));
            }
            other => panic!("expected Syntax, got {other:?}"),
        }
        // Only the first shift happened; nothing past the error position.
        assert_eq!(
            *events.borrow(),
            [Event::Shift(Status(0), "id".to_string())]
        );
    }

    #[test]
    fn undefined_goto_is_a_table_error() {
        let mut parser = new_parser();
        let table = MapTable::default()
            .action(0, "id", Action::Shift(Status(1)))
            .action(
                1,
                "$",
                Action::Reduce(prod("E", vec![Symbol::Token(Token::id("x"))])),
            );
        parser.load_tokens([Token::id("x"), Token::Eof]);
        parser.load_lr_table(table);

        let err = parser.run().unwrap_err();
        match err {
            FrontError::Table { state, head } => {
                assert_eq!(state, Status(0));
                assert_eq!(head, NonTerminal::new("E"));
            }
            other => panic!("expected Table, got {other:?}"),
        }
    }

    #[test]
    fn run_without_table_is_an_internal_error() {
        let mut parser = new_parser();
        parser.load_tokens([Token::Eof]);
        let err = parser.run().unwrap_err();
        assert!(matches!(err, FrontError::Internal(_)));
    }

    #[test]
    fn exhausting_tokens_without_accept_is_an_internal_error() {
        let mut parser = new_parser();
        // A table that shifts everything and never accepts.
        let table = MapTable::default()
            .action(0, "id", Action::Shift(Status(0)))
            .action(0, "$", Action::Shift(Status(0)));
        parser.load_tokens([Token::id("x"), Token::Eof]);
        parser.load_lr_table(table);

        let err = parser.run().unwrap_err();
        assert!(matches!(err, FrontError::Internal(_)));
    }

    #[test]
    fn reduce_does_not_consume_the_lookahead() {
        let mut parser = new_parser();
        let events = Rc::new(RefCell::new(Vec::new()));
        parser.register_observer(Recorder {
            events: Rc::clone(&events),
        });
        parser.load_tokens([Token::id("x"), Token::Eof]);
        parser.load_lr_table(minimal_table());
        parser.run().unwrap();

        // Both reduces and the accept all fire on the same `$` lookahead:
        // one shift for one id token, three further events without input.
        let shifts = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Shift(..)))
            .count();
        assert_eq!(shifts, 1);
        assert_eq!(events.borrow().len(), 4);
    }

    /// Observer that fills in symbol kinds on reduce, exercising the shared
    /// symbol table handle received at registration.
    #[derive(Default)]
    struct KindFiller {
        symtab: Option<Rc<RefCell<SymbolTable>>>,
        names: Vec<String>,
    }

    impl ActionObserver for KindFiller {
        fn bind_symbol_table(&mut self, symtab: Rc<RefCell<SymbolTable>>) {
            self.symtab = Some(symtab);
        }

        fn on_reduce(&mut self, _state: Status, _production: &Production) {
            let symtab = self.symtab.as_ref().unwrap();
            let mut symtab = symtab.borrow_mut();
            for name in &self.names {
                if let Some(entry) = symtab.get_mut(name) {
                    entry.kind = Some(IdentKind::Int);
                }
            }
        }
    }

    /// Table for the single statement grammar S -> id = IntConst Semicolon.
    fn statement_table() -> MapTable {
        let body = vec![
            Symbol::Token(Token::id("a")),
            Symbol::Token(Token::simple("=")),
            Symbol::Token(Token::int_const("0")),
            Symbol::Token(Token::simple("Semicolon")),
        ];
        MapTable::default()
            .action(0, "id", Action::Shift(Status(1)))
            .action(1, "=", Action::Shift(Status(2)))
            .action(2, "IntConst", Action::Shift(Status(3)))
            .action(3, "Semicolon", Action::Shift(Status(4)))
            .action(4, "$", Action::Reduce(prod("S", body)))
            .action(5, "$", Action::Accept)
            .goto(0, "S", 5)
    }

    #[test]
    fn lexer_to_parser_pipeline_shares_the_symbol_table() {
        init_logger();
        let symtab = Rc::new(RefCell::new(SymbolTable::new()));

        let mut lexer = LexicalAnalyzer::new(Rc::clone(&symtab));
        lexer.load_source("a = 10 ;");
        lexer.run().unwrap();

        let mut parser = SyntaxAnalyzer::new(Rc::clone(&symtab));
        parser.register_observer(KindFiller {
            symtab: None,
            names: vec!["a".to_string()],
        });
        parser.load_tokens(lexer.tokens().to_vec());
        parser.load_lr_table(statement_table());
        parser.run().unwrap();

        let symtab = symtab.borrow();
        assert_eq!(symtab.get("a").unwrap().kind, Some(IdentKind::Int));
    }
}
