//! # Lexical analyzer
//!
//! A character-by-character finite automaton that turns raw source text
//! into a token sequence terminated by exactly one end-of-input sentinel.
//!
//! The automaton has four states. `Start` dispatches on the character
//! class; `InIdentifier` and `InNumber` extend a pending buffer under
//! maximal munch and emit on the first non-extending character without
//! consuming it; `Punctuation` consumes exactly one character and emits its
//! simple token. A character matching no class fails with
//! [`FrontError::Lexical`] and no partial token list is kept.
//!
//! Identifier-shaped text that exactly matches a reserved form becomes a
//! simple token; anything else becomes an `id` token and is registered in
//! the shared [`SymbolTable`] on first sight.
//!
//! ## Example
//! ```rust
//! # use lrfront::{LexicalAnalyzer, SymbolTable, Token};
//! # use std::cell::RefCell;
//! # use std::rc::Rc;
//! let symtab = Rc::new(RefCell::new(SymbolTable::new()));
//! let mut lexer = LexicalAnalyzer::new(Rc::clone(&symtab));
//! lexer.load_source("a = 1 ;");
//! lexer.run().unwrap();
//! assert_eq!(
//!     lexer.tokens(),
//!     [
//!         Token::id("a"),
//!         Token::simple("="),
//!         Token::int_const("1"),
//!         Token::simple("Semicolon"),
//!         Token::Eof,
//!     ]
//! );
//! assert!(symtab.borrow().has("a"));
//! ```

use crate::error::{FrontError, Position};
use crate::symtab::SymbolTable;
use crate::token::Token;
use smartstring::alias::String;
use std::cell::RefCell;
use std::fmt::Write;
use std::fs;
use std::mem;
use std::path::Path;
use std::rc::Rc;

/// Automaton states. Every transition yields an explicit next state plus
/// whether the triggering character was consumed; there is no fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    InIdentifier,
    InNumber,
    Punctuation,
}

/// The lexical analyzer. Holds the loaded source, the shared symbol table
/// handle, and the token sequence once [`run`](LexicalAnalyzer::run) has
/// completed.
pub struct LexicalAnalyzer {
    symtab: Rc<RefCell<SymbolTable>>,
    source: std::string::String,
    tokens: Vec<Token>,
}

impl LexicalAnalyzer {
    /// Creates an analyzer bound to the shared symbol table.
    pub fn new(symtab: Rc<RefCell<SymbolTable>>) -> Self {
        Self {
            symtab,
            source: std::string::String::new(),
            tokens: Vec::new(),
        }
    }

    /// Loads source text directly.
    pub fn load_source(&mut self, source: impl Into<std::string::String>) {
        self.source = source.into();
    }

    /// Thin wrapper: reads the file at `path` as the source text.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), FrontError> {
        self.source = fs::read_to_string(path)?;
        Ok(())
    }

    /// Runs the automaton over the loaded source.
    ///
    /// On success the produced sequence ends in exactly one [`Token::Eof`]
    /// and every newly seen identifier has been registered in the symbol
    /// table. On failure the analyzer keeps no partial token list.
    pub fn run(&mut self) -> Result<(), FrontError> {
        let chars: Vec<char> = self.source.chars().collect();
        let mut tokens = Vec::new();
        let mut state = LexState::Start;
        let mut buf = String::new();
        let mut pos = Position::new(1, 1);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let (next, consumed) = match state {
                LexState::Start => {
                    if ch.is_whitespace() {
                        (LexState::Start, true)
                    } else if ch.is_alphabetic() {
                        (LexState::InIdentifier, false)
                    } else if ch.is_ascii_digit() {
                        (LexState::InNumber, false)
                    } else if Token::punct(ch).is_some() {
                        (LexState::Punctuation, false)
                    } else {
                        return Err(FrontError::Lexical { ch, pos });
                    }
                }
                LexState::InIdentifier => {
                    // Maximal munch; hyphen extends an in-progress
                    // identifier but never starts one.
                    if ch.is_alphanumeric() || ch == '-' {
                        buf.push(ch);
                        (LexState::InIdentifier, true)
                    } else {
                        tokens.push(self.classify_identifier(&mut buf)?);
                        (LexState::Start, false)
                    }
                }
                LexState::InNumber => {
                    if ch.is_ascii_digit() {
                        buf.push(ch);
                        (LexState::InNumber, true)
                    } else {
                        tokens.push(Token::int_const(mem::take(&mut buf)));
                        (LexState::Start, false)
                    }
                }
                LexState::Punctuation => match Token::punct(ch) {
                    Some(token) => {
                        tokens.push(token);
                        (LexState::Start, true)
                    }
                    // Unreachable by construction: Start only enters this
                    // state on a mapped character.
                    None => return Err(FrontError::Lexical { ch, pos }),
                },
            };
            if consumed {
                if ch == '\n' {
                    pos.line += 1;
                    pos.column = 1;
                } else {
                    pos.column += 1;
                }
                i += 1;
            }
            state = next;
        }

        // Flush a pending identifier or number cut off by end of input.
        match state {
            LexState::InIdentifier if !buf.is_empty() => {
                tokens.push(self.classify_identifier(&mut buf)?);
            }
            LexState::InNumber if !buf.is_empty() => {
                tokens.push(Token::int_const(mem::take(&mut buf)));
            }
            _ => {}
        }

        tokens.push(Token::Eof);
        log::trace!("lexed {} tokens", tokens.len());
        self.tokens = tokens;
        Ok(())
    }

    /// The token sequence produced by [`run`](LexicalAnalyzer::run).
    /// Repeated calls return the same sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Thin wrapper: writes one [`Display`](std::fmt::Display) line per
    /// token to the file at `path`.
    pub fn dump_tokens(&self, path: impl AsRef<Path>) -> Result<(), FrontError> {
        let mut out = std::string::String::new();
        for token in &self.tokens {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{token}");
        }
        fs::write(path, out)?;
        Ok(())
    }

    fn classify_identifier(&self, buf: &mut String) -> Result<Token, FrontError> {
        let text = mem::take(buf);
        if Token::is_reserved(&text) {
            return Ok(Token::simple(text));
        }
        let mut symtab = self.symtab.borrow_mut();
        if !symtab.has(&text) {
            symtab.add(&text)?;
        }
        Ok(Token::id(text))
    }
}
