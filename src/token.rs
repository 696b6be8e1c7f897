//! # Token model
//!
//! A [`Token`] is the lexical unit exchanged between the lexical analyzer
//! and the parse driver. It is one of:
//!
//! - [`Token::Simple`] — a fixed-text keyword or punctuation token. Two
//!   simple tokens with identical text are indistinguishable and
//!   interchangeable.
//! - [`Token::Normal`] — a token carrying a payload: an identifier or an
//!   integer literal, classified by [`NormalKind`].
//! - [`Token::Eof`] — the end-of-input sentinel that terminates every token
//!   sequence.
//!
//! The reserved lexical forms are a closed set checked by literal-text
//! membership: the keywords `int` and `return` plus the single-character
//! punctuation `, ; = + - * / ( )`. The semicolon's simple-token text is
//! `Semicolon`; every other punctuation token's text is the character
//! itself.

use smartstring::alias::String;

/// Classification of payload-carrying tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalKind {
    /// Identifier.
    Id,
    /// Integer literal.
    IntConst,
}

impl NormalKind {
    /// The terminal name an LR table keys this kind on.
    pub const fn name(self) -> &'static str {
        match self {
            NormalKind::Id => "id",
            NormalKind::IntConst => "IntConst",
        }
    }
}

/// A lexical unit produced by the lexical analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Fixed-text keyword or punctuation.
    Simple(String),
    /// Identifier or integer literal with its source text as payload.
    Normal {
        /// Payload classification.
        kind: NormalKind,
        /// The matched source text.
        text: String,
    },
    /// End-of-input sentinel.
    Eof,
}

impl Token {
    /// A simple token with the given fixed text.
    pub fn simple(text: impl Into<String>) -> Self {
        Token::Simple(text.into())
    }

    /// An identifier token carrying `text`.
    pub fn id(text: impl Into<String>) -> Self {
        Token::Normal {
            kind: NormalKind::Id,
            text: text.into(),
        }
    }

    /// An integer-literal token carrying the digit run `text`.
    pub fn int_const(text: impl Into<String>) -> Self {
        Token::Normal {
            kind: NormalKind::IntConst,
            text: text.into(),
        }
    }

    /// Membership test for the closed reserved set: the keywords plus the
    /// simple texts of the punctuation tokens.
    pub fn is_reserved(text: &str) -> bool {
        matches!(
            text,
            "int" | "return" | "," | "Semicolon" | "=" | "+" | "-" | "*" | "/" | "(" | ")"
        )
    }

    /// The simple token for a punctuation character, or `None` when the
    /// character is not in the fixed single-character punctuation set.
    pub fn punct(ch: char) -> Option<Token> {
        let text = match ch {
            ',' => ",",
            ';' => "Semicolon",
            '=' => "=",
            '+' => "+",
            '-' => "-",
            '*' => "*",
            '/' => "/",
            '(' => "(",
            ')' => ")",
            _ => return None,
        };
        Some(Token::simple(text))
    }

    /// The terminal name an LR table keys its actions on: a simple token's
    /// own text, the kind name of a normal token, `$` for the sentinel.
    pub fn terminal_text(&self) -> &str {
        match self {
            Token::Simple(text) => text,
            Token::Normal { kind, .. } => kind.name(),
            Token::Eof => "$",
        }
    }

    /// The matched source text, or `$` for the sentinel.
    pub fn text(&self) -> &str {
        match self {
            Token::Simple(text) => text,
            Token::Normal { text, .. } => text,
            Token::Eof => "$",
        }
    }
}

/// Stable one-line rendering used by the token dump: `(kind)` for simple
/// tokens, `(kind, payload)` for normal ones, `(eof)` for the sentinel.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Simple(text) => write!(f, "({text})"),
            Token::Normal { kind, text } => write!(f, "({}, {})", kind.name(), text),
            Token::Eof => write!(f, "(eof)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_tokens_with_equal_text_are_interchangeable() {
        assert_eq!(Token::simple("+"), Token::simple("+"));
        assert_ne!(Token::simple("+"), Token::simple("-"));
    }

    #[test]
    fn keywords_and_punctuation_texts_are_reserved() {
        assert!(Token::is_reserved("int"));
        assert!(Token::is_reserved("return"));
        assert!(Token::is_reserved("Semicolon"));
        assert!(Token::is_reserved("("));
        assert!(!Token::is_reserved("main"));
        assert!(!Token::is_reserved("integer"));
    }

    #[test]
    fn semicolon_maps_to_its_named_simple_token() {
        assert_eq!(Token::punct(';'), Some(Token::simple("Semicolon")));
        assert_eq!(Token::punct('+'), Some(Token::simple("+")));
        assert_eq!(Token::punct('@'), None);
    }

    #[test]
    fn terminal_text_distinguishes_token_classes() {
        assert_eq!(Token::simple("int").terminal_text(), "int");
        assert_eq!(Token::id("abc").terminal_text(), "id");
        assert_eq!(Token::int_const("42").terminal_text(), "IntConst");
        assert_eq!(Token::Eof.terminal_text(), "$");
    }

    #[test]
    fn display_is_stable_across_token_classes() {
        assert_eq!(Token::simple("int").to_string(), "(int)");
        assert_eq!(Token::id("abc").to_string(), "(id, abc)");
        assert_eq!(Token::int_const("42").to_string(), "(IntConst, 42)");
        assert_eq!(Token::Eof.to_string(), "(eof)");
    }
}
