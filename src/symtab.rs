//! # Symbol table
//!
//! A flat, insertion-ordered symbol table built on [`indexmap::IndexMap`].
//!
//! Each identifier string maps to at most one [`SymbolEntry`] for the
//! lifetime of a compilation unit. The lexical analyzer registers names as
//! it encounters them; fields that can only be determined by later phases
//! (currently the identifier's kind) stay `None` until an observer or a
//! downstream pass fills them in.
//!
//! ## Example
//! ```rust
//! # use lrfront::SymbolTable;
//! let mut st = SymbolTable::new();
//! st.add("a").unwrap();
//! assert!(st.has("a"));
//! assert!(st.get("a").unwrap().kind.is_none());
//! assert!(st.add("a").is_err()); // never a duplicate entry
//! ```

use indexmap::IndexMap;
use indexmap::map::Entry;
use smartstring::alias::String;
use thiserror::Error;

/// Errors that can occur when operating on a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymTabError {
    /// Attempted to add a name that is already present.
    #[error("duplicate symbol {name:?}")]
    Duplicate {
        /// The name that was added twice.
        name: String,
    },
}

/// Kind information attached to an identifier by phases after lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    /// Machine integer.
    Int,
}

/// One symbol table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// The identifier text.
    pub name: String,
    /// Unset until a later phase populates it.
    pub kind: Option<IdentKind>,
}

/// Insertion-ordered map from identifier name to [`SymbolEntry`].
#[derive(Debug, Default)]
pub struct SymbolTable {
    tab: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    /// Creates a new, empty symbol table.
    pub fn new() -> Self {
        Self {
            tab: IndexMap::new(),
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Whether `name` is present.
    pub fn has(&self, name: &str) -> bool {
        self.tab.contains_key(name)
    }

    /// Adds a fresh entry for `name` with all later-phase fields unset.
    ///
    /// Adding a name that is already present is an invariant violation and
    /// returns [`SymTabError::Duplicate`]; the existing entry is untouched.
    pub fn add(&mut self, name: impl AsRef<str>) -> Result<(), SymTabError> {
        let name = String::from(name.as_ref());
        match self.tab.entry(name.clone()) {
            Entry::Occupied(_) => Err(SymTabError::Duplicate { name }),
            Entry::Vacant(v) => {
                v.insert(SymbolEntry { name, kind: None });
                Ok(())
            }
        }
    }

    /// The entry for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.tab.get(name)
    }

    /// Mutable access to the entry for `name`, for later-phase fill-in.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut SymbolEntry> {
        self.tab.get_mut(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.tab.values()
    }
}
