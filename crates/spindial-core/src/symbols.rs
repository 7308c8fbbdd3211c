//! Symbol entries and the dial ring.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DialError, DialResult};

/// Display label of the synthetic back entry.
pub const BACK_LABEL: &str = "<";

/// A selectable symbol: a short display label and the value it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry<T> {
    /// Label drawn next to the entry's sector.
    pub label: String,
    /// Value appended to the sequence when the entry is selected.
    pub value: T,
}

impl<T> SymbolEntry<T> {
    /// Create a new symbol entry.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One sector's worth of dial content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialEntry<T> {
    /// A caller-supplied symbol.
    Symbol(SymbolEntry<T>),
    /// The synthetic entry that retracts the accumulated sequence.
    Back,
}

impl<T> DialEntry<T> {
    /// The label drawn for this entry.
    pub fn label(&self) -> &str {
        match self {
            DialEntry::Symbol(entry) => &entry.label,
            DialEntry::Back => BACK_LABEL,
        }
    }

    /// Whether this is the back entry.
    pub fn is_back(&self) -> bool {
        matches!(self, DialEntry::Back)
    }
}

/// The full ring of dial entries: the caller's symbols in order, followed by
/// exactly one back entry.
#[derive(Debug, Clone)]
pub struct SymbolRing<T> {
    entries: Vec<DialEntry<T>>,
}

impl<T> SymbolRing<T> {
    /// Build a ring from caller symbols, appending the back entry.
    ///
    /// Labels key the sectors, so they must be unique and must not collide
    /// with [`BACK_LABEL`].
    pub fn new(symbols: Vec<SymbolEntry<T>>) -> DialResult<Self> {
        if symbols.is_empty() {
            return Err(DialError::EmptySymbols);
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if symbol.label == BACK_LABEL || !seen.insert(symbol.label.as_str()) {
                return Err(DialError::DuplicateLabel(symbol.label.clone()));
            }
        }

        let mut entries: Vec<DialEntry<T>> =
            symbols.into_iter().map(DialEntry::Symbol).collect();
        entries.push(DialEntry::Back);

        Ok(Self { entries })
    }

    /// Total entry count, including the back entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring has no entries. Never true for a constructed ring.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of caller symbols, excluding the back entry.
    pub fn symbol_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `index`, if within the ring.
    pub fn get(&self, index: usize) -> Option<&DialEntry<T>> {
        self.entries.get(index)
    }

    /// All entries in sector order.
    pub fn entries(&self) -> &[DialEntry<T>] {
        &self.entries
    }
}
