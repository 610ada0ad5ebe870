//! The ResultRegistry - execution-scoped alias lookup.

use std::collections::HashMap;

use stitch_core::CapturedResult;

/// Ordered alias → captured-result mapping for one execution.
///
/// A node mutation's result is inserted under its response alias once the
/// mutation has fully resolved; edge mutations resolved later in the same
/// root selection set look results up by alias. The registry is
/// write-once-per-alias in the common case, read-many, and dropped with
/// its execution. A second insertion under an existing alias overwrites
/// the first (last-write-wins), matching how a query document cannot
/// legally reuse a response key without aliasing.
#[derive(Debug, Default)]
pub struct ResultRegistry {
    /// Captured results by alias.
    entries: HashMap<String, CapturedResult>,
    /// Aliases in first-insertion order.
    order: Vec<String>,
}

impl ResultRegistry {
    /// Create an empty registry. Called once per execution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the result captured under `alias`.
    ///
    /// An overwrite keeps the alias's original position in insertion
    /// order.
    pub fn put(&mut self, alias: impl Into<String>, result: CapturedResult) {
        let alias = alias.into();
        if !self.entries.contains_key(&alias) {
            self.order.push(alias.clone());
        }
        self.entries.insert(alias, result);
    }

    /// Look up the result captured under `alias`.
    ///
    /// `None` means the alias has no entry yet: never produced, misspelled,
    /// or produced in a different execution. Callers must not treat an
    /// absent entry as an empty value.
    pub fn get(&self, alias: &str) -> Option<&CapturedResult> {
        self.entries.get(alias)
    }

    /// Check whether an entry exists for `alias`.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no result has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases in first-insertion order, which follows the source order of
    /// the root-level fields that produced them.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
