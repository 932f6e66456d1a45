//! Per-variable operation lists and their evaluation
//!
//! A [`Scope`] records every assignment made to each variable, in order.
//! Evaluating a variable folds its operations into a [`VariableState`]:
//! the `old` track with values kept as written, the `new` track with values
//! mapped through the caller's normalizer.

use crate::normalize::identity;
use crate::operation::Operation;
use serde::Serialize;
use std::collections::HashMap;

/// Source and target values of one variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableState {
    pub old: Vec<String>,
    pub new: Vec<String>,
}

impl VariableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one operation to both tracks.
    pub fn apply<F>(&mut self, op: &Operation, normalize: F)
    where
        F: Fn(&str) -> String,
    {
        let new = op.process(&self.new, &self.old, normalize);
        self.old = op.process(&self.old, &self.old, identity);
        self.new = new;
    }
}

/// Assignments grouped by variable, keys kept in first-assignment order.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<Operation>)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, op: Operation) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(op),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![op]));
            }
        }
    }

    pub fn operations(&self, key: &str) -> &[Operation] {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold every operation recorded for `key`, starting from an empty state.
    pub fn evaluate<F>(&self, key: &str, normalize: F) -> VariableState
    where
        F: Fn(&str) -> String,
    {
        let mut state = VariableState::new();
        for op in self.operations(key) {
            state.apply(op, &normalize);
        }
        state
    }

    /// Target values of `key`.
    pub fn get<F>(&self, key: &str, normalize: F) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        self.evaluate(key, normalize).new
    }
}
