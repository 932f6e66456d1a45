//! Reconciliation of negated removal markers
//!
//! `Remove` cannot delete a value that was never assigned, so it leaves a
//! `-value` marker in the merged list. This pass splits those markers off so
//! the caller can report them instead of emitting them as values.

use crate::operation::REMOVAL_MARKER;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub values: Vec<String>,
    pub removals: Vec<String>,
}

pub fn partition_removals(values: &[String]) -> Reconciled {
    let mut reconciled = Reconciled::default();
    for value in values {
        match value.strip_prefix(REMOVAL_MARKER) {
            Some(removed) if !removed.is_empty() => reconciled.removals.push(removed.to_string()),
            _ => reconciled.values.push(value.clone()),
        }
    }
    reconciled
}
