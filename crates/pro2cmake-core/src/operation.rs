//! Assignment operations and their merge semantics
//!
//! Every project-file assignment (`+=`, `*=`, `=`, `-=`) becomes an
//! [`Operation`]. Applying it to the values accumulated so far yields the
//! new value list for the variable:
//!
//! - `Add` appends, duplicates allowed
//! - `UniqueAdd` appends values that are not present yet
//! - `Set` replaces whatever was there
//! - `Remove` drops present values and records absent ones as `-value`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Prefix marking a value whose removal could not be applied in place.
pub const REMOVAL_MARKER: char = '-';

/// The kind of assignment an operation performs.
///
/// Deserializes from either the operator (`+=`) or the name (`add`), and
/// serializes as the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationKind {
    Add,
    UniqueAdd,
    Set,
    Remove,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::UniqueAdd,
        OperationKind::Set,
        OperationKind::Remove,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::UniqueAdd => "unique_add",
            OperationKind::Set => "set",
            OperationKind::Remove => "remove",
        }
    }

    /// Assignment operator as written in project files.
    pub fn operator(self) -> &'static str {
        match self {
            OperationKind::Add => "+=",
            OperationKind::UniqueAdd => "*=",
            OperationKind::Set => "=",
            OperationKind::Remove => "-=",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an operator or operation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation '{0}' (expected one of +=, *=, =, -= or add, unique_add, set, remove)")]
pub struct ParseOperationError(pub String);

impl FromStr for OperationKind {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.operator() == trimmed || kind.as_str() == trimmed)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

impl TryFrom<String> for OperationKind {
    type Error = ParseOperationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationKind> for String {
    fn from(kind: OperationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single assignment, carrying the values it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(Vec<String>),
    UniqueAdd(Vec<String>),
    Set(Vec<String>),
    Remove(Vec<String>),
}

impl Operation {
    pub fn new<I, S>(kind: OperationKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        match kind {
            OperationKind::Add => Operation::Add(values),
            OperationKind::UniqueAdd => Operation::UniqueAdd(values),
            OperationKind::Set => Operation::Set(values),
            OperationKind::Remove => Operation::Remove(values),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add(_) => OperationKind::Add,
            Operation::UniqueAdd(_) => OperationKind::UniqueAdd,
            Operation::Set(_) => OperationKind::Set,
            Operation::Remove(_) => OperationKind::Remove,
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Operation::Add(values)
            | Operation::UniqueAdd(values)
            | Operation::Set(values)
            | Operation::Remove(values) => values,
        }
    }

    /// Merge this operation into the current state of a variable.
    ///
    /// `new_values` holds what the target build system has accumulated so far,
    /// `old_values` the unconverted source values. `normalize` maps each of
    /// this operation's values into target form before it is compared or
    /// emitted. The stored values are never modified.
    pub fn process<F>(
        &self,
        new_values: &[String],
        _old_values: &[String],
        normalize: F,
    ) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        let normalized = self.values().iter().map(|v| normalize(v.as_str()));

        match self {
            Operation::Add(_) => new_values.iter().cloned().chain(normalized).collect(),
            Operation::UniqueAdd(_) => {
                let mut result = new_values.to_vec();
                let mut seen: HashSet<String> = new_values.iter().cloned().collect();
                for value in normalized {
                    if seen.insert(value.clone()) {
                        result.push(value);
                    }
                }
                result
            }
            Operation::Set(_) => normalized.collect(),
            Operation::Remove(_) => {
                let removals: Vec<String> = normalized.collect();
                let removal_set: HashSet<&str> = removals.iter().map(String::as_str).collect();
                let present: HashSet<&str> = new_values.iter().map(String::as_str).collect();

                // Present values are dropped here; absent ones are left for a later pass.
                let mut result: Vec<String> = new_values
                    .iter()
                    .filter(|v| !removal_set.contains(v.as_str()))
                    .cloned()
                    .collect();
                result.extend(
                    removals
                        .iter()
                        .filter(|v| !present.contains(v.as_str()))
                        .map(|v| format!("{REMOVAL_MARKER}{v}")),
                );
                result
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind().operator(), self.values().join(", "))
    }
}
