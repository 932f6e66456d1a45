//! Conversion file schema for pro2cmake.toml
//!
//! A conversion file lists the assignments of one project, in the order they
//! appear, together with the rules that map source values to target values.

use crate::normalize::ValueMap;
use crate::operation::{Operation, OperationKind};
use serde::{Deserialize, Serialize};

/// Root structure of pro2cmake.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConversionConfig {
    /// Value normalization rules
    #[serde(default, skip_serializing_if = "ValueMap::is_empty")]
    pub normalize: ValueMap,

    /// Assignments in source order
    #[serde(default, rename = "assign")]
    pub assignments: Vec<Assignment>,
}

/// One `KEY <op> values...` assignment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,

    /// Operator (`+=`, `*=`, `=`, `-=`) or name (`add`, `unique_add`, `set`, `remove`)
    pub op: OperationKind,

    #[serde(default)]
    pub values: Vec<String>,
}

impl Assignment {
    pub fn new<I, S>(key: impl Into<String>, op: OperationKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            op,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the operation, splitting blank-separated entries into separate values.
    pub fn operation(&self) -> Operation {
        Operation::new(
            self.op,
            self.values
                .iter()
                .flat_map(|entry| entry.split_whitespace())
                .map(str::to_string),
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.key.is_empty() {
            anyhow::bail!("Assignment key must not be empty");
        }
        if self.key.chars().any(char::is_whitespace) {
            anyhow::bail!("Invalid assignment key '{}': keys cannot contain whitespace", self.key);
        }
        Ok(())
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (position, assignment) in self.assignments.iter().enumerate() {
            assignment
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid assignment #{}: {}", position + 1, e))?;
        }
        if self.normalize.rename.keys().any(String::is_empty) {
            anyhow::bail!("Invalid [normalize.rename]: source values must not be empty");
        }
        Ok(())
    }
}
