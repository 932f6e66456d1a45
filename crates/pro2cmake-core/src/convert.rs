//! Conversion driver: conversion file -> scope -> per-variable report

use crate::config::ConversionConfig;
use crate::reconcile::partition_removals;
use crate::scope::Scope;
use serde::Serialize;

/// Converted result of a single variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableReport {
    pub key: String,
    /// Operations applied, in order, as `<operator>(values)`
    pub operations: Vec<String>,
    /// Source values without normalization
    pub old: Vec<String>,
    /// Target values
    pub values: Vec<String>,
    /// Values removed without ever being assigned
    pub removals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub variables: Vec<VariableReport>,
}

impl ConversionReport {
    pub fn get(&self, key: &str) -> Option<&VariableReport> {
        self.variables.iter().find(|variable| variable.key == key)
    }

    /// Keep only the given keys, in the order requested.
    pub fn select(&self, keys: &[String]) -> anyhow::Result<ConversionReport> {
        let variables = keys
            .iter()
            .map(|key| {
                self.get(key).cloned().ok_or_else(|| {
                    anyhow::anyhow!("Variable '{}' is not assigned in the conversion file", key)
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(ConversionReport { variables })
    }
}

/// Build a scope from the conversion file's assignments, in file order.
pub fn build_scope(config: &ConversionConfig) -> Scope {
    let mut scope = Scope::new();
    for assignment in &config.assignments {
        scope.push(assignment.key.as_str(), assignment.operation());
    }
    scope
}

/// Evaluate every assigned variable of the conversion file.
pub fn convert(config: &ConversionConfig) -> ConversionReport {
    let scope = build_scope(config);
    let normalize = |value: &str| config.normalize.normalize(value);

    let variables = scope
        .keys()
        .map(|key| {
            let state = scope.evaluate(key, normalize);
            let reconciled = partition_removals(&state.new);
            tracing::debug!(
                key,
                operations = scope.operations(key).len(),
                values = reconciled.values.len(),
                removals = reconciled.removals.len(),
                "Evaluated variable"
            );
            VariableReport {
                key: key.to_string(),
                operations: scope.operations(key).iter().map(ToString::to_string).collect(),
                old: state.old,
                values: reconciled.values,
                removals: reconciled.removals,
            }
        })
        .collect();

    ConversionReport { variables }
}
