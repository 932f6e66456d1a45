//! Value normalizers applied while merging operations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalizer that leaves every value as it is.
pub fn identity(value: &str) -> String {
    value.to_string()
}

/// Config-driven normalizer: strips a known prefix, then applies exact renames.
///
/// `[normalize]` table of the conversion file:
///
/// ```toml
/// [normalize]
/// strip_prefix = ["$$PWD/"]
///
/// [normalize.rename]
/// core = "Qt::Core"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMap {
    /// Exact value renames, looked up after prefix stripping
    #[serde(default)]
    pub rename: BTreeMap<String, String>,

    /// Prefixes removed from values; the first match wins
    #[serde(default)]
    pub strip_prefix: Vec<String>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rename.insert(from.into(), to.into());
        self
    }

    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix.push(prefix.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rename.is_empty() && self.strip_prefix.is_empty()
    }

    pub fn normalize(&self, value: &str) -> String {
        let stripped = self
            .strip_prefix
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| value.strip_prefix(prefix.as_str()))
            .unwrap_or(value);

        match self.rename.get(stripped) {
            Some(renamed) => renamed.clone(),
            None => stripped.to_string(),
        }
    }

    /// Parse a `FROM=TO` rename pair.
    pub fn parse_rename(pair: &str) -> anyhow::Result<(String, String)> {
        let (from, to) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid rename '{}': expected FROM=TO", pair))?;
        let from = from.trim();
        if from.is_empty() {
            anyhow::bail!("Invalid rename '{}': FROM must not be empty", pair);
        }
        Ok((from.to_string(), to.trim().to_string()))
    }
}
