//! Usage thresholds and the ordered disambiguator map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum-usage threshold for a percentage metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageThreshold {
    /// Usage percentage at which the alarm fires
    pub max_usage_percent: f64,
}

impl UsageThreshold {
    /// Create a threshold at the given usage percentage
    pub fn new(max_usage_percent: f64) -> Self {
        Self { max_usage_percent }
    }
}

/// Insertion-ordered map from disambiguator to threshold
///
/// The disambiguator distinguishes multiple alarms of the same kind on one
/// metric (for example `"Warning"` and `"Critical"` on CPU usage). Iteration
/// order equals insertion order, which fixes the order annotations are drawn
/// and alarms are exported. An empty set is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    entries: IndexMap<String, UsageThreshold>,
}

impl ThresholdSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single entry
    pub fn single(disambiguator: impl Into<String>, threshold: UsageThreshold) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(disambiguator.into(), threshold);
        Self { entries }
    }

    /// Add an entry; a repeated disambiguator is a configuration error
    pub fn insert(
        &mut self,
        disambiguator: impl Into<String>,
        threshold: UsageThreshold,
    ) -> Result<()> {
        let disambiguator = disambiguator.into();
        if self.entries.contains_key(&disambiguator) {
            return Err(Error::Configuration(format!(
                "duplicate disambiguator '{disambiguator}' in threshold set"
            )));
        }
        self.entries.insert(disambiguator, threshold);
        Ok(())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UsageThreshold)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
