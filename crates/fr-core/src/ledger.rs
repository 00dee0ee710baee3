use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Accumulating affinity scores keyed by contestant name.
///
/// Entries are never deleted: an eliminated contestant keeps its final
/// score so the season history stays inspectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLedger {
    scores: HashMap<String, i32>,
}

impl RelationshipLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name with a score of 0. Returns false if it already had an entry.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.scores.contains_key(&name) {
            return false;
        }
        self.scores.insert(name, 0);
        true
    }

    /// The current score for a name, if registered.
    pub fn score(&self, name: &str) -> Option<i32> {
        self.scores.get(name).copied()
    }

    /// The current score for a name, treating unknown names as 0.
    pub fn score_or_zero(&self, name: &str) -> i32 {
        self.score(name).unwrap_or(0)
    }

    /// Add `delta` to a registered entry and return the new score.
    pub fn adjust(&mut self, name: &str, delta: i32) -> CoreResult<i32> {
        let score = self
            .scores
            .get_mut(name)
            .ok_or_else(|| CoreError::UnknownContestant(name.to_string()))?;
        *score = score.saturating_add(delta);
        Ok(*score)
    }

    /// Overwrite a registered entry.
    pub fn set(&mut self, name: &str, value: i32) -> CoreResult<()> {
        let score = self
            .scores
            .get_mut(name)
            .ok_or_else(|| CoreError::UnknownContestant(name.to_string()))?;
        *score = value;
        Ok(())
    }

    /// Whether a name has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    /// Number of entries, including eliminated contestants.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
