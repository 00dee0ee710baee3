use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Append-only, ordered record of eliminated contestant names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminatedSet {
    names: Vec<String>,
}

impl EliminatedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name. A name can only ever be added once.
    pub fn push(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(CoreError::AlreadyEliminated(name));
        }
        self.names.push(name);
        Ok(())
    }

    /// Whether a name has been eliminated.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in elimination order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of eliminated contestants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nobody has been eliminated yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
