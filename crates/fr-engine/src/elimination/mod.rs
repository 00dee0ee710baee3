//! Elimination policies.
//!
//! Both policies split the current roster into `kept` and `removed` without
//! touching the game state; the season commits the partition afterwards.

pub mod ranked;
pub mod weighted;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use fr_core::{Character, RelationshipLedger, Roster};

use crate::error::EngineResult;

pub use ranked::{rank, rank_characters, ranked_cutoff};
pub use weighted::{elimination_weight, pick_index, weighted_draw};

/// How a round chooses who goes home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EliminationPolicy {
    /// Lowest scores go home; ties broken by name.
    #[default]
    Ranked,
    /// Roulette draw without replacement, weighted by score.
    Weighted,
}

impl EliminationPolicy {
    /// Parse a policy name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ranked" | "cutoff" => Some(Self::Ranked),
            "weighted" | "random" => Some(Self::Weighted),
            _ => None,
        }
    }
}

impl fmt::Display for EliminationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked => write!(f, "ranked"),
            Self::Weighted => write!(f, "weighted"),
        }
    }
}

/// The outcome of one elimination: who stays and who goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Contestants who stay, in the policy's order.
    pub kept: Vec<Character>,
    /// Contestants who go home, in elimination order.
    pub removed: Vec<Character>,
}

impl Partition {
    /// Names of removed contestants in elimination order.
    pub fn removed_names(&self) -> Vec<String> {
        self.removed.iter().map(|c| c.name.clone()).collect()
    }

    /// Names of kept contestants.
    pub fn kept_names(&self) -> Vec<String> {
        self.kept.iter().map(|c| c.name.clone()).collect()
    }

    /// Whether the player was removed.
    pub fn player_removed(&self) -> bool {
        self.removed.iter().any(|c| c.is_player)
    }
}

/// Run `policy` over the roster.
pub fn eliminate<R: Rng + ?Sized>(
    policy: EliminationPolicy,
    roster: &Roster,
    ledger: &RelationshipLedger,
    count: usize,
    rng: &mut R,
) -> EngineResult<Partition> {
    match policy {
        EliminationPolicy::Ranked => ranked_cutoff(roster, ledger, count),
        EliminationPolicy::Weighted => weighted_draw(roster, ledger, count, rng),
    }
}
