//! Terminal check after each elimination.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::elimination::Partition;

/// Whether the season goes on after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalStatus {
    /// More rounds to play.
    Continuing,
    /// The player went home.
    PlayerEliminated,
    /// The player is the last one standing.
    PlayerWon,
}

impl TerminalStatus {
    /// Whether the season stops here.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuing => write!(f, "continuing"),
            Self::PlayerEliminated => write!(f, "player eliminated"),
            Self::PlayerWon => write!(f, "player won"),
        }
    }
}

/// Classify a partition.
pub fn check_terminal(partition: &Partition) -> TerminalStatus {
    if partition.player_removed() {
        TerminalStatus::PlayerEliminated
    } else if partition.kept.len() == 1 && partition.kept[0].is_player {
        TerminalStatus::PlayerWon
    } else {
        TerminalStatus::Continuing
    }
}
