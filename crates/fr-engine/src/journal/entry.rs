//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the season journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The cast arrived and met the target.
    Introduction {
        /// Target's name.
        target: String,
        /// Number of contestants seated.
        contestants: usize,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// First impression standings.
    FirstImpression {
        /// Player's position.
        position: usize,
        /// Size of the field.
        total: usize,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// The player spent time with a contestant.
    Interaction {
        /// Who.
        contestant: String,
        /// Score change.
        delta: i32,
        /// Whether chemistry sparked.
        chemistry: bool,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// The player took part in a round activity.
    Activity {
        /// Activity label.
        activity: String,
        /// Die roll plus stat.
        total: i32,
        /// Whether it succeeded.
        success: bool,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A group date.
    GroupDate {
        /// Stat the date tested.
        stat: String,
        /// Best showing.
        winner: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// An argument at the cocktail party.
    Drama {
        /// Who argued.
        involved: Vec<String>,
        /// Score change for each of them.
        delta: i32,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A rose ceremony.
    Ceremony {
        /// Round number.
        round: u32,
        /// Ceremony label.
        label: String,
        /// Who went home.
        eliminated: Vec<String>,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// How the season ended for the player.
    Verdict {
        /// "won" or "eliminated".
        outcome: String,
        /// Who received the final rose, if anyone did.
        winner: Option<String>,
        /// When.
        timestamp: DateTime<Utc>,
    },
}
