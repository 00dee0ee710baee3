//! Read-only views handed out at round boundaries.

use serde::{Deserialize, Serialize};

use fr_core::{Character, RelationshipLedger, Roster};

use crate::elimination::{EliminationPolicy, Partition, rank_characters};
use crate::terminal::TerminalStatus;

/// One line of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position after sorting.
    pub position: usize,
    /// Contestant name.
    pub name: String,
    /// Relationship score at the time of the snapshot.
    pub score: i32,
    /// Whether this is the player.
    pub is_player: bool,
    /// Whether this contestant went home this round.
    pub eliminated: bool,
}

/// State of the competition at a round boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Round number; 0 for the first impression standings.
    pub round: u32,
    /// Ceremony label.
    pub label: String,
    /// Policy used, if anyone was eliminated.
    pub policy: Option<EliminationPolicy>,
    /// Everyone who started the round, best first.
    pub ranked: Vec<RankedEntry>,
    /// Names sent home this round, in elimination order.
    pub eliminated_this_round: Vec<String>,
    /// Where the season stands afterwards.
    pub status: TerminalStatus,
}

fn entries<'a>(
    members: impl IntoIterator<Item = &'a Character>,
    ledger: &RelationshipLedger,
    removed: &[String],
) -> Vec<RankedEntry> {
    rank_characters(members, ledger)
        .into_iter()
        .enumerate()
        .map(|(i, c)| RankedEntry {
            position: i + 1,
            name: c.name.clone(),
            score: ledger.score_or_zero(&c.name),
            is_player: c.is_player,
            eliminated: removed.contains(&c.name),
        })
        .collect()
}

impl RoundSnapshot {
    /// Standings with nobody eliminated.
    pub fn standings(label: impl Into<String>, roster: &Roster, ledger: &RelationshipLedger) -> Self {
        Self {
            round: 0,
            label: label.into(),
            policy: None,
            ranked: entries(roster.iter(), ledger, &[]),
            eliminated_this_round: Vec::new(),
            status: TerminalStatus::Continuing,
        }
    }

    /// Snapshot of a finished ceremony.
    pub fn ceremony(
        round: u32,
        label: impl Into<String>,
        policy: EliminationPolicy,
        partition: &Partition,
        ledger: &RelationshipLedger,
        status: TerminalStatus,
    ) -> Self {
        let removed = partition.removed_names();
        Self {
            round,
            label: label.into(),
            policy: Some(policy),
            ranked: entries(
                partition.kept.iter().chain(partition.removed.iter()),
                ledger,
                &removed,
            ),
            eliminated_this_round: removed,
            status,
        }
    }

    /// The player's line, if they started the round.
    pub fn player_entry(&self) -> Option<&RankedEntry> {
        self.ranked.iter().find(|e| e.is_player)
    }

    /// Plain-text leaderboard, one contestant per line.
    pub fn render_leaderboard(&self) -> String {
        let width = self.ranked.len().to_string().len();
        let mut out = String::new();
        for e in &self.ranked {
            let marker = if e.eliminated { "❌" } else { "🌹" };
            let you = if e.is_player { " (you)" } else { "" };
            out.push_str(&format!(
                "{marker} {:>width$}. {}{you}: {}\n",
                e.position, e.name, e.score
            ));
        }
        out.trim_end().to_string()
    }
}
