//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of season events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Final Rose Season Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Introduction {
                    target,
                    contestants,
                    ..
                } => {
                    out.push_str("## Introductions\n\n");
                    out.push_str(&format!(
                        "**{target}** meets {contestants} contestants.\n\n"
                    ));
                }
                JournalEntry::FirstImpression {
                    position, total, ..
                } => {
                    out.push_str(&format!(
                        "**First impression**: you placed {position} of {total}.\n\n"
                    ));
                }
                JournalEntry::Interaction {
                    contestant,
                    delta,
                    chemistry,
                    ..
                } => {
                    let spark = if *chemistry { " *chemistry*" } else { "" };
                    out.push_str(&format!("- Talked with {contestant} ({delta:+}){spark}\n"));
                }
                JournalEntry::Activity {
                    activity,
                    total,
                    success,
                    ..
                } => {
                    let result = if *success { "success" } else { "no luck" };
                    out.push_str(&format!("- {activity}: {total}, **{result}**\n"));
                }
                JournalEntry::GroupDate { stat, winner, .. } => {
                    out.push_str(&format!("- Group date ({stat}): {winner} stood out\n"));
                }
                JournalEntry::Drama {
                    involved, delta, ..
                } => {
                    out.push_str(&format!("- Drama: {} ({delta:+})\n", involved.join(" vs ")));
                }
                JournalEntry::Ceremony {
                    round,
                    label,
                    eliminated,
                    ..
                } => {
                    out.push_str(&format!("\n## Round {round}: {label}\n\n"));
                    out.push_str(&format!("Sent home: {}\n\n", eliminated.join(", ")));
                }
                JournalEntry::Verdict {
                    outcome, winner, ..
                } => {
                    out.push_str(&format!("## Verdict\n\n**{outcome}**"));
                    if let Some(w) = winner {
                        out.push_str(&format!(": final rose to {w}"));
                    }
                    out.push_str("\n\n");
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Final Rose Season Journal\n=========================\n\n");
        for entry in &self.entries {
            let line = match entry {
                JournalEntry::Introduction {
                    target,
                    contestants,
                    ..
                } => format!("Introductions: {target} meets {contestants} contestants"),
                JournalEntry::FirstImpression {
                    position, total, ..
                } => format!("First impression: {position} of {total}"),
                JournalEntry::Interaction {
                    contestant,
                    delta,
                    chemistry,
                    ..
                } => format!(
                    "Interaction: {contestant} ({delta:+}){}",
                    if *chemistry { " chemistry" } else { "" }
                ),
                JournalEntry::Activity {
                    activity,
                    total,
                    success,
                    ..
                } => format!(
                    "Activity: {activity} = {total} ({})",
                    if *success { "success" } else { "failure" }
                ),
                JournalEntry::GroupDate { stat, winner, .. } => {
                    format!("Group date: {stat}, won by {winner}")
                }
                JournalEntry::Drama {
                    involved, delta, ..
                } => format!("Drama: {} ({delta:+})", involved.join(" vs ")),
                JournalEntry::Ceremony {
                    round,
                    label,
                    eliminated,
                    ..
                } => format!("Round {round} ({label}): {}", eliminated.join(", ")),
                JournalEntry::Verdict {
                    outcome, winner, ..
                } => match winner {
                    Some(w) => format!("Verdict: {outcome}, final rose to {w}"),
                    None => format!("Verdict: {outcome}"),
                },
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
