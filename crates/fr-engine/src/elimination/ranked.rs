//! Ranked-cutoff elimination.

use std::cmp::Ordering;

use tracing::debug;

use fr_core::{Character, RelationshipLedger, Roster};

use crate::elimination::Partition;
use crate::error::{EngineError, EngineResult};

/// Order contestants by score descending, then name ascending.
///
/// The order is total, so the same ledger always ranks the same way.
pub fn rank<'a>(roster: &'a Roster, ledger: &RelationshipLedger) -> Vec<&'a Character> {
    rank_characters(roster.iter(), ledger)
}

/// [`rank`] over any set of characters.
pub fn rank_characters<'a>(
    characters: impl IntoIterator<Item = &'a Character>,
    ledger: &RelationshipLedger,
) -> Vec<&'a Character> {
    let mut ranked: Vec<&Character> = characters.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b, ledger));
    ranked
}

fn compare(a: &Character, b: &Character, ledger: &RelationshipLedger) -> Ordering {
    ledger
        .score_or_zero(&b.name)
        .cmp(&ledger.score_or_zero(&a.name))
        .then_with(|| a.name.cmp(&b.name))
}

/// Remove the `remove_count` lowest-ranked contestants.
///
/// `kept` is in rank order; `removed` is worst first. `remove_count` must be
/// smaller than the roster.
pub fn ranked_cutoff(
    roster: &Roster,
    ledger: &RelationshipLedger,
    remove_count: usize,
) -> EngineResult<Partition> {
    if remove_count >= roster.len() {
        return Err(EngineError::RemoveCountOutOfRange {
            remove_count,
            roster_size: roster.len(),
        });
    }

    let ranked = rank(roster, ledger);
    let cut = ranked.len() - remove_count;
    let kept: Vec<Character> = ranked[..cut].iter().map(|c| (*c).clone()).collect();
    let removed: Vec<Character> = ranked[cut..].iter().rev().map(|c| (*c).clone()).collect();

    debug!(
        kept = kept.len(),
        removed = ?removed.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "ranked cutoff"
    );
    Ok(Partition { kept, removed })
}
