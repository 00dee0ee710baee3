//! Weighted-random elimination: a roulette draw without replacement.
//!
//! Each contestant's weight is `score + 1`, floored at [`MIN_WEIGHT`] so the
//! wheel always has positive total weight while anyone is left on it.

use rand::Rng;
use tracing::debug;

use fr_core::{Character, RelationshipLedger, Roster};

use crate::elimination::Partition;
use crate::error::EngineResult;

/// Smallest weight any contestant can carry.
pub const MIN_WEIGHT: u64 = 1;

/// Elimination weight for a relationship score.
pub fn elimination_weight(score: i32) -> u64 {
    let raw = i64::from(score) + 1;
    u64::try_from(raw).unwrap_or(0).max(MIN_WEIGHT)
}

/// Walk the untaken entries accumulating weight and return the first whose
/// running total exceeds `draw`.
///
/// `draw` must be below the sum of untaken weights for a hit to be guaranteed.
pub fn pick_index(weights: &[u64], taken: &[bool], draw: u64) -> Option<usize> {
    let mut acc = 0u64;
    for (i, w) in weights.iter().enumerate() {
        if taken.get(i).copied().unwrap_or(false) {
            continue;
        }
        acc += w;
        if draw < acc {
            return Some(i);
        }
    }
    None
}

/// Draw `count` distinct contestants to remove.
///
/// Stops early if the roster runs out. `kept` keeps seating order; `removed`
/// is in draw order.
pub fn weighted_draw<R: Rng + ?Sized>(
    roster: &Roster,
    ledger: &RelationshipLedger,
    count: usize,
    rng: &mut R,
) -> EngineResult<Partition> {
    let members = roster.members();
    let weights: Vec<u64> = members
        .iter()
        .map(|c| elimination_weight(ledger.score_or_zero(&c.name)))
        .collect();
    let mut total: u64 = weights.iter().sum();
    let mut taken = vec![false; members.len()];
    let mut order = Vec::with_capacity(count.min(members.len()));

    while order.len() < count && total > 0 {
        let draw = rng.random_range(0..total);
        let Some(idx) = pick_index(&weights, &taken, draw) else {
            break;
        };
        taken[idx] = true;
        total -= weights[idx];
        order.push(idx);
    }

    let removed: Vec<Character> = order.iter().map(|&i| members[i].clone()).collect();
    let kept: Vec<Character> = members
        .iter()
        .zip(&taken)
        .filter(|(_, t)| !**t)
        .map(|(c, _)| c.clone())
        .collect();

    debug!(
        kept = kept.len(),
        removed = ?removed.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "weighted draw"
    );
    Ok(Partition { kept, removed })
}
