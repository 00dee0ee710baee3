//! What the target looks for in a partner.
//!
//! Preferences are rolled once per season. Each weighed stat gets a share of
//! 100 percent; a contestant's compatibility is their stats scaled by those
//! shares. A target without preferences weighs nothing and dislikes drama.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use fr_core::{Character, Stat};

/// Total of all preference weights.
pub const WEIGHT_TOTAL: u32 = 100;

/// The target's stat weights and temperament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPreferences {
    weights: BTreeMap<Stat, u32>,
    dislikes_drama: bool,
}

impl TargetPreferences {
    /// No stat preferences; drama is unwelcome.
    pub fn indifferent() -> Self {
        Self {
            weights: BTreeMap::new(),
            dislikes_drama: true,
        }
    }

    /// Fixed weights, for tests and hand-built seasons.
    pub fn from_weights(weights: &[(Stat, u32)], dislikes_drama: bool) -> Self {
        Self {
            weights: weights.iter().copied().collect(),
            dislikes_drama,
        }
    }

    /// Roll random weights over `stats` that sum to [`WEIGHT_TOTAL`].
    ///
    /// Rounding leftovers go to the first stat.
    pub fn roll<R: Rng + ?Sized>(stats: &[Stat], rng: &mut R) -> Self {
        let raw: Vec<(Stat, u32)> = stats
            .iter()
            .map(|&stat| (stat, rng.random_range(1..=WEIGHT_TOTAL)))
            .collect();
        let sum: u32 = raw.iter().map(|(_, r)| r).sum();
        let mut weights: BTreeMap<Stat, u32> = raw
            .iter()
            .map(|&(stat, r)| (stat, r * WEIGHT_TOTAL / sum.max(1)))
            .collect();
        let assigned: u32 = weights.values().sum();
        if let Some(&first) = stats.first() {
            *weights.entry(first).or_default() += WEIGHT_TOTAL - assigned;
        }
        let dislikes_drama = rng.random_bool(0.5);
        Self {
            weights,
            dislikes_drama,
        }
    }

    /// Share of [`WEIGHT_TOTAL`] given to `stat`.
    pub fn weight(&self, stat: Stat) -> u32 {
        self.weights.get(&stat).copied().unwrap_or(0)
    }

    /// Whether no stat carries any weight.
    pub fn is_indifferent(&self) -> bool {
        self.weights.values().all(|&w| w == 0)
    }

    /// The most heavily weighted stat.
    pub fn favorite(&self) -> Option<Stat> {
        self.weights
            .iter()
            .filter(|(_, w)| **w > 0)
            .max_by_key(|(_, w)| **w)
            .map(|(stat, _)| *stat)
    }

    /// Whether the target is put off by arguments.
    pub fn dislikes_drama(&self) -> bool {
        self.dislikes_drama
    }

    /// Weighted stat sum, rounded down.
    pub fn compatibility(&self, contestant: &Character) -> i32 {
        let scaled: i64 = self
            .weights
            .iter()
            .map(|(&stat, &w)| i64::from(contestant.stats.get(stat)) * i64::from(w))
            .sum();
        (scaled / i64::from(WEIGHT_TOTAL)) as i32
    }

    /// Extra credit for succeeding at something testing `stat`: half the
    /// weighted stat value.
    pub fn activity_bonus(&self, stat: Stat, stat_value: i32) -> i32 {
        let scaled = i64::from(stat_value) * i64::from(self.weight(stat));
        (scaled / (2 * i64::from(WEIGHT_TOTAL))) as i32
    }
}

impl Default for TargetPreferences {
    fn default() -> Self {
        Self::indifferent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const THREE: [Stat; 3] = [Stat::Charisma, Stat::Attractiveness, Stat::Intelligence];

    #[test]
    fn indifferent_weighs_nothing() {
        let prefs = TargetPreferences::indifferent();
        let c = Character::contestant("Kai").with_stat(Stat::Charisma, 9);
        assert_eq!(prefs.compatibility(&c), 0);
        assert_eq!(prefs.activity_bonus(Stat::Charisma, 9), 0);
        assert!(prefs.dislikes_drama());
        assert!(prefs.is_indifferent());
        assert_eq!(prefs.favorite(), None);
    }

    #[test]
    fn compatibility_scales_by_weight() {
        let prefs = TargetPreferences::from_weights(
            &[(Stat::Charisma, 50), (Stat::Attractiveness, 30), (Stat::Intelligence, 20)],
            false,
        );
        let c = Character::contestant("Kai")
            .with_stat(Stat::Charisma, 10)
            .with_stat(Stat::Attractiveness, 5)
            .with_stat(Stat::Intelligence, 7);
        // 5.0 + 1.5 + 1.4
        assert_eq!(prefs.compatibility(&c), 7);
        assert_eq!(prefs.activity_bonus(Stat::Charisma, 10), 2);
        assert_eq!(prefs.activity_bonus(Stat::Intelligence, 7), 0);
        assert_eq!(prefs.favorite(), Some(Stat::Charisma));
    }

    #[test]
    fn roll_is_seeded() {
        let a = TargetPreferences::roll(&THREE, &mut StdRng::seed_from_u64(3));
        let b = TargetPreferences::roll(&THREE, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn rolled_weights_sum_to_total(seed in any::<u64>()) {
            let prefs = TargetPreferences::roll(&THREE, &mut StdRng::seed_from_u64(seed));
            let sum: u32 = THREE.iter().map(|&s| prefs.weight(s)).sum();
            prop_assert_eq!(sum, WEIGHT_TOTAL);
            prop_assert_eq!(prefs.weight(Stat::Strength), 0);
        }
    }
}
