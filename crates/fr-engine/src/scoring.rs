//! Relationship score updates.
//!
//! The ledger is fed by a one-off introduction score for every contestant,
//! the player engaging a specific contestant, the player's own showing in a
//! round activity, and roster-wide events (group dates and drama).
//! Thresholds are fixed constants; the target's preferences scale the
//! introduction and activity scores.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fr_core::{Character, GameState, Stat};

use crate::error::{EngineError, EngineResult};
use crate::preferences::TargetPreferences;
use crate::schedule::Activity;

/// A stat must exceed this to count as a strength in conversation.
pub const STAT_THRESHOLD: i32 = 3;
/// Charisma above this can spark chemistry.
pub const CHEMISTRY_CHARISMA: i32 = 4;
/// Chemistry needs at least this standing before the interaction.
pub const CHEMISTRY_MIN_SCORE: i32 = 3;
/// Extra points when chemistry sparks.
pub const CHEMISTRY_BONUS: i32 = 2;
/// Upper bound (inclusive) of the random bump at introduction.
pub const INTRODUCTION_JITTER: i32 = 2;
/// Activity rolls are `0..ACTIVITY_DIE` plus the stat.
pub const ACTIVITY_DIE: i32 = 20;
/// An activity succeeds when the roll plus stat exceeds this.
pub const ACTIVITY_TARGET: i32 = 10;
/// Points the player earns for a successful activity.
pub const ACTIVITY_BONUS: i32 = 2;
/// Group date showings are the stat plus `0..GROUP_DATE_DIE`.
pub const GROUP_DATE_DIE: i32 = 4;
/// Points for the best group date showing.
pub const GROUP_DATE_WIN: i32 = 6;
/// Points for everyone else on a group date.
pub const GROUP_DATE_SHARE: i32 = 2;
/// What the player loses for drama when the target dislikes it.
pub const DRAMA_PENALTY: i32 = 3;
/// What the player gains for drama when the target enjoys it.
pub const DRAMA_REWARD: i32 = 2;
/// What each rival loses when two of them argue.
pub const DRAMA_FALLOUT: i32 = 2;

fn seated_player(state: &GameState, doing: &str) -> EngineResult<Character> {
    state.roster().player().cloned().ok_or_else(|| {
        EngineError::InvalidConfig(format!("{doing} resolved without the player seated"))
    })
}

/// Score a contestant earns when first introduced.
pub fn introduction_delta<R: Rng + ?Sized>(contestant: &Character, rng: &mut R) -> i32 {
    contestant.attractiveness() + contestant.charisma() + rng.random_range(0..=INTRODUCTION_JITTER)
}

/// Seed every seated contestant's score once, adding their compatibility
/// with the target. Returns `(name, delta)` in seating order.
pub fn score_introductions<R: Rng + ?Sized>(
    state: &mut GameState,
    preferences: &TargetPreferences,
    rng: &mut R,
) -> EngineResult<Vec<(String, i32)>> {
    let deltas: Vec<(String, i32)> = state
        .roster()
        .iter()
        .map(|c| {
            let delta = introduction_delta(c, rng) + preferences.compatibility(c);
            (c.name.clone(), delta)
        })
        .collect();
    for (name, delta) in &deltas {
        state.ledger_mut().adjust(name, *delta)?;
    }
    Ok(deltas)
}

/// Result of the player engaging a contestant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOutcome {
    /// Who the player engaged.
    pub contestant: String,
    /// Score before the interaction.
    pub before: i32,
    /// Total change, including any chemistry bonus.
    pub delta: i32,
    /// Whether the chemistry bonus applied.
    pub chemistry: bool,
}

impl InteractionOutcome {
    /// Score after the interaction.
    pub fn after(&self) -> i32 {
        self.before + self.delta
    }
}

/// Score change for engaging `contestant` whose current standing is `current`.
///
/// Returns the delta and whether the chemistry bonus applied.
pub fn interaction_delta(contestant: &Character, current: i32) -> (i32, bool) {
    let mut delta = if contestant.charisma() > STAT_THRESHOLD
        || contestant.attractiveness() > STAT_THRESHOLD
    {
        1
    } else {
        -1
    };
    let chemistry = contestant.charisma() > CHEMISTRY_CHARISMA && current >= CHEMISTRY_MIN_SCORE;
    if chemistry {
        delta += CHEMISTRY_BONUS;
    }
    (delta, chemistry)
}

/// Apply the player-interaction rule to a seated contestant.
pub fn apply_interaction(state: &mut GameState, name: &str) -> EngineResult<InteractionOutcome> {
    let contestant = state
        .roster()
        .get(name)
        .cloned()
        .ok_or_else(|| fr_core::CoreError::UnknownContestant(name.to_string()))?;
    let before = state
        .ledger()
        .score(name)
        .ok_or_else(|| fr_core::CoreError::UnknownContestant(name.to_string()))?;
    let (delta, chemistry) = interaction_delta(&contestant, before);
    state.ledger_mut().adjust(name, delta)?;
    debug!(contestant = name, before, delta, chemistry, "interaction scored");
    Ok(InteractionOutcome {
        contestant: name.to_string(),
        before,
        delta,
        chemistry,
    })
}

/// Result of the player's activity roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOutcome {
    /// Activity label.
    pub activity: String,
    /// Die roll (before adding the stat).
    pub roll: i32,
    /// The stat value added.
    pub stat_value: i32,
    /// Whether the roll beat the target.
    pub success: bool,
    /// Change applied to the player's score.
    pub delta: i32,
}

/// Roll the player's activity and credit their score on success.
///
/// A success earns more when the target weighs the tested stat.
pub fn resolve_activity<R: Rng + ?Sized>(
    state: &mut GameState,
    activity: &Activity,
    preferences: &TargetPreferences,
    rng: &mut R,
) -> EngineResult<ActivityOutcome> {
    let player = seated_player(state, "activity")?;
    let roll = rng.random_range(0..ACTIVITY_DIE);
    let stat_value = player.stats.get(activity.stat);
    let success = roll + stat_value > ACTIVITY_TARGET;
    let delta = if success {
        ACTIVITY_BONUS + preferences.activity_bonus(activity.stat, stat_value)
    } else {
        0
    };
    if delta != 0 {
        state.ledger_mut().adjust(&player.name, delta)?;
    }
    debug!(activity = %activity.label, roll, stat_value, success, "activity resolved");
    Ok(ActivityOutcome {
        activity: activity.label.clone(),
        roll,
        stat_value,
        success,
        delta,
    })
}

/// Result of a group date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDateOutcome {
    /// Stat the date tested.
    pub stat: Stat,
    /// Who gave the best showing.
    pub winner: String,
    /// Every `(name, stat + roll)` in seating order.
    pub showings: Vec<(String, i32)>,
}

/// Everyone seated rolls `stat` plus a small die. The best showing earns
/// [`GROUP_DATE_WIN`], everyone else [`GROUP_DATE_SHARE`]. Ties go to the
/// earlier seat.
pub fn resolve_group_date<R: Rng + ?Sized>(
    state: &mut GameState,
    stat: Stat,
    rng: &mut R,
) -> EngineResult<GroupDateOutcome> {
    let showings: Vec<(String, i32)> = state
        .roster()
        .iter()
        .map(|c| (c.name.clone(), c.stats.get(stat) + rng.random_range(0..GROUP_DATE_DIE)))
        .collect();
    let mut best: Option<&(String, i32)> = None;
    for showing in &showings {
        if best.is_none_or(|b| showing.1 > b.1) {
            best = Some(showing);
        }
    }
    let winner = best
        .map(|(name, _)| name.clone())
        .ok_or_else(|| EngineError::InvalidConfig("group date with nobody seated".to_string()))?;
    for (name, _) in &showings {
        let gain = if *name == winner {
            GROUP_DATE_WIN
        } else {
            GROUP_DATE_SHARE
        };
        state.ledger_mut().adjust(name, gain)?;
    }
    debug!(%stat, winner = %winner, "group date resolved");
    Ok(GroupDateOutcome {
        stat,
        winner,
        showings,
    })
}

/// Who got caught up in the drama.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DramaOutcome {
    /// The player argued; `delta` is what it did to their standing.
    Player {
        /// Score change.
        delta: i32,
    },
    /// Two rivals argued and each lost [`DRAMA_FALLOUT`].
    Rivals {
        /// One side of the argument.
        first: String,
        /// The other side.
        second: String,
    },
}

impl DramaOutcome {
    /// Everyone involved, player first if they were.
    pub fn involved(&self, player: &str) -> Vec<String> {
        match self {
            Self::Player { .. } => vec![player.to_string()],
            Self::Rivals { first, second } => vec![first.clone(), second.clone()],
        }
    }

    /// Score change for each person involved.
    pub fn delta(&self) -> i32 {
        match self {
            Self::Player { delta } => *delta,
            Self::Rivals { .. } => -DRAMA_FALLOUT,
        }
    }
}

/// A coin flip decides whether the player is in the argument. If so, they
/// lose [`DRAMA_PENALTY`] when the target dislikes drama and gain
/// [`DRAMA_REWARD`] otherwise. If not, two distinct rivals each lose
/// [`DRAMA_FALLOUT`]. With fewer than two rivals the player is always involved.
pub fn resolve_drama<R: Rng + ?Sized>(
    state: &mut GameState,
    preferences: &TargetPreferences,
    rng: &mut R,
) -> EngineResult<DramaOutcome> {
    let player = seated_player(state, "drama")?;
    let rivals: Vec<String> = state.roster().rivals().map(|c| c.name.clone()).collect();
    let player_involved = rng.random_bool(0.5) || rivals.len() < 2;
    let outcome = if player_involved {
        let delta = if preferences.dislikes_drama() {
            -DRAMA_PENALTY
        } else {
            DRAMA_REWARD
        };
        state.ledger_mut().adjust(&player.name, delta)?;
        DramaOutcome::Player { delta }
    } else {
        let pair: Vec<String> = rivals.choose_multiple(rng, 2).cloned().collect();
        let [first, second] = <[String; 2]>::try_from(pair).map_err(|_| {
            EngineError::InvalidConfig("drama needs two rivals".to_string())
        })?;
        state.ledger_mut().adjust(&first, -DRAMA_FALLOUT)?;
        state.ledger_mut().adjust(&second, -DRAMA_FALLOUT)?;
        DramaOutcome::Rivals { first, second }
    };
    debug!(?outcome, "drama resolved");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::{Roster, Stat};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn with(cha: i32, att: i32) -> Character {
        Character::contestant("C")
            .with_stat(Stat::Charisma, cha)
            .with_stat(Stat::Attractiveness, att)
    }

    fn seated(members: Vec<Character>) -> GameState {
        let mut state = GameState::new(Character::player("You"), Character::target("Brad"));
        state.seat(Roster::from_members(members).unwrap()).unwrap();
        state
    }

    #[test]
    fn charismatic_gains() {
        assert_eq!(interaction_delta(&with(4, 1), 0), (1, false));
    }

    #[test]
    fn attractive_gains() {
        assert_eq!(interaction_delta(&with(2, 4), 0), (1, false));
    }

    #[test]
    fn unremarkable_loses() {
        assert_eq!(interaction_delta(&with(3, 3), 0), (-1, false));
        assert_eq!(interaction_delta(&with(1, 1), 10), (-1, false));
    }

    #[test]
    fn chemistry_needs_standing() {
        assert_eq!(interaction_delta(&with(5, 1), 2), (1, false));
        assert_eq!(interaction_delta(&with(5, 1), 3), (3, true));
        assert_eq!(interaction_delta(&with(4, 5), 9), (1, false));
    }

    #[test]
    fn introduction_in_range() {
        let c = with(3, 4);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let d = introduction_delta(&c, &mut rng);
            assert!((7..=9).contains(&d));
        }
    }

    #[test]
    fn introductions_touch_everyone_once() {
        let mut state = seated(vec![with(1, 1), Character::player("You")]);
        let mut rng = StdRng::seed_from_u64(42);
        let deltas = score_introductions(&mut state, &TargetPreferences::indifferent(), &mut rng).unwrap();
        assert_eq!(deltas.len(), 2);
        for (name, delta) in deltas {
            assert_eq!(state.ledger().score(&name), Some(delta));
        }
    }

    #[test]
    fn apply_interaction_uses_prior_score() {
        let mut state = seated(vec![with(5, 1)]);
        state.ledger_mut().set("C", 3).unwrap();
        let out = apply_interaction(&mut state, "C").unwrap();
        assert_eq!(out.before, 3);
        assert_eq!(out.delta, 3);
        assert!(out.chemistry);
        assert_eq!(out.after(), 6);
        assert_eq!(state.ledger().score("C"), Some(6));
    }

    #[test]
    fn apply_interaction_unknown() {
        let mut state = seated(vec![with(5, 1)]);
        assert!(apply_interaction(&mut state, "Ghost").is_err());
    }

    #[test]
    fn activity_credits_player_on_success() {
        let me = Character::player("You").with_stat(Stat::Strength, 30);
        let mut state = seated(vec![me]);
        let hike = Activity::new("hike", "Hike in the hills", Stat::Strength);
        let mut rng = StdRng::seed_from_u64(42);
        let out = resolve_activity(&mut state, &hike, &TargetPreferences::indifferent(), &mut rng).unwrap();
        assert!(out.success);
        assert_eq!(out.delta, ACTIVITY_BONUS);
        assert_eq!(state.ledger().score("You"), Some(ACTIVITY_BONUS));
    }

    #[test]
    fn activity_failure_changes_nothing() {
        let me = Character::player("You").with_stat(Stat::Strength, -30);
        let mut state = seated(vec![me]);
        let hike = Activity::new("hike", "Hike in the hills", Stat::Strength);
        let mut rng = StdRng::seed_from_u64(42);
        let out = resolve_activity(&mut state, &hike, &TargetPreferences::indifferent(), &mut rng).unwrap();
        assert!(!out.success);
        assert_eq!(state.ledger().score("You"), Some(0));
    }

    #[test]
    fn preferences_add_compatibility_at_introduction() {
        let kai = Character::contestant("Kai")
            .with_stat(Stat::Charisma, 10)
            .with_stat(Stat::Attractiveness, 2);
        let prefs = TargetPreferences::from_weights(&[(Stat::Charisma, 100)], true);
        let mut plain = seated(vec![kai.clone()]);
        let mut weighed = seated(vec![kai]);
        let a = score_introductions(&mut plain, &TargetPreferences::indifferent(), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = score_introductions(&mut weighed, &prefs, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(b[0].1 - a[0].1, 10);
    }

    #[test]
    fn weighted_stat_sweetens_activity() {
        let me = Character::player("You").with_stat(Stat::Charisma, 30);
        let mut state = seated(vec![me]);
        let flirt = Activity::new("flirt", "Flirt at the pool", Stat::Charisma);
        let prefs = TargetPreferences::from_weights(&[(Stat::Charisma, 40)], true);
        let out = resolve_activity(&mut state, &flirt, &prefs, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(out.success);
        // 30 * 40 / 200
        assert_eq!(out.delta, ACTIVITY_BONUS + 6);
    }

    #[test]
    fn group_date_rewards_the_standout() {
        let mut state = seated(vec![
            Character::contestant("Kai").with_stat(Stat::Intelligence, 1),
            Character::player("You").with_stat(Stat::Intelligence, 50),
            Character::contestant("Riley").with_stat(Stat::Intelligence, 2),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let out = resolve_group_date(&mut state, Stat::Intelligence, &mut rng).unwrap();
        assert_eq!(out.winner, "You");
        assert_eq!(out.showings.len(), 3);
        assert_eq!(state.ledger().score("You"), Some(GROUP_DATE_WIN));
        assert_eq!(state.ledger().score("Kai"), Some(GROUP_DATE_SHARE));
        assert_eq!(state.ledger().score("Riley"), Some(GROUP_DATE_SHARE));
    }

    #[test]
    fn group_date_tie_goes_to_the_earlier_seat() {
        for seed in 0..50 {
            let mut state = seated(vec![
                Character::contestant("Kai").with_stat(Stat::Charisma, 5),
                Character::contestant("Riley").with_stat(Stat::Charisma, 5),
                Character::contestant("Avery").with_stat(Stat::Charisma, 5),
            ]);
            let mut rng = StdRng::seed_from_u64(seed);
            let out = resolve_group_date(&mut state, Stat::Charisma, &mut rng).unwrap();
            let top = out.showings.iter().map(|(_, s)| *s).max().unwrap();
            let first_top = out.showings.iter().find(|(_, s)| *s == top).unwrap();
            assert_eq!(out.winner, first_top.0);
        }
    }

    #[test]
    fn drama_moves_scores_by_the_fixed_amounts() {
        for seed in 0..40 {
            for dislikes in [true, false] {
                let mut state = seated(vec![
                    Character::player("You"),
                    Character::contestant("Kai"),
                    Character::contestant("Riley"),
                    Character::contestant("Avery"),
                ]);
                let prefs = TargetPreferences::from_weights(&[], dislikes);
                let mut rng = StdRng::seed_from_u64(seed);
                match resolve_drama(&mut state, &prefs, &mut rng).unwrap() {
                    DramaOutcome::Player { delta } => {
                        let expected = if dislikes { -DRAMA_PENALTY } else { DRAMA_REWARD };
                        assert_eq!(delta, expected);
                        assert_eq!(state.ledger().score("You"), Some(expected));
                    }
                    DramaOutcome::Rivals { first, second } => {
                        assert_ne!(first, second);
                        assert_ne!(first, "You");
                        assert_ne!(second, "You");
                        assert_eq!(state.ledger().score(&first), Some(-DRAMA_FALLOUT));
                        assert_eq!(state.ledger().score(&second), Some(-DRAMA_FALLOUT));
                        assert_eq!(state.ledger().score("You"), Some(0));
                    }
                }
            }
        }
    }

    #[test]
    fn drama_with_one_rival_involves_the_player() {
        for seed in 0..20 {
            let mut state = seated(vec![Character::player("You"), Character::contestant("Kai")]);
            let mut rng = StdRng::seed_from_u64(seed);
            let out = resolve_drama(&mut state, &TargetPreferences::indifferent(), &mut rng).unwrap();
            assert_eq!(out, DramaOutcome::Player { delta: -DRAMA_PENALTY });
            assert_eq!(out.involved("You"), vec!["You".to_string()]);
        }
    }

    #[test]
    fn activity_requires_player() {
        let mut state = seated(vec![with(1, 1)]);
        let hike = Activity::new("hike", "Hike", Stat::Strength);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(resolve_activity(&mut state, &hike, &TargetPreferences::indifferent(), &mut rng).is_err());
    }
}
