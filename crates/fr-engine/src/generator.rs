//! Roster generation.
//!
//! Draws the target from its own pool, then draws unique contestant names
//! from the contestant pool (minus the player's and the target's names),
//! rolls stats and looks for each, seats everyone in shuffled order, and
//! registers each name in the ledger at 0.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use fr_core::{Character, GameState, Roster};

use crate::cast::CastConfig;
use crate::error::{EngineError, EngineResult};

fn pick<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}

/// Create the target character.
///
/// The target's name is drawn from `target_names`, skipping the player's name.
pub fn generate_target<R: Rng + ?Sized>(
    cast: &CastConfig,
    player_name: &str,
    rng: &mut R,
) -> EngineResult<Character> {
    let candidates: Vec<String> = unique(&cast.target_names)
        .into_iter()
        .filter(|n| n != player_name)
        .collect();
    let name = candidates
        .choose(rng)
        .cloned()
        .ok_or(EngineError::GenerationExhausted {
            requested: 1,
            available: 0,
        })?;

    Ok(Character::target(name)
        .with_stats(cast.target_stats.roll(rng))
        .with_looks(
            pick(&cast.eye_colors, rng),
            pick(&cast.hair_colors, rng),
            pick(&cast.heights, rng),
        )
        .with_noun("man")
        .with_personality(pick(&cast.target_roles, rng)))
}

/// Create one AI contestant with the given name.
pub fn generate_contestant<R: Rng + ?Sized>(
    cast: &CastConfig,
    name: impl Into<String>,
    rng: &mut R,
) -> Character {
    Character::contestant(name)
        .with_stats(cast.contestant_stats.roll(rng))
        .with_looks(
            pick(&cast.eye_colors, rng),
            pick(&cast.hair_colors, rng),
            pick(&cast.heights, rng),
        )
        .with_noun(pick(&cast.nouns, rng))
        .with_personality(pick(&cast.personalities, rng))
}

/// Draw `count` unique contestant names, excluding `reserved`.
///
/// Fails with `GenerationExhausted` instead of retrying when the pool is too small.
pub fn draw_names<R: Rng + ?Sized>(
    pool: &[String],
    reserved: &[&str],
    count: usize,
    rng: &mut R,
) -> EngineResult<Vec<String>> {
    let mut available: Vec<String> = unique(pool)
        .into_iter()
        .filter(|n| !reserved.contains(&n.as_str()))
        .collect();
    if available.len() < count {
        return Err(EngineError::GenerationExhausted {
            requested: count,
            available: available.len(),
        });
    }
    available.shuffle(rng);
    available.truncate(count);
    Ok(available)
}

/// Build a seated game state for `player`: target, `contestant_count - 1`
/// AI contestants, shuffled seating, and a zeroed ledger.
pub fn generate_state<R: Rng + ?Sized>(
    cast: &CastConfig,
    player: Character,
    rng: &mut R,
) -> EngineResult<GameState> {
    if cast.contestant_count == 0 {
        return Err(EngineError::InvalidConfig(
            "contestant count must be at least 1".to_string(),
        ));
    }
    let player = Character {
        is_player: true,
        is_target: false,
        ..player
    };

    let target = generate_target(cast, &player.name, rng)?;
    let names = draw_names(
        &cast.contestant_names,
        &[player.name.as_str(), target.name.as_str()],
        cast.contestant_count - 1,
        rng,
    )?;

    let mut members: Vec<Character> = names
        .into_iter()
        .map(|name| generate_contestant(cast, name, rng))
        .collect();
    members.push(player.clone());
    members.shuffle(rng);

    debug!(
        target = %target.name,
        contestants = members.len(),
        "cast generated"
    );

    let mut state = GameState::new(player, target);
    state.seat(Roster::from_members(members)?)?;
    Ok(state)
}

fn unique(pool: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|n| !n.trim().is_empty() && seen.insert(n.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::Stat;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player() -> Character {
        Character::player("Ellory")
            .with_stat(Stat::Charisma, 3)
            .with_stat(Stat::Attractiveness, 3)
    }

    #[test]
    fn boston_roster_has_twenty_five() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = generate_state(&CastConfig::boston(), player(), &mut rng).unwrap();
        assert_eq!(state.roster().len(), 25);
        assert_eq!(state.roster().rivals().count(), 24);
        assert!(state.roster().player().is_some());
        assert_eq!(state.ledger().len(), 25);
        assert!(state.ledger().iter().all(|(_, score)| score == 0));
    }

    #[test]
    fn names_unique_and_target_excluded() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = generate_state(&CastConfig::boston(), player(), &mut rng).unwrap();
        let names: HashSet<&str> = state.roster().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 25);
        assert!(!names.contains(state.target().name.as_str()));
        assert!(state.target().is_target);
        assert!(!state.ledger().contains(&state.target().name));
    }

    #[test]
    fn player_name_never_reused() {
        let cast = CastConfig::classic();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let me = Character::player("Kai");
            let state = generate_state(&cast, me, &mut rng).unwrap();
            assert_eq!(
                state.roster().iter().filter(|c| c.name == "Kai").count(),
                1
            );
        }
    }

    #[test]
    fn stats_follow_schema() {
        let cast = CastConfig::weekly();
        let mut rng = StdRng::seed_from_u64(3);
        let state = generate_state(&cast, player(), &mut rng).unwrap();
        for c in state.roster().rivals() {
            assert_eq!(c.stats.len(), 3);
            for (_, v) in c.stats.iter() {
                assert!((5..=10).contains(&v));
            }
            assert!(!c.personality.is_empty());
        }
        assert!(!state.target().personality.is_empty());
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let cast = CastConfig::classic().with_contestant_count(12);
        let mut rng = StdRng::seed_from_u64(42);
        let err = generate_state(&cast, player(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::GenerationExhausted {
                requested: 11,
                available: 10
            }
        ));
    }

    #[test]
    fn exhausted_counts_player_collision() {
        let mut cast = CastConfig::classic().with_contestant_count(3);
        cast.contestant_names = vec!["Kai".into(), "Riley".into(), "Kai".into()];
        let mut rng = StdRng::seed_from_u64(42);
        let err = generate_state(&cast, Character::player("Riley"), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::GenerationExhausted {
                requested: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn empty_target_pool_is_an_error() {
        let mut cast = CastConfig::classic();
        cast.target_names.clear();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            generate_state(&cast, player(), &mut rng),
            Err(EngineError::GenerationExhausted { .. })
        ));
    }

    #[test]
    fn single_seat_is_just_the_player() {
        let cast = CastConfig::classic().with_contestant_count(1);
        let mut rng = StdRng::seed_from_u64(42);
        let state = generate_state(&cast, player(), &mut rng).unwrap();
        assert_eq!(state.roster().names(), vec!["Ellory"]);
    }

    #[test]
    fn same_seed_same_cast() {
        let cast = CastConfig::boston();
        let a = generate_state(&cast, player(), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_state(&cast, player(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.roster(), b.roster());
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn seating_is_shuffled() {
        let cast = CastConfig::boston();
        let mut rng = StdRng::seed_from_u64(11);
        let positions: HashSet<usize> = (0..20)
            .map(|_| {
                let state = generate_state(&cast, player(), &mut rng).unwrap();
                state
                    .roster()
                    .iter()
                    .position(|c| c.is_player)
                    .unwrap_or(usize::MAX)
            })
            .collect();
        assert!(positions.len() > 1, "player always seated at {positions:?}");
    }
}
