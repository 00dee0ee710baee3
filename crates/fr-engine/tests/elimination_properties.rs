//! Property tests for elimination, conservation and terminal detection.

use std::collections::HashSet;

use fr_core::{Character, GameState, RelationshipLedger, Roster};
use fr_engine::elimination::{EliminationPolicy, eliminate, ranked_cutoff, weighted_draw};
use fr_engine::terminal::{TerminalStatus, check_terminal};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seated(scores: &[i32], player_at: usize) -> GameState {
    let members: Vec<Character> = (0..scores.len())
        .map(|i| {
            if i == player_at {
                Character::player(format!("C{i:02}"))
            } else {
                Character::contestant(format!("C{i:02}"))
            }
        })
        .collect();
    let player = members[player_at].clone();
    let mut state = GameState::new(player, Character::target("Brad"));
    state
        .seat(Roster::from_members(members).expect("unique names"))
        .expect("seat");
    for (i, score) in scores.iter().enumerate() {
        state
            .ledger_mut()
            .set(&format!("C{i:02}"), *score)
            .expect("registered");
    }
    state
}

fn field() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    prop::collection::vec(-20_i32..40, 2..30).prop_flat_map(|scores| {
        let n = scores.len();
        (Just(scores), 0..n, 1..n)
    })
}

fn policy() -> impl Strategy<Value = EliminationPolicy> {
    prop_oneof![
        Just(EliminationPolicy::Ranked),
        Just(EliminationPolicy::Weighted)
    ]
}

proptest! {
    #[test]
    fn partition_conserves_the_roster(
        (scores, player_at, remove) in field(),
        policy in policy(),
        seed in 0_u64..10_000,
    ) {
        let state = seated(&scores, player_at);
        let mut rng = StdRng::seed_from_u64(seed);
        let p = eliminate(policy, state.roster(), state.ledger(), remove, &mut rng).expect("valid count");

        prop_assert_eq!(p.kept.len() + p.removed.len(), scores.len());
        prop_assert_eq!(p.removed.len(), remove);
        let removed: HashSet<&str> = p.removed.iter().map(|c| c.name.as_str()).collect();
        prop_assert_eq!(removed.len(), p.removed.len());
        for name in &removed {
            prop_assert!(state.roster().contains(name));
        }
        for c in &p.kept {
            prop_assert!(!removed.contains(c.name.as_str()));
        }
    }

    #[test]
    fn eliminated_set_only_grows(
        scores in prop::collection::vec(-20_i32..40, 4..26),
        policy in policy(),
        seed in 0_u64..10_000,
    ) {
        let mut state = seated(&scores, 0);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut previous: Vec<String> = Vec::new();
        while state.roster().len() > 1 {
            let p = eliminate(policy, state.roster(), state.ledger(), 1, &mut rng).expect("valid count");
            state.apply_round(p.kept.clone(), &p.removed).expect("apply");

            let now = state.eliminated().names();
            prop_assert_eq!(now.len(), previous.len() + 1);
            prop_assert_eq!(&now[..previous.len()], previous.as_slice());
            let unique: HashSet<&String> = now.iter().collect();
            prop_assert_eq!(unique.len(), now.len());
            for name in now {
                prop_assert!(!state.roster().contains(name));
            }
            previous = now.to_vec();
        }
        prop_assert_eq!(previous.len(), scores.len() - 1);
    }

    #[test]
    fn ranked_cutoff_is_deterministic((scores, player_at, remove) in field()) {
        let state = seated(&scores, player_at);
        let a = ranked_cutoff(state.roster(), state.ledger(), remove).expect("valid count");
        let b = ranked_cutoff(state.roster(), state.ledger(), remove).expect("valid count");
        prop_assert_eq!(&a, &b);

        let worst_kept = a.kept.iter().map(|c| state.ledger().score_or_zero(&c.name)).min();
        let best_removed = a.removed.iter().map(|c| state.ledger().score_or_zero(&c.name)).max();
        if let (Some(kept), Some(removed)) = (worst_kept, best_removed) {
            prop_assert!(kept >= removed);
        }
    }

    #[test]
    fn weighted_draw_never_repeats(
        scores in prop::collection::vec(-50_i32..50, 1..30),
        count in 0_usize..40,
        seed in 0_u64..10_000,
    ) {
        let state = seated(&scores, 0);
        let mut rng = StdRng::seed_from_u64(seed);
        let p = weighted_draw(state.roster(), state.ledger(), count, &mut rng).expect("draw");
        prop_assert_eq!(p.removed.len(), count.min(scores.len()));
        let unique: HashSet<&str> = p.removed.iter().map(|c| c.name.as_str()).collect();
        prop_assert_eq!(unique.len(), p.removed.len());
    }

    #[test]
    fn terminal_status_matches_partition(
        (scores, player_at, remove) in field(),
        policy in policy(),
        seed in 0_u64..10_000,
    ) {
        let state = seated(&scores, player_at);
        let mut rng = StdRng::seed_from_u64(seed);
        let p = eliminate(policy, state.roster(), state.ledger(), remove, &mut rng).expect("valid count");
        let status = check_terminal(&p);
        if p.removed.iter().any(|c| c.is_player) {
            prop_assert_eq!(status, TerminalStatus::PlayerEliminated);
        } else if p.kept.len() == 1 && p.kept[0].is_player {
            prop_assert_eq!(status, TerminalStatus::PlayerWon);
        } else {
            prop_assert_eq!(status, TerminalStatus::Continuing);
        }
    }
}

#[test]
fn twenty_five_seats_lose_the_bottom_ten() {
    let scores: Vec<i32> = (0..25).map(|i| (i * 7) % 25 - 5).collect();
    let mut state = seated(&scores, 12);
    let p = ranked_cutoff(state.roster(), state.ledger(), 10).expect("valid count");
    assert_eq!(p.kept.len(), 15);
    assert_eq!(p.removed.len(), 10);

    let mut sorted = scores.clone();
    sorted.sort_unstable();
    let threshold = sorted[9];
    for c in &p.removed {
        assert!(state.ledger().score_or_zero(&c.name) <= threshold);
    }

    assert!(state.eliminated().is_empty());
    state.apply_round(p.kept.clone(), &p.removed).expect("apply");
    assert_eq!(state.eliminated().len(), 10);
    assert_eq!(state.roster().len(), 15);
}

#[test]
fn ranked_tie_sends_the_later_name_home() {
    let mut ledger = RelationshipLedger::new();
    let roster = Roster::from_members(vec![
        Character::contestant("B"),
        Character::contestant("A"),
    ])
    .expect("roster");
    ledger.register("A");
    ledger.register("B");
    ledger.set("A", 5).expect("set");
    ledger.set("B", 5).expect("set");
    let p = ranked_cutoff(&roster, &ledger, 1).expect("valid count");
    assert_eq!(p.removed_names(), vec!["B".to_string()]);
}
