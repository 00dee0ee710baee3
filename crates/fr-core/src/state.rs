use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::eliminated::EliminatedSet;
use crate::error::{CoreError, CoreResult};
use crate::ledger::RelationshipLedger;
use crate::roster::Roster;

/// Everything a season mutates: cast, scores, eliminations, and the round index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    player: Character,
    target: Character,
    roster: Roster,
    ledger: RelationshipLedger,
    eliminated: EliminatedSet,
    round: u32,
}

impl GameState {
    /// Create a state with an empty roster and ledger, before any round.
    pub fn new(player: Character, target: Character) -> Self {
        Self {
            player,
            target,
            roster: Roster::new(),
            ledger: RelationshipLedger::new(),
            eliminated: EliminatedSet::new(),
            round: 0,
        }
    }

    /// Seat a roster and give every member a ledger entry at 0.
    pub fn seat(&mut self, roster: Roster) -> CoreResult<()> {
        if let Some(c) = roster.iter().find(|c| self.eliminated.contains(&c.name)) {
            return Err(CoreError::AlreadyEliminated(c.name.clone()));
        }
        for c in &roster {
            self.ledger.register(c.name.clone());
        }
        self.roster = roster;
        Ok(())
    }

    /// The player character as created.
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// The target character.
    pub fn target(&self) -> &Character {
        &self.target
    }

    /// Contestants still competing.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Relationship scores.
    pub fn ledger(&self) -> &RelationshipLedger {
        &self.ledger
    }

    /// Mutable access to relationship scores.
    pub fn ledger_mut(&mut self) -> &mut RelationshipLedger {
        &mut self.ledger
    }

    /// Eliminated contestants in elimination order.
    pub fn eliminated(&self) -> &EliminatedSet {
        &self.eliminated
    }

    /// Number of rounds completed.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether the player is still on the roster.
    pub fn player_competing(&self) -> bool {
        self.roster.contains(&self.player.name)
    }

    /// Commit one round's partition: `removed` joins the eliminated set in the
    /// given order, `kept` becomes the new roster, and the round index advances.
    ///
    /// The partition must account for every current member exactly once.
    pub fn apply_round(&mut self, kept: Vec<Character>, removed: &[Character]) -> CoreResult<()> {
        let before = self.roster.len();
        if kept.len() + removed.len() != before {
            return Err(CoreError::RoundMismatch(format!(
                "{} kept + {} removed != {before} seated",
                kept.len(),
                removed.len()
            )));
        }

        let mut seen = HashSet::new();
        for c in kept.iter().chain(removed) {
            if !self.roster.contains(&c.name) {
                return Err(CoreError::UnknownContestant(c.name.clone()));
            }
            if !seen.insert(c.name.as_str()) {
                return Err(CoreError::RoundMismatch(format!(
                    "\"{}\" appears twice",
                    c.name
                )));
            }
        }

        for c in removed {
            self.eliminated.push(c.name.clone())?;
        }
        self.roster = Roster::from_members(kept)?;
        self.round += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated_state() -> GameState {
        let mut state = GameState::new(Character::player("You"), Character::target("Brad"));
        let roster = Roster::from_members(vec![
            Character::contestant("A"),
            Character::player("You"),
            Character::contestant("B"),
        ])
        .unwrap();
        state.seat(roster).unwrap();
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = GameState::new(Character::player("You"), Character::target("Brad"));
        assert_eq!(state.round(), 0);
        assert!(state.roster().is_empty());
        assert!(state.ledger().is_empty());
        assert!(state.eliminated().is_empty());
    }

    #[test]
    fn seat_registers_everyone() {
        let state = seated_state();
        assert_eq!(state.ledger().len(), 3);
        assert_eq!(state.ledger().score("You"), Some(0));
        assert!(!state.ledger().contains("Brad"));
        assert!(state.player_competing());
    }

    #[test]
    fn apply_round_moves_removed() {
        let mut state = seated_state();
        let a = state.roster().get("A").unwrap().clone();
        let you = state.roster().get("You").unwrap().clone();
        let b = state.roster().get("B").unwrap().clone();

        state.apply_round(vec![you, a], &[b]).unwrap();
        assert_eq!(state.round(), 1);
        assert_eq!(state.roster().names(), vec!["You", "A"]);
        assert_eq!(state.eliminated().names(), &["B".to_string()]);
        // history is retained
        assert_eq!(state.ledger().score("B"), Some(0));
    }

    #[test]
    fn apply_round_rejects_lost_members() {
        let mut state = seated_state();
        let a = state.roster().get("A").unwrap().clone();
        let err = state.apply_round(vec![a], &[]).unwrap_err();
        assert!(matches!(err, CoreError::RoundMismatch(_)));
        assert_eq!(state.round(), 0);
        assert_eq!(state.roster().len(), 3);
    }

    #[test]
    fn apply_round_rejects_duplicates() {
        let mut state = seated_state();
        let a = state.roster().get("A").unwrap().clone();
        let b = state.roster().get("B").unwrap().clone();
        let err = state.apply_round(vec![a.clone(), b], &[a]).unwrap_err();
        assert!(matches!(err, CoreError::RoundMismatch(_)));
    }

    #[test]
    fn apply_round_rejects_strangers() {
        let mut state = seated_state();
        let a = state.roster().get("A").unwrap().clone();
        let b = state.roster().get("B").unwrap().clone();
        let err = state
            .apply_round(vec![a, b], &[Character::contestant("Ghost")])
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownContestant(_)));
    }

    #[test]
    fn player_leaves_roster() {
        let mut state = seated_state();
        let a = state.roster().get("A").unwrap().clone();
        let you = state.roster().get("You").unwrap().clone();
        let b = state.roster().get("B").unwrap().clone();
        state.apply_round(vec![a, b], &[you]).unwrap();
        assert!(!state.player_competing());
        assert!(state.eliminated().contains("You"));
    }
}
