use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};

/// The contestants still competing, in seating order.
///
/// Includes the player until they are eliminated. The target is never a
/// roster member. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a list of characters, rejecting duplicate names
    /// and the target.
    pub fn from_members(members: Vec<Character>) -> CoreResult<Self> {
        let mut roster = Self::new();
        for c in members {
            roster.push(c)?;
        }
        Ok(roster)
    }

    /// Seat a character at the end of the roster.
    pub fn push(&mut self, character: Character) -> CoreResult<()> {
        if character.is_target {
            return Err(CoreError::TargetNotEligible(character.name));
        }
        if self.contains(&character.name) {
            return Err(CoreError::DuplicateName(character.name));
        }
        self.members.push(character);
        Ok(())
    }

    /// All members in seating order.
    pub fn members(&self) -> &[Character] {
        &self.members
    }

    /// Look up a member by exact name.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.members.iter().find(|c| c.name == name)
    }

    /// Whether a member with this name is seated.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The player, if still competing.
    pub fn player(&self) -> Option<&Character> {
        self.members.iter().find(|c| c.is_player)
    }

    /// Everyone except the player.
    pub fn rivals(&self) -> impl Iterator<Item = &Character> {
        self.members.iter().filter(|c| !c.is_player)
    }

    /// Member names in seating order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nobody is left.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in seating order.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut roster = Roster::new();
        roster.push(Character::contestant("Kai")).unwrap();
        roster.push(Character::player("Ellory")).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.contains("Kai"));
        assert_eq!(roster.player().map(|c| c.name.as_str()), Some("Ellory"));
        assert_eq!(roster.rivals().count(), 1);
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Roster::from_members(vec![
            Character::contestant("Kai"),
            Character::contestant("Kai"),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(ref n) if n == "Kai"));
    }

    #[test]
    fn target_cannot_be_seated() {
        let mut roster = Roster::new();
        assert!(roster.push(Character::target("Brad")).is_err());
        assert!(roster.is_empty());
    }

    #[test]
    fn names_in_seating_order() {
        let roster = Roster::from_members(vec![
            Character::contestant("B"),
            Character::contestant("A"),
        ])
        .unwrap();
        assert_eq!(roster.names(), vec!["B", "A"]);
    }
}
