//! The fixed schedule of rose ceremonies.
//!
//! A schedule is known up front and validated against the opening roster
//! size before anything is generated, so a bad removal count can never
//! surface halfway through a season.

use serde::{Deserialize, Serialize};

use fr_core::Stat;

use crate::elimination::EliminationPolicy;
use crate::error::{EngineError, EngineResult};

/// Something the player can do during a round to stand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable key returned by the presenter.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Stat the activity tests.
    pub stat: Stat,
}

impl Activity {
    /// Create an activity.
    pub fn new(key: impl Into<String>, label: impl Into<String>, stat: Stat) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            stat,
        }
    }
}

/// Something that happens to the whole roster before the ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEvent {
    /// Everyone competes on one stat; the best showing earns the most.
    GroupDate(Stat),
    /// An argument breaks out at the cocktail party.
    Drama,
}

/// One scheduled elimination event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSpec {
    /// Ceremony label (e.g. "1. First Rose Ceremony").
    pub label: String,
    /// Where the episode takes place.
    pub venue: String,
    /// How many contestants go home.
    pub remove_count: usize,
    /// How they are chosen.
    pub policy: EliminationPolicy,
    /// Activities offered to the player; may be empty.
    pub activities: Vec<Activity>,
    /// Whether the player gets to engage one contestant before the ceremony.
    pub mingle: bool,
    /// Roster-wide events, run in order after the activity.
    #[serde(default)]
    pub events: Vec<RoundEvent>,
}

impl RoundSpec {
    /// A ranked-cutoff round with mingling and no activities.
    pub fn new(label: impl Into<String>, venue: impl Into<String>, remove_count: usize) -> Self {
        Self {
            label: label.into(),
            venue: venue.into(),
            remove_count,
            policy: EliminationPolicy::Ranked,
            activities: Vec::new(),
            mingle: true,
            events: Vec::new(),
        }
    }

    /// Set the elimination policy.
    pub fn with_policy(mut self, policy: EliminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Add a roster-wide event.
    pub fn with_event(mut self, event: RoundEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Enable or disable mingling.
    pub fn with_mingle(mut self, mingle: bool) -> Self {
        self.mingle = mingle;
        self
    }
}

/// An ordered, static list of rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<RoundSpec>,
}

impl Schedule {
    /// Create a schedule from rounds in play order.
    pub fn new(rounds: Vec<RoundSpec>) -> Self {
        Self { rounds }
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[RoundSpec] {
        &self.rounds
    }

    /// Round at `index`.
    pub fn get(&self, index: usize) -> Option<&RoundSpec> {
        self.rounds.get(index)
    }

    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether there are no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Force one policy on every round.
    pub fn with_policy(mut self, policy: EliminationPolicy) -> Self {
        for round in &mut self.rounds {
            round.policy = policy;
        }
        self
    }

    /// Roster size after each round, assuming it starts at `initial`.
    ///
    /// Saturates at zero; call [`Schedule::validate`] first for meaningful numbers.
    pub fn kept_after(&self, initial: usize) -> Vec<usize> {
        let mut size = initial;
        self.rounds
            .iter()
            .map(|r| {
                size = size.saturating_sub(r.remove_count);
                size
            })
            .collect()
    }

    /// Check every round removes at least one and leaves at least one,
    /// given an opening roster of `initial`.
    pub fn validate(&self, initial: usize) -> EngineResult<()> {
        if self.rounds.is_empty() {
            return Err(EngineError::InvalidConfig(
                "schedule has no rounds".to_string(),
            ));
        }
        let mut size = initial;
        for round in &self.rounds {
            if round.remove_count == 0 || round.remove_count >= size {
                return Err(EngineError::InvalidRemoveCount {
                    round: round.label.clone(),
                    remove_count: round.remove_count,
                    roster_size: size,
                });
            }
            size -= round.remove_count;
        }
        Ok(())
    }

    /// Three single-exit ceremonies for a four-seat cast.
    pub fn classic() -> Self {
        Self::new(vec![
            RoundSpec::new("1. First Rose Ceremony", "the mansion", 1),
            RoundSpec::new("2. Second Rose Ceremony", "the beach", 1),
            RoundSpec::new("3. Final Rose Ceremony", "the rooftop", 1),
        ])
    }

    /// Four ceremonies across Massachusetts: 25 -> 15 -> 8 -> 3 -> 1.
    pub fn boston() -> Self {
        Self::new(vec![
            RoundSpec::new("1. First Rose Ceremony", "Cape Cod", 10)
                .with_activity(Activity::new(
                    "hike",
                    "Hike in the hills nearby",
                    Stat::Strength,
                ))
                .with_activity(Activity::new(
                    "volleyball",
                    "Play beach volleyball with the other contestants",
                    Stat::Confidence,
                ))
                .with_activity(Activity::new(
                    "relax",
                    "Relax on the beach",
                    Stat::Attractiveness,
                )),
            RoundSpec::new("2. Second Rose Ceremony", "the New England Aquarium", 7)
                .with_activity(Activity::new(
                    "tour",
                    "Take the behind-the-scenes tour",
                    Stat::Intelligence,
                ))
                .with_activity(Activity::new(
                    "penguins",
                    "Help feed the penguins",
                    Stat::Charisma,
                )),
            RoundSpec::new("3. Third Rose Ceremony", "the Berkshires", 5).with_activity(
                Activity::new("canoe", "Canoe across the lake", Stat::Strength),
            ),
            RoundSpec::new("4. Final Rose Ceremony", "Martha's Vineyard", 2),
        ])
    }

    /// One exit per week for a five-seat cast, with a group date and
    /// cocktail-party drama every week.
    pub fn weekly() -> Self {
        const FOCUS: [Stat; 3] = [Stat::Charisma, Stat::Attractiveness, Stat::Intelligence];
        Self::new(
            (1..=4)
                .map(|week| {
                    RoundSpec::new(format!("Week {week} Rose Ceremony"), "the villa", 1)
                        .with_activity(Activity::new(
                            "dinner",
                            "Open up over a cozy dinner",
                            Stat::Intelligence,
                        ))
                        .with_activity(Activity::new(
                            "flirt",
                            "Flirt playfully at the pool",
                            Stat::Charisma,
                        ))
                        .with_event(RoundEvent::GroupDate(FOCUS[(week - 1) % FOCUS.len()]))
                        .with_event(RoundEvent::Drama)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boston_chain() {
        let s = Schedule::boston();
        s.validate(25).unwrap();
        assert_eq!(s.kept_after(25), vec![15, 8, 3, 1]);
    }

    #[test]
    fn classic_and_weekly_end_at_one() {
        Schedule::classic().validate(4).unwrap();
        assert_eq!(Schedule::classic().kept_after(4), vec![3, 2, 1]);
        Schedule::weekly().validate(5).unwrap();
        assert_eq!(Schedule::weekly().kept_after(5).last(), Some(&1));
    }

    #[test]
    fn remove_all_rejected() {
        let s = Schedule::new(vec![RoundSpec::new("1", "here", 3)]);
        let err = s.validate(3).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidRemoveCount {
                remove_count: 3,
                roster_size: 3,
                ..
            }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn zero_removal_rejected() {
        let s = Schedule::new(vec![RoundSpec::new("1", "here", 0)]);
        assert!(s.validate(5).is_err());
    }

    #[test]
    fn later_round_checked_against_shrunk_roster() {
        let s = Schedule::new(vec![
            RoundSpec::new("1", "here", 10),
            RoundSpec::new("2", "there", 15),
        ]);
        let err = s.validate(25).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidRemoveCount { ref round, roster_size: 15, .. } if round == "2"
        ));
    }

    #[test]
    fn boston_schedule_too_big_for_classic_cast() {
        assert!(Schedule::boston().validate(4).is_err());
    }

    #[test]
    fn empty_schedule_rejected() {
        assert!(Schedule::default().validate(4).is_err());
    }

    #[test]
    fn weekly_rounds_carry_events() {
        let s = Schedule::weekly();
        let first = s.get(0).unwrap();
        assert_eq!(
            first.events,
            vec![RoundEvent::GroupDate(Stat::Charisma), RoundEvent::Drama]
        );
        assert_eq!(
            s.get(3).unwrap().events[0],
            RoundEvent::GroupDate(Stat::Charisma)
        );
        assert!(Schedule::boston().rounds().iter().all(|r| r.events.is_empty()));
    }

    #[test]
    fn events_default_when_missing() {
        let json = r#"{"label":"1","venue":"here","remove_count":1,"policy":"ranked","activities":[],"mingle":true}"#;
        let round: RoundSpec = serde_json::from_str(json).unwrap();
        assert!(round.events.is_empty());
    }

    #[test]
    fn with_policy_overrides_all() {
        let s = Schedule::boston().with_policy(EliminationPolicy::Weighted);
        assert!(
            s.rounds()
                .iter()
                .all(|r| r.policy == EliminationPolicy::Weighted)
        );
    }
}
