//! The episode orchestrator.
//!
//! A season walks a fixed state machine:
//! `Introduction -> FirstImpression -> Round(0..k) -> Proposal -> Finished`.
//! Each call to [`Season::step`] advances exactly one phase. A round that
//! sends the player home, or leaves the player alone, finishes the season
//! on the spot.

use std::fmt;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fr_core::{Character, GameState, RelationshipLedger, Roster};

use crate::config::SeasonConfig;
use crate::elimination::{eliminate, rank};
use crate::error::{EngineError, EngineResult};
use crate::generator::generate_state;
use crate::journal::{Journal, JournalEntry};
use crate::narrative;
use crate::preferences::TargetPreferences;
use crate::presenter::{ChoiceOption, Presenter};
use crate::schedule::{RoundEvent, RoundSpec};
use crate::scoring::{
    DramaOutcome, apply_interaction, resolve_activity, resolve_drama, resolve_group_date,
    score_introductions,
};
use crate::snapshot::RoundSnapshot;
use crate::terminal::{TerminalStatus, check_terminal};

/// How the season ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The player received the final rose.
    PlayerWon,
    /// The player went home.
    PlayerEliminated,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWon => write!(f, "won"),
            Self::PlayerEliminated => write!(f, "eliminated"),
        }
    }
}

/// Where the season is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The cast arrives and meets the target.
    Introduction,
    /// Standings after first impressions.
    FirstImpression,
    /// Scheduled ceremony at this index.
    Round(usize),
    /// Schedule done; the final rose goes to the top of the board.
    Proposal,
    /// Nothing left to play.
    Finished(Verdict),
}

const OPENERS: [(&str, &str); 3] = [
    ("ask", "Ask what he's looking for in a partner"),
    ("joke", "Crack a joke about the limo ride"),
    ("compliment", "Compliment his smile"),
];

/// A single season of the show.
pub struct Season<R = StdRng> {
    config: SeasonConfig,
    state: GameState,
    preferences: TargetPreferences,
    phase: Phase,
    history: Vec<RoundSnapshot>,
    journal: Journal,
    winner: Option<String>,
    rng: R,
}

impl Season<StdRng> {
    /// Validate the config and generate a cast around `player`, seeded from the config.
    pub fn new(config: SeasonConfig, player: Character) -> EngineResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, player, rng)
    }
}

impl<R: Rng> Season<R> {
    /// Like [`Season::new`] with an injected generator.
    ///
    /// Configuration errors surface here, before any round runs.
    pub fn with_rng(config: SeasonConfig, player: Character, mut rng: R) -> EngineResult<Self> {
        config.validate()?;
        let state = generate_state(&config.cast, player, &mut rng)?;
        let preferences = if config.cast.target_preferences.is_empty() {
            TargetPreferences::indifferent()
        } else {
            TargetPreferences::roll(&config.cast.target_preferences, &mut rng)
        };
        debug!(
            favorite = ?preferences.favorite(),
            dislikes_drama = preferences.dislikes_drama(),
            "target preferences"
        );
        info!(
            cast = %config.cast.name,
            contestants = state.roster().len(),
            rounds = config.schedule.len(),
            "season ready"
        );
        Ok(Self {
            config,
            state,
            preferences,
            phase: Phase::Introduction,
            history: Vec::new(),
            journal: Journal::new(),
            winner: None,
            rng,
        })
    }

    /// The game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// What the target looks for this season.
    pub fn preferences(&self) -> &TargetPreferences {
        &self.preferences
    }

    /// The configuration this season runs on.
    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshots presented so far: first impressions, then one per ceremony.
    pub fn history(&self) -> &[RoundSnapshot] {
        &self.history
    }

    /// The season journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Who received the final rose, once decided.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// The verdict, once the season has finished.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Finished(v) => Some(v),
            _ => None,
        }
    }

    /// Play until the season finishes.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Verdict> {
        loop {
            if let Phase::Finished(verdict) = self.step(presenter)? {
                return Ok(verdict);
            }
        }
    }

    /// Advance one phase and return the new one.
    pub fn step(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Phase> {
        self.phase = match self.phase {
            Phase::Introduction => self.introduction(presenter)?,
            Phase::FirstImpression => self.first_impression(presenter)?,
            Phase::Round(index) => self.round(index, presenter)?,
            Phase::Proposal => self.proposal(presenter)?,
            done @ Phase::Finished(_) => done,
        };
        Ok(self.phase)
    }

    fn introduction(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Phase> {
        presenter.present_narrative(
            "Final Rose",
            &narrative::opening(&self.config.cast, self.state.player()),
        )?;
        presenter.present_narrative(
            "The Contestants",
            &narrative::cast_introduction(self.state.roster()),
        )?;
        presenter.present_narrative(
            "The Leading Man",
            &narrative::target_introduction(self.state.target()),
        )?;

        let prompt = format!(
            "{} walks up to you. What do you say?",
            self.state.target().name
        );
        let options: Vec<ChoiceOption> = OPENERS
            .iter()
            .map(|(value, label)| ChoiceOption::new(*label, *value))
            .collect();
        let opener = presenter.collect_choice(&prompt, &options)?;
        debug!(%opener, "opening line");
        let response = narrative::target_response(
            self.state.target(),
            self.state.player(),
            &opener,
            &mut self.rng,
        );
        presenter.present_narrative("First Meeting", &response)?;

        let deltas = score_introductions(&mut self.state, &self.preferences, &mut self.rng)?;
        debug!(scored = deltas.len(), "introductions scored");
        self.journal.append(JournalEntry::Introduction {
            target: self.state.target().name.clone(),
            contestants: self.state.roster().len(),
            timestamp: Utc::now(),
        });
        Ok(Phase::FirstImpression)
    }

    fn first_impression(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Phase> {
        let snapshot =
            RoundSnapshot::standings("First Impressions", self.state.roster(), self.state.ledger());
        presenter.present_round(&snapshot)?;

        let total = snapshot.ranked.len();
        if let Some(me) = snapshot.player_entry() {
            presenter.present_narrative(
                "First Impressions",
                &narrative::standing_remark(&me.name, me.position, total),
            )?;
            self.journal.append(JournalEntry::FirstImpression {
                position: me.position,
                total,
                timestamp: Utc::now(),
            });
        }
        self.history.push(snapshot);
        Ok(Phase::Round(0))
    }

    fn round(&mut self, index: usize, presenter: &mut dyn Presenter) -> EngineResult<Phase> {
        let spec = self.config.schedule.get(index).cloned().ok_or_else(|| {
            EngineError::InvalidConfig(format!("no round scheduled at index {index}"))
        })?;
        presenter.present_narrative(
            &spec.label,
            &format!("This week the show heads to {}.", spec.venue),
        )?;

        self.activity(&spec, presenter)?;
        for event in &spec.events {
            self.event(*event, presenter)?;
        }
        if spec.mingle {
            self.mingle(presenter)?;
        }

        let partition = eliminate(
            spec.policy,
            self.state.roster(),
            self.state.ledger(),
            spec.remove_count,
            &mut self.rng,
        )?;
        let status = check_terminal(&partition);
        let snapshot = RoundSnapshot::ceremony(
            self.state.round() + 1,
            spec.label.clone(),
            spec.policy,
            &partition,
            self.state.ledger(),
            status,
        );
        self.state
            .apply_round(partition.kept.clone(), &partition.removed)?;

        info!(
            round = %spec.label,
            policy = %spec.policy,
            remove = spec.remove_count,
            removed = ?snapshot.eliminated_this_round,
            remaining = self.state.roster().len(),
            "rose ceremony"
        );
        self.journal.append(JournalEntry::Ceremony {
            round: snapshot.round,
            label: spec.label.clone(),
            eliminated: snapshot.eliminated_this_round.clone(),
            timestamp: Utc::now(),
        });

        presenter.present_round(&snapshot)?;
        presenter.present_narrative(
            &spec.label,
            &narrative::farewell(&snapshot.eliminated_this_round),
        )?;
        self.history.push(snapshot);

        match status {
            TerminalStatus::PlayerEliminated => self.finish(Verdict::PlayerEliminated, None, presenter),
            TerminalStatus::PlayerWon => {
                let me = self.state.player().name.clone();
                self.finish(Verdict::PlayerWon, Some(me), presenter)
            }
            TerminalStatus::Continuing if index + 1 < self.config.schedule.len() => {
                Ok(Phase::Round(index + 1))
            }
            TerminalStatus::Continuing => Ok(Phase::Proposal),
        }
    }

    fn activity(&mut self, spec: &RoundSpec, presenter: &mut dyn Presenter) -> EngineResult<()> {
        if spec.activities.is_empty() {
            return Ok(());
        }
        let options: Vec<ChoiceOption> = spec
            .activities
            .iter()
            .map(|a| ChoiceOption::new(a.label.clone(), a.key.clone()))
            .collect();
        let key = presenter.collect_choice("What do you want to do?", &options)?;
        let chosen = spec
            .activities
            .iter()
            .find(|a| a.key == key)
            .ok_or_else(|| EngineError::Presenter(format!("unknown activity '{key}'")))?;
        let outcome = resolve_activity(&mut self.state, chosen, &self.preferences, &mut self.rng)?;
        presenter.present_narrative(&chosen.label, &narrative::activity_line(&outcome))?;
        self.journal.append(JournalEntry::Activity {
            activity: outcome.activity.clone(),
            total: outcome.roll + outcome.stat_value,
            success: outcome.success,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn event(&mut self, event: RoundEvent, presenter: &mut dyn Presenter) -> EngineResult<()> {
        let me = self.state.player().name.clone();
        let target = self.state.target().name.clone();
        match event {
            RoundEvent::GroupDate(stat) => {
                let outcome = resolve_group_date(&mut self.state, stat, &mut self.rng)?;
                presenter.present_narrative(
                    "Group Date",
                    &narrative::group_date_line(&outcome, &me, &target),
                )?;
                self.journal.append(JournalEntry::GroupDate {
                    stat: outcome.stat.to_string(),
                    winner: outcome.winner,
                    timestamp: Utc::now(),
                });
            }
            RoundEvent::Drama => {
                let outcome = resolve_drama(&mut self.state, &self.preferences, &mut self.rng)?;
                presenter.present_narrative(
                    "Cocktail Party",
                    &narrative::drama_line(&outcome, &target),
                )?;
                self.journal.append(JournalEntry::Drama {
                    involved: outcome.involved(&me),
                    delta: outcome.delta(),
                    timestamp: Utc::now(),
                });
                if let DramaOutcome::Player { delta } = outcome {
                    info!(delta, "player caught up in drama");
                }
            }
        }
        Ok(())
    }

    fn mingle(&mut self, presenter: &mut dyn Presenter) -> EngineResult<()> {
        let options: Vec<ChoiceOption> = self
            .state
            .roster()
            .rivals()
            .map(|c| {
                let desc = c.describe();
                let label = if desc.is_empty() {
                    c.name.clone()
                } else {
                    format!("{}, {desc}", c.name)
                };
                ChoiceOption::new(label, c.name.clone())
            })
            .collect();
        if options.is_empty() {
            return Ok(());
        }
        let name = presenter.collect_choice("Who do you spend time with?", &options)?;
        let outcome = apply_interaction(&mut self.state, &name)?;
        presenter.present_narrative("Mingling", &narrative::interaction_line(&outcome))?;
        self.journal.append(JournalEntry::Interaction {
            contestant: outcome.contestant.clone(),
            delta: outcome.delta,
            chemistry: outcome.chemistry,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn proposal(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Phase> {
        let winner = proposal_winner(self.state.roster(), self.state.ledger())
            .map(|c| (c.name.clone(), c.is_player));
        match winner {
            Some((name, true)) => self.finish(Verdict::PlayerWon, Some(name), presenter),
            Some((name, false)) => self.finish(Verdict::PlayerEliminated, Some(name), presenter),
            None => self.finish(Verdict::PlayerEliminated, None, presenter),
        }
    }

    fn finish(
        &mut self,
        verdict: Verdict,
        winner: Option<String>,
        presenter: &mut dyn Presenter,
    ) -> EngineResult<Phase> {
        let text = match verdict {
            Verdict::PlayerWon => narrative::victory(self.state.player(), self.state.target()),
            Verdict::PlayerEliminated => narrative::defeat(self.state.player(), self.state.target()),
        };
        info!(%verdict, winner = ?winner, round = self.state.round(), "season finished");
        self.journal.append(JournalEntry::Verdict {
            outcome: verdict.to_string(),
            winner: winner.clone(),
            timestamp: Utc::now(),
        });
        self.winner = winner;
        presenter.present_narrative("The Final Rose", &text)?;
        Ok(Phase::Finished(verdict))
    }
}

fn proposal_winner<'a>(roster: &'a Roster, ledger: &RelationshipLedger) -> Option<&'a Character> {
    rank(roster, ledger).into_iter().next()
}
