//! The narrow interface between the engine and whatever shows the game.
//!
//! The engine produces text and asks for decisions; it never reads input
//! or writes output itself. Any presenter method may fail with
//! [`EngineError::PresenterAborted`] to end the session on the spot.

use std::collections::VecDeque;

use crate::error::{EngineError, EngineResult};
use crate::snapshot::RoundSnapshot;

/// One entry in a choice menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Text shown to the player.
    pub label: String,
    /// Key handed back to the engine.
    pub value: String,
}

impl ChoiceOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Displays narrative and collects player decisions.
pub trait Presenter {
    /// Show a block of narrative text.
    fn present_narrative(&mut self, title: &str, text: &str) -> EngineResult<()>;

    /// Ask the player to pick one option; returns its `value`.
    fn collect_choice(&mut self, prompt: &str, options: &[ChoiceOption]) -> EngineResult<String>;

    /// Ask the player for free text.
    fn collect_free_text(&mut self, prompt: &str) -> EngineResult<String>;

    /// Show the outcome of a round. Defaults to the plain leaderboard.
    fn present_round(&mut self, snapshot: &RoundSnapshot) -> EngineResult<()> {
        self.present_narrative(&snapshot.label, &snapshot.render_leaderboard())
    }
}

/// Replays queued answers. Used by tests and non-interactive runs.
///
/// With no queued choice it picks the first option. Free text must be queued.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    choices: VecDeque<String>,
    texts: VecDeque<String>,
    transcript: Vec<(String, String)>,
    rounds: Vec<RoundSnapshot>,
    abort_after: Option<usize>,
    calls: usize,
}

impl ScriptedPresenter {
    /// Create a presenter with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a choice value.
    pub fn with_choice(mut self, value: impl Into<String>) -> Self {
        self.choices.push_back(value.into());
        self
    }

    /// Queue several choice values.
    pub fn with_choices<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices.extend(values.into_iter().map(Into::into));
        self
    }

    /// Queue a free-text answer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push_back(text.into());
        self
    }

    /// Abort on the call after `calls` successful calls.
    pub fn abort_after(mut self, calls: usize) -> Self {
        self.abort_after = Some(calls);
        self
    }

    /// Every `(title, text)` pair presented so far.
    pub fn transcript(&self) -> &[(String, String)] {
        &self.transcript
    }

    /// Every round snapshot presented so far.
    pub fn rounds(&self) -> &[RoundSnapshot] {
        &self.rounds
    }

    /// Whether any narrative text contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript
            .iter()
            .any(|(title, text)| title.contains(needle) || text.contains(needle))
    }

    fn tick(&mut self) -> EngineResult<()> {
        if self.abort_after.is_some_and(|n| self.calls >= n) {
            return Err(EngineError::PresenterAborted);
        }
        self.calls += 1;
        Ok(())
    }
}

impl Presenter for ScriptedPresenter {
    fn present_narrative(&mut self, title: &str, text: &str) -> EngineResult<()> {
        self.tick()?;
        self.transcript.push((title.to_string(), text.to_string()));
        Ok(())
    }

    fn collect_choice(&mut self, prompt: &str, options: &[ChoiceOption]) -> EngineResult<String> {
        self.tick()?;
        let first = options
            .first()
            .ok_or_else(|| EngineError::Presenter(format!("no options offered for '{prompt}'")))?;
        match self.choices.pop_front() {
            None => Ok(first.value.clone()),
            Some(wanted) => options
                .iter()
                .find(|o| o.value == wanted)
                .map(|o| o.value.clone())
                .ok_or_else(|| {
                    EngineError::Presenter(format!("scripted choice '{wanted}' not offered for '{prompt}'"))
                }),
        }
    }

    fn collect_free_text(&mut self, prompt: &str) -> EngineResult<String> {
        self.tick()?;
        self.texts
            .pop_front()
            .ok_or_else(|| EngineError::Presenter(format!("no scripted answer for '{prompt}'")))
    }

    fn present_round(&mut self, snapshot: &RoundSnapshot) -> EngineResult<()> {
        self.rounds.push(snapshot.clone());
        self.present_narrative(&snapshot.label, &snapshot.render_leaderboard())
    }
}
