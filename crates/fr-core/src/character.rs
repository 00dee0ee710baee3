use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric attribute on a character sheet.
///
/// Which stats a cast actually uses is decided by its stat schema; a
/// character that lacks a stat reads it as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Social ease and wit.
    Charisma,
    /// Physical appeal.
    Attractiveness,
    /// Book smarts and curiosity.
    Intelligence,
    /// Physical strength and stamina.
    Strength,
    /// Self-assurance under pressure.
    Confidence,
}

impl Stat {
    /// All stats in sheet order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Charisma,
            Self::Attractiveness,
            Self::Intelligence,
            Self::Strength,
            Self::Confidence,
        ]
    }

    /// Parse a stat from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "charisma" | "cha" => Some(Self::Charisma),
            "attractiveness" | "looks" => Some(Self::Attractiveness),
            "intelligence" | "int" => Some(Self::Intelligence),
            "strength" | "str" => Some(Self::Strength),
            "confidence" | "con" => Some(Self::Confidence),
            _ => None,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charisma => write!(f, "Charisma"),
            Self::Attractiveness => write!(f, "Attractiveness"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Strength => write!(f, "Strength"),
            Self::Confidence => write!(f, "Confidence"),
        }
    }
}

/// A sparse stat sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats(BTreeMap<Stat, i32>);

impl Stats {
    /// Create an empty stat sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Set a stat value.
    pub fn set(&mut self, stat: Stat, value: i32) {
        self.0.insert(stat, value);
    }

    /// Get a stat value, or 0 if the sheet does not carry it.
    pub fn get(&self, stat: Stat) -> i32 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    /// Whether the sheet carries this stat.
    pub fn has(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    /// Sum of all stats on the sheet.
    pub fn total(&self) -> i32 {
        self.0.values().sum()
    }

    /// Iterate stats in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }

    /// Number of stats on the sheet.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A contestant, the player, or the target everyone competes for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name; unique within a roster.
    pub name: String,
    /// Numeric attributes.
    pub stats: Stats,
    /// Eye color.
    pub eye_color: String,
    /// Hair color.
    pub hair_color: String,
    /// Height as displayed (e.g. `5'7"`).
    pub height: String,
    /// Descriptive noun (e.g. "woman", "dancer").
    pub noun: String,
    /// Free-text personality tag, or the role tag for the target.
    pub personality: String,
    /// Whether this is the human player.
    pub is_player: bool,
    /// Whether this is the target character.
    pub is_target: bool,
}

impl Character {
    fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: Stats::new(),
            eye_color: String::new(),
            hair_color: String::new(),
            height: String::new(),
            noun: String::new(),
            personality: String::new(),
            is_player: false,
            is_target: false,
        }
    }

    /// Create an AI contestant.
    pub fn contestant(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    /// Create the player character.
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            is_player: true,
            ..Self::blank(name)
        }
    }

    /// Create the target character.
    pub fn target(name: impl Into<String>) -> Self {
        Self {
            is_target: true,
            ..Self::blank(name)
        }
    }

    /// Set a stat.
    pub fn with_stat(mut self, stat: Stat, value: i32) -> Self {
        self.stats.set(stat, value);
        self
    }

    /// Replace the whole stat sheet.
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Set eye color, hair color, and height.
    pub fn with_looks(
        mut self,
        eye_color: impl Into<String>,
        hair_color: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        self.eye_color = eye_color.into();
        self.hair_color = hair_color.into();
        self.height = height.into();
        self
    }

    /// Set the descriptive noun.
    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    /// Set the personality (or role) tag.
    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = personality.into();
        self
    }

    /// Shorthand for the charisma stat.
    pub fn charisma(&self) -> i32 {
        self.stats.get(Stat::Charisma)
    }

    /// Shorthand for the attractiveness stat.
    pub fn attractiveness(&self) -> i32 {
        self.stats.get(Stat::Attractiveness)
    }

    /// One-line description used when introducing the cast.
    ///
    /// Empty attributes are skipped, so a sparse character still reads well.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.personality.is_empty() {
            parts.push(self.personality.clone());
        }
        if !self.eye_color.is_empty() {
            parts.push(format!("{}-eyed", self.eye_color));
        }
        if !self.hair_color.is_empty() {
            parts.push(format!("{}-haired", self.hair_color));
        }
        let mut tail = String::new();
        if !self.height.is_empty() {
            tail.push_str(&self.height);
        }
        if !self.noun.is_empty() {
            if !tail.is_empty() {
                tail.push(' ');
            }
            tail.push_str(&self.noun);
        }
        let mut out = parts.join(", ");
        if !tail.is_empty() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&tail);
        }
        out
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
