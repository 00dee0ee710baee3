//! Cast configuration: name pools, cosmetic categories, and stat schemas.
//!
//! Everything that differs between show formats lives here as data, so one
//! engine serves every format. The presets below cover the formats the game
//! ships with.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use fr_core::{Stat, Stats};

use crate::error::{EngineError, EngineResult};
use crate::schedule::Schedule;

/// Inclusive range for one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    /// Which stat.
    pub stat: Stat,
    /// Lowest value.
    pub min: i32,
    /// Highest value.
    pub max: i32,
}

/// Which stats a character carries and the range each is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSchema {
    ranges: Vec<StatRange>,
}

impl StatSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stat with an inclusive range.
    pub fn with(mut self, stat: Stat, min: i32, max: i32) -> Self {
        self.ranges.retain(|r| r.stat != stat);
        self.ranges.push(StatRange { stat, min, max });
        self
    }

    /// The same range for every listed stat.
    pub fn uniform(stats: &[Stat], min: i32, max: i32) -> Self {
        stats
            .iter()
            .fold(Self::new(), |schema, stat| schema.with(*stat, min, max))
    }

    /// All ranges in sheet order.
    pub fn ranges(&self) -> &[StatRange] {
        &self.ranges
    }

    /// Range for a stat, if the schema carries it.
    pub fn range(&self, stat: Stat) -> Option<StatRange> {
        self.ranges.iter().copied().find(|r| r.stat == stat)
    }

    /// Sum of the minimum values.
    pub fn min_total(&self) -> i32 {
        self.ranges.iter().map(|r| r.min).sum()
    }

    /// Roll an independent value for every stat.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Stats {
        let mut stats = Stats::new();
        for r in &self.ranges {
            stats.set(r.stat, rng.random_range(r.min..=r.max));
        }
        stats
    }

    fn validate(&self, what: &str) -> EngineResult<()> {
        if self.ranges.is_empty() {
            return Err(EngineError::InvalidConfig(format!("{what} has no stats")));
        }
        if let Some(r) = self.ranges.iter().find(|r| r.min > r.max) {
            return Err(EngineError::InvalidConfig(format!(
                "{what}: {} range {}..={} is empty",
                r.stat, r.min, r.max
            )));
        }
        Ok(())
    }
}

/// Everything the roster generator draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastConfig {
    /// Format name, shown in headers.
    pub name: String,
    /// Where the season is filmed.
    pub setting: String,
    /// Roster size including the player.
    pub contestant_count: usize,
    /// Pool of contestant names.
    pub contestant_names: Vec<String>,
    /// Pool of target names; kept apart from contestant names.
    pub target_names: Vec<String>,
    /// Role tags for the target (e.g. "the Firefighter").
    pub target_roles: Vec<String>,
    /// Eye colors.
    pub eye_colors: Vec<String>,
    /// Hair colors.
    pub hair_colors: Vec<String>,
    /// Heights.
    pub heights: Vec<String>,
    /// Descriptive nouns.
    pub nouns: Vec<String>,
    /// Personality tags.
    pub personalities: Vec<String>,
    /// Stats for contestants (and the player).
    pub contestant_stats: StatSchema,
    /// Stats for the target.
    pub target_stats: StatSchema,
    /// Maximum stat total the player may assign.
    pub player_budget: i32,
    /// Stats the target weighs when sizing people up; empty for no preferences.
    #[serde(default)]
    pub target_preferences: Vec<Stat>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl CastConfig {
    /// The small format: three stats, four contestants.
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            setting: "a seaside mansion".to_string(),
            contestant_count: 4,
            contestant_names: strings(&[
                "Ashley", "Jordan", "Kai", "Riley", "Skylar", "Taylor", "Morgan", "Cameron",
                "Jesse", "Avery",
            ]),
            target_names: strings(&["Brad", "Tyler", "Grant", "Colton", "Blake"]),
            target_roles: strings(&[
                "the Software Engineer",
                "the Firefighter",
                "the Pediatric Surgeon",
            ]),
            eye_colors: strings(&["Blue", "Green", "Brown", "Hazel"]),
            hair_colors: strings(&["Blonde", "Brunette", "Black", "Red"]),
            heights: strings(&["5'2\"", "5'5\"", "5'7\"", "5'10\"", "6'0\"", "6'2\""]),
            nouns: strings(&["woman", "man", "person"]),
            personalities: strings(&[
                "witty",
                "shy",
                "outgoing",
                "competitive",
                "thoughtful",
                "adventurous",
            ]),
            contestant_stats: StatSchema::uniform(
                &[Stat::Charisma, Stat::Attractiveness, Stat::Intelligence],
                1,
                5,
            ),
            target_stats: StatSchema::uniform(
                &[Stat::Charisma, Stat::Attractiveness, Stat::Intelligence],
                1,
                5,
            ),
            player_budget: 9,
            target_preferences: Vec::new(),
        }
    }

    /// The full season: five stats, twenty-five contestants, four ceremonies.
    pub fn boston() -> Self {
        Self {
            name: "Boston".to_string(),
            setting: "beautiful Boston, Massachusetts".to_string(),
            contestant_count: 25,
            contestant_names: strings(&[
                "Ashley", "Jordan", "Kai", "Riley", "Skylar", "Taylor", "Morgan", "Cameron",
                "Jesse", "Avery", "Alex", "Casey", "Jamie", "Dana", "Quinn", "Sydney", "Peyton",
                "Harper", "Rowan", "Emerson", "Finley", "Hayden", "Reese", "Sage", "Blair",
                "Parker", "Logan", "Drew", "Elliot", "Marley", "Shea", "Tatum", "Kendall",
                "Lennon", "Monroe", "Noel", "Oakley", "Remy", "Sloane", "Wren",
            ]),
            target_names: strings(&[
                "Brad", "Tyler", "Grant", "Colton", "Blake", "Zach", "Clayton", "Garrett",
            ]),
            target_roles: strings(&[
                "the Software Engineer",
                "the Firefighter",
                "the Pediatric Surgeon",
                "the Former Hockey Player",
                "the Harbor Pilot",
                "the Pastry Chef",
            ]),
            eye_colors: strings(&["Blue", "Green", "Brown", "Hazel", "Gray"]),
            hair_colors: strings(&["Blonde", "Brunette", "Black", "Red", "Auburn"]),
            heights: strings(&["5'2\"", "5'4\"", "5'5\"", "5'7\"", "5'10\"", "6'0\"", "6'2\""]),
            nouns: strings(&[
                "nurse",
                "lawyer",
                "dancer",
                "personal trainer",
                "nurse",
                "realtor",
                "marketing manager",
                "grad student",
            ]),
            personalities: strings(&[
                "witty",
                "shy",
                "outgoing",
                "competitive",
                "thoughtful",
                "adventurous",
                "dramatic",
                "sarcastic",
            ]),
            contestant_stats: StatSchema::uniform(Stat::all(), 1, 5),
            target_stats: StatSchema::uniform(Stat::all(), 1, 5),
            player_budget: 15,
            target_preferences: Vec::new(),
        }
    }

    /// The weekly format: high stats on a 5-10 scale, one exit per week.
    pub fn weekly() -> Self {
        Self {
            name: "Weekly".to_string(),
            setting: "a villa in the hills".to_string(),
            contestant_count: 5,
            contestant_names: strings(&[
                "Alex", "Jordan", "Taylor", "Sam", "Casey", "Jamie", "Morgan", "Riley", "Dana",
                "Skyler", "Cameron", "Quinn", "Sydney", "Avery", "Peyton", "Harper",
            ]),
            target_names: strings(&["Brad", "Tyler", "Grant", "Colton"]),
            target_roles: strings(&["the Architect", "the Surf Instructor", "the Vintner"]),
            eye_colors: strings(&["blue", "green", "brown", "hazel", "gray"]),
            hair_colors: strings(&["blonde", "brunette", "black", "red", "auburn"]),
            heights: strings(&["5'2\"", "5'4\"", "5'6\"", "5'8\"", "5'10\"", "6'0\""]),
            nouns: strings(&["contestant"]),
            personalities: strings(&[
                "witty",
                "shy",
                "outgoing",
                "competitive",
                "thoughtful",
                "adventurous",
            ]),
            contestant_stats: StatSchema::uniform(
                &[Stat::Charisma, Stat::Attractiveness, Stat::Intelligence],
                5,
                10,
            ),
            target_stats: StatSchema::uniform(
                &[Stat::Charisma, Stat::Attractiveness, Stat::Intelligence],
                3,
                10,
            ),
            player_budget: 24,
            target_preferences: vec![Stat::Charisma, Stat::Attractiveness, Stat::Intelligence],
        }
    }

    /// Override the roster size.
    pub fn with_contestant_count(mut self, count: usize) -> Self {
        self.contestant_count = count;
        self
    }

    /// Check that every category can be drawn from and the player budget is reachable.
    ///
    /// Name pool size is checked by the generator, which knows the player's name.
    pub fn validate(&self) -> EngineResult<()> {
        if self.contestant_count == 0 {
            return Err(EngineError::InvalidConfig(
                "contestant count must be at least 1".to_string(),
            ));
        }
        let categories = [
            ("eye colors", &self.eye_colors),
            ("hair colors", &self.hair_colors),
            ("heights", &self.heights),
            ("nouns", &self.nouns),
            ("personalities", &self.personalities),
            ("target roles", &self.target_roles),
        ];
        if let Some((what, _)) = categories.iter().find(|(_, pool)| pool.is_empty()) {
            return Err(EngineError::InvalidConfig(format!("{what} pool is empty")));
        }
        self.contestant_stats.validate("contestant stats")?;
        self.target_stats.validate("target stats")?;
        if let Some(stat) = self
            .target_preferences
            .iter()
            .find(|&&stat| self.contestant_stats.range(stat).is_none())
        {
            return Err(EngineError::InvalidConfig(format!(
                "target prefers {stat}, which contestants do not have"
            )));
        }
        if self.player_budget < self.contestant_stats.min_total() {
            return Err(EngineError::InvalidConfig(format!(
                "player budget {} is below the minimum stat total {}",
                self.player_budget,
                self.contestant_stats.min_total()
            )));
        }
        Ok(())
    }
}

impl Default for CastConfig {
    fn default() -> Self {
        Self::boston()
    }
}

/// A named bundle of cast and schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Four contestants, three single-exit ceremonies.
    Classic,
    /// Twenty-five contestants, four ceremonies across Massachusetts.
    #[default]
    Boston,
    /// Five contestants on a 5-10 stat scale, one exit per week.
    Weekly,
}

impl Preset {
    /// Parse a preset name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "boston" | "season" => Some(Self::Boston),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// All presets.
    pub fn all() -> &'static [Self] {
        &[Self::Classic, Self::Boston, Self::Weekly]
    }

    /// The cast configuration for this preset.
    pub fn cast(self) -> CastConfig {
        match self {
            Self::Classic => CastConfig::classic(),
            Self::Boston => CastConfig::boston(),
            Self::Weekly => CastConfig::weekly(),
        }
    }

    /// The ceremony schedule for this preset.
    pub fn schedule(self) -> Schedule {
        match self {
            Self::Classic => Schedule::classic(),
            Self::Boston => Schedule::boston(),
            Self::Weekly => Schedule::weekly(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Boston => write!(f, "boston"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}
