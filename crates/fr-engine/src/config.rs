//! Season configuration.

use crate::cast::{CastConfig, Preset};
use crate::elimination::EliminationPolicy;
use crate::error::EngineResult;
use crate::schedule::Schedule;

/// Everything needed to run a season besides the player.
#[derive(Debug, Clone)]
pub struct SeasonConfig {
    /// RNG seed for reproducible seasons.
    pub seed: u64,
    /// Name pools, stat ranges, and roster size.
    pub cast: CastConfig,
    /// Ceremonies in play order.
    pub schedule: Schedule,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl SeasonConfig {
    /// Cast and schedule from a preset, seed 42.
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            seed: 42,
            cast: preset.cast(),
            schedule: preset.schedule(),
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the cast.
    pub fn with_cast(mut self, cast: CastConfig) -> Self {
        self.cast = cast;
        self
    }

    /// Replace the schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Use one elimination policy for every round.
    pub fn with_policy(mut self, policy: EliminationPolicy) -> Self {
        self.schedule = self.schedule.with_policy(policy);
        self
    }

    /// Check the cast and that the schedule fits the roster size.
    pub fn validate(&self) -> EngineResult<()> {
        self.cast.validate()?;
        self.schedule.validate(self.cast.contestant_count)
    }
}
