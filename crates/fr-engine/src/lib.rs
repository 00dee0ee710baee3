//! Episode progression and elimination engine for Final Rose.
//!
//! Generates a cast, seeds relationship scores, sequences a fixed schedule of
//! rose ceremonies (with optional group dates and drama), and eliminates
//! contestants by ranked cutoff or weighted random draw until the player wins
//! or is sent home. All presentation goes
//! through the [`Presenter`] trait; all randomness comes from an injected
//! generator.

pub mod cast;
pub mod config;
pub mod creation;
pub mod elimination;
pub mod error;
pub mod generator;
pub mod journal;
pub mod narrative;
pub mod preferences;
pub mod presenter;
pub mod schedule;
pub mod scoring;
pub mod season;
pub mod snapshot;
pub mod terminal;

pub use cast::{CastConfig, Preset, StatSchema};
pub use config::SeasonConfig;
pub use elimination::{EliminationPolicy, Partition};
pub use error::{EngineError, EngineResult, ErrorPhase};
pub use preferences::TargetPreferences;
pub use presenter::{ChoiceOption, Presenter, ScriptedPresenter};
pub use schedule::{Activity, RoundEvent, RoundSpec, Schedule};
pub use season::{Phase, Season, Verdict};
pub use snapshot::{RankedEntry, RoundSnapshot};
pub use terminal::TerminalStatus;
