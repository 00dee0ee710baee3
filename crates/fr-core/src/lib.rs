//! Core types for Final Rose: characters, the roster, and the relationship ledger.
//!
//! This crate defines the data model the season engine mutates. It holds no
//! randomness and no presentation logic; every mutator here preserves the
//! roster invariants (unique names, one ledger entry per contestant, an
//! append-only eliminated set disjoint from the roster).

/// Characters, stats, and cosmetic attributes.
pub mod character;
/// The append-only record of eliminated contestants.
pub mod eliminated;
/// Error types used throughout the crate.
pub mod error;
/// Relationship scores keyed by contestant name.
pub mod ledger;
/// The ordered set of contestants still competing.
pub mod roster;
/// The aggregate game state owned by a season.
pub mod state;

/// Re-export character types.
pub use character::{Character, Stat, Stats};
/// Re-export the eliminated set.
pub use eliminated::EliminatedSet;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the ledger.
pub use ledger::RelationshipLedger;
/// Re-export the roster.
pub use roster::Roster;
/// Re-export the game state.
pub use state::GameState;
