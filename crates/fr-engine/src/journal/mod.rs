//! Season journal: a timestamped record of what happened on the show.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
