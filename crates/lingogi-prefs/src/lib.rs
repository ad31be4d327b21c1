//! # lingogi-prefs
//!
//! Preference resolution for Lingogi:
//! - `storage` — durable key-value backends (JSON file, memory)
//! - `store` — process-wide UI/target language and native-language mirroring
//! - `reading` — page-scoped reading language and difficulty, URL aware

pub mod keys;
pub mod reading;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;

pub use reading::{ReadingPreference, ReadingQuery, Source};
pub use storage::{open_storage, FileStorage, MemoryStorage};
pub use store::{PreferenceState, PreferenceStore};
