//! # lingogi-core
//!
//! Core types, traits, configuration, and error handling for the Lingogi
//! preference engine.

pub mod config;
pub mod error;
pub mod locale;
pub mod profile;
pub mod traits;

pub use config::shellexpand;
pub use error::LingogiError;
pub use locale::{DifficultyLevel, LanguageFeature, LocaleCode, SupportLevel};
pub use profile::{AuthSnapshot, LearningLanguage, LearningLanguages, UserProfile};
