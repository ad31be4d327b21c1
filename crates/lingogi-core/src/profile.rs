//! User profile snapshot supplied by the authentication subsystem.
//!
//! Read-only to the preference engine. `additional_languages` keeps at most
//! one default entry: lists built from snapshots are auto-corrected so the
//! first entry marked default keeps the flag.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::locale::{DifficultyLevel, LocaleCode};

/// A language the user is learning besides the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningLanguage {
    pub language: LocaleCode,
    #[serde(default)]
    pub proficiency: DifficultyLevel,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

impl LearningLanguage {
    pub fn new(language: LocaleCode, proficiency: DifficultyLevel) -> Self {
        Self {
            language,
            proficiency,
            is_default: false,
        }
    }
}

/// Ordered list of additional languages holding zero or one default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LearningLanguage>", into = "Vec<LearningLanguage>")]
pub struct LearningLanguages(Vec<LearningLanguage>);

impl From<Vec<LearningLanguage>> for LearningLanguages {
    fn from(mut entries: Vec<LearningLanguage>) -> Self {
        let mut seen_default = false;
        for entry in entries.iter_mut().filter(|e| e.is_default) {
            if seen_default {
                warn!(
                    "additional language '{}' also marked default, clearing flag",
                    entry.language
                );
                entry.is_default = false;
            }
            seen_default = true;
        }
        Self(entries)
    }
}

impl From<LearningLanguages> for Vec<LearningLanguage> {
    fn from(list: LearningLanguages) -> Self {
        list.0
    }
}

impl LearningLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[LearningLanguage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The entry marked default, if any.
    pub fn default_entry(&self) -> Option<&LearningLanguage> {
        self.0.iter().find(|e| e.is_default)
    }

    /// Append a language. The first language added to an empty list becomes
    /// the default; a new entry marked default takes the flag from the others.
    /// Re-adding a language already in the list replaces its proficiency.
    pub fn add(&mut self, mut entry: LearningLanguage) {
        if self.0.is_empty() {
            entry.is_default = true;
        }
        if entry.is_default {
            for other in &mut self.0 {
                other.is_default = false;
            }
        }
        match self.0.iter_mut().find(|e| e.language == entry.language) {
            Some(existing) => {
                existing.proficiency = entry.proficiency;
                existing.is_default |= entry.is_default;
            }
            None => self.0.push(entry),
        }
    }

    /// Move the default flag to `language`. Returns `false` (list unchanged)
    /// when the language is not in the list.
    pub fn set_default(&mut self, language: LocaleCode) -> bool {
        if !self.0.iter().any(|e| e.language == language) {
            return false;
        }
        for entry in &mut self.0 {
            entry.is_default = entry.language == language;
        }
        true
    }

    /// Remove a language. Returns `true` if it was present.
    pub fn remove(&mut self, language: LocaleCode) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e.language != language);
        before != self.0.len()
    }
}

/// Profile-level language settings for the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub native_language: LocaleCode,
    #[serde(default = "default_learning_language")]
    pub learning_language: LocaleCode,
    #[serde(default)]
    pub proficiency: DifficultyLevel,
    #[serde(default)]
    pub additional_languages: LearningLanguages,
}

fn default_learning_language() -> LocaleCode {
    LocaleCode::Ko
}

impl UserProfile {
    pub fn new(native_language: LocaleCode, learning_language: LocaleCode) -> Self {
        Self {
            native_language,
            learning_language,
            proficiency: DifficultyLevel::default(),
            additional_languages: LearningLanguages::new(),
        }
    }

    /// Language to read by default: the explicitly marked additional
    /// language, else the primary learning language.
    pub fn default_reading_language(&self) -> LocaleCode {
        self.additional_languages
            .default_entry()
            .map(|e| e.language)
            .unwrap_or(self.learning_language)
    }
}

/// What the authentication subsystem currently knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthSnapshot {
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// The profile, but only once loading has finished.
    pub fn profile(&self) -> Option<&UserProfile> {
        if self.loading {
            None
        } else {
            self.user.as_ref()
        }
    }
}
