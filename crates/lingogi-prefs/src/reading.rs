//! Reading page preferences: which language to read in and at what level.
//!
//! Scoped to a page session and kept apart from the profile. A choice made
//! here is written to its own storage keys and never changes the user's
//! profile or the global target language.

use lingogi_core::{
    traits::KeyValueStorage, AuthSnapshot, DifficultyLevel, LingogiError, LocaleCode, UserProfile,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::form_urlencoded;

use crate::keys;
use crate::storage::{read_or_warn, write_or_warn};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Storage,
    Url,
    Profile,
    Default,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Url => "url",
            Self::Profile => "profile",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `target` / `difficulty` parameters of the page URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingQuery {
    pub target: Option<LocaleCode>,
    pub difficulty: Option<DifficultyLevel>,
}

impl ReadingQuery {
    /// Decode a query string (`?target=ko&difficulty=advanced`).
    ///
    /// The first occurrence of each parameter counts. Values that do not
    /// parse are treated as absent.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut target = None;
        let mut difficulty = None;
        let mut seen_target = false;
        let mut seen_difficulty = false;
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "target" if !seen_target => {
                    seen_target = true;
                    target = value.parse().ok();
                    if target.is_none() {
                        debug!("ignoring url target='{value}'");
                    }
                }
                "difficulty" if !seen_difficulty => {
                    seen_difficulty = true;
                    difficulty = value.parse().ok();
                    if difficulty.is_none() {
                        debug!("ignoring url difficulty='{value}'");
                    }
                }
                _ => {}
            }
        }
        Self { target, difficulty }
    }
}

/// Reading language and difficulty for one page session.
pub struct ReadingPreference {
    target_language: LocaleCode,
    target_source: Source,
    difficulty: DifficultyLevel,
    difficulty_source: Source,
    query: ReadingQuery,
    signed_in: bool,
    storage: Arc<dyn KeyValueStorage>,
}

impl ReadingPreference {
    /// Resolve both fields: storage, then URL, then profile, then default.
    /// Profile values are not consulted while `auth` is still loading.
    pub fn resolve(
        storage: Arc<dyn KeyValueStorage>,
        query: ReadingQuery,
        auth: &AuthSnapshot,
    ) -> Self {
        let profile = auth.profile();
        let (target_language, target_source) = resolve_target(storage.as_ref(), &query, profile);
        let (difficulty, difficulty_source) =
            resolve_difficulty(storage.as_ref(), &query, profile);
        debug!(
            "reading preference: target={target_language} ({target_source}), \
             difficulty={difficulty} ({difficulty_source})"
        );
        Self {
            target_language,
            target_source,
            difficulty,
            difficulty_source,
            query,
            signed_in: profile.is_some(),
            storage,
        }
    }

    pub fn target_language(&self) -> LocaleCode {
        self.target_language
    }

    pub fn target_source(&self) -> Source {
        self.target_source
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn difficulty_source(&self) -> Source {
        self.difficulty_source
    }

    pub fn query(&self) -> &ReadingQuery {
        &self.query
    }

    /// Re-resolve when a user becomes available after the page loaded.
    ///
    /// A field already holding a stored or explicitly chosen value keeps it.
    /// The rest run the cascade again, where a valid stored value or the URL
    /// still wins over the profile.
    pub fn on_auth_changed(&mut self, auth: &AuthSnapshot) {
        let profile = auth.profile();
        let arrived = !self.signed_in && profile.is_some();
        self.signed_in = profile.is_some();
        if !arrived {
            return;
        }

        let storage = self.storage.as_ref();
        if self.target_source != Source::Storage {
            (self.target_language, self.target_source) =
                resolve_target(storage, &self.query, profile);
        }
        if self.difficulty_source != Source::Storage {
            (self.difficulty, self.difficulty_source) =
                resolve_difficulty(storage, &self.query, profile);
        }
        debug!(
            "reading preference after sign-in: target={} ({}), difficulty={} ({})",
            self.target_language, self.target_source, self.difficulty, self.difficulty_source
        );
    }

    /// Choose the reading language for this session and remember it.
    pub fn set_target_language(&mut self, code: &str) -> Result<LocaleCode, LingogiError> {
        let parsed: LocaleCode = code.parse()?;
        self.target_language = parsed;
        self.target_source = Source::Storage;
        write_or_warn(self.storage.as_ref(), keys::READING_TARGET_LANGUAGE, parsed.as_str());
        info!("reading language set: {parsed}");
        Ok(parsed)
    }

    /// Choose the reading difficulty for this session and remember it.
    pub fn set_difficulty(&mut self, level: &str) -> Result<DifficultyLevel, LingogiError> {
        let parsed: DifficultyLevel = level.parse()?;
        self.difficulty = parsed;
        self.difficulty_source = Source::Storage;
        write_or_warn(self.storage.as_ref(), keys::READING_DIFFICULTY, parsed.as_str());
        info!("reading difficulty set: {parsed}");
        Ok(parsed)
    }
}

fn resolve_target(
    storage: &dyn KeyValueStorage,
    query: &ReadingQuery,
    profile: Option<&UserProfile>,
) -> (LocaleCode, Source) {
    if let Some(raw) = read_or_warn(storage, keys::READING_TARGET_LANGUAGE) {
        match raw.parse() {
            Ok(code) => return (code, Source::Storage),
            Err(_) => warn!("ignoring stored reading language '{raw}'"),
        }
    }
    if let Some(code) = query.target {
        return (code, Source::Url);
    }
    if let Some(profile) = profile {
        return (profile.default_reading_language(), Source::Profile);
    }
    (LocaleCode::En, Source::Default)
}

fn resolve_difficulty(
    storage: &dyn KeyValueStorage,
    query: &ReadingQuery,
    profile: Option<&UserProfile>,
) -> (DifficultyLevel, Source) {
    if let Some(raw) = read_or_warn(storage, keys::READING_DIFFICULTY) {
        match raw.parse() {
            Ok(level) => return (level, Source::Storage),
            Err(_) => warn!("ignoring stored reading difficulty '{raw}'"),
        }
    }
    if let Some(level) = query.difficulty {
        return (level, Source::Url);
    }
    if let Some(profile) = profile {
        return (profile.proficiency, Source::Profile);
    }
    (DifficultyLevel::default(), Source::Default)
}
