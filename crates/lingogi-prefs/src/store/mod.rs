//! Process-wide language preferences.
//!
//! `PreferenceStore::resolve` reads durable storage once and is the only way
//! to obtain a store, so profile events can never be applied before the
//! stored values are known.


use lingogi_core::{
    traits::{DisplayLanguageSwitch, KeyValueStorage},
    LingogiError, LocaleCode, UserProfile,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::keys;
use crate::storage::{read_or_warn, write_or_warn};

/// Language used when nothing else resolves.
pub const FALLBACK_LANGUAGE: LocaleCode = LocaleCode::En;

/// Resolved preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceState {
    /// Language the interface is rendered in.
    pub ui_language: LocaleCode,
    /// Language the user is learning (profile-level).
    pub target_language: LocaleCode,
    /// Keep `ui_language` equal to the profile's native language.
    pub mirror_native: bool,
}

/// Owns `PreferenceState` and its persistence.
pub struct PreferenceStore {
    state: PreferenceState,
    profile: Option<UserProfile>,
    ui_languages: Vec<LocaleCode>,
    storage: Arc<dyn KeyValueStorage>,
    display: Arc<dyn DisplayLanguageSwitch>,
}

impl PreferenceStore {
    /// Resolve initial values from storage and apply the UI language to
    /// `display`. Nothing is written back.
    ///
    /// `ui_languages` are the languages that have a UI bundle;
    /// `client_locale` is what the client reports (`ko-KR`, `fr_FR.UTF-8`).
    pub fn resolve(
        storage: Arc<dyn KeyValueStorage>,
        display: Arc<dyn DisplayLanguageSwitch>,
        ui_languages: Vec<LocaleCode>,
        client_locale: Option<&str>,
    ) -> Self {
        let ui_language = resolve_ui_language(storage.as_ref(), &ui_languages, client_locale);
        let target_language = stored_code(storage.as_ref(), keys::TARGET_LANGUAGE)
            .unwrap_or(FALLBACK_LANGUAGE);
        let mirror_native = stored_flag(storage.as_ref(), keys::MIRROR_NATIVE_LANGUAGE)
            .unwrap_or(false);

        let state = PreferenceState {
            ui_language,
            target_language,
            mirror_native,
        };
        info!(
            "preferences resolved: ui={}, target={}, mirror_native={}",
            state.ui_language, state.target_language, state.mirror_native
        );
        display.switch_display_language(ui_language);

        Self {
            state,
            profile: None,
            ui_languages,
            storage,
            display,
        }
    }

    pub fn state(&self) -> PreferenceState {
        self.state
    }

    pub fn ui_language(&self) -> LocaleCode {
        self.state.ui_language
    }

    pub fn target_language(&self) -> LocaleCode {
        self.state.target_language
    }

    pub fn mirror_native(&self) -> bool {
        self.state.mirror_native
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn ui_languages(&self) -> &[LocaleCode] {
        &self.ui_languages
    }

    /// Set, persist and display a UI language.
    ///
    /// Codes without a UI bundle are rejected and nothing changes. Setting
    /// the current value still persists and re-applies the display.
    pub fn set_ui_language(&mut self, code: &str) -> Result<LocaleCode, LingogiError> {
        let parsed: LocaleCode = code.parse()?;
        if !self.ui_languages.contains(&parsed) {
            return Err(LingogiError::UnsupportedLocale(code.to_string()));
        }
        self.apply_ui_language(parsed);
        Ok(parsed)
    }

    /// Set and persist the learning language. The display is untouched.
    pub fn set_target_language(&mut self, code: &str) -> Result<LocaleCode, LingogiError> {
        let parsed: LocaleCode = code.parse()?;
        if self.state.target_language != parsed {
            info!(
                "target language: {} → {parsed}",
                self.state.target_language
            );
        }
        self.state.target_language = parsed;
        write_or_warn(self.storage.as_ref(), keys::TARGET_LANGUAGE, parsed.as_str());
        Ok(parsed)
    }

    /// Toggle native-language mirroring.
    ///
    /// Turning it on with a known profile switches the UI to the native
    /// language right away. Turning it off leaves the UI language alone.
    pub fn set_mirror_native(&mut self, enabled: bool) {
        if self.state.mirror_native == enabled {
            return;
        }
        self.state.mirror_native = enabled;
        write_or_warn(
            self.storage.as_ref(),
            keys::MIRROR_NATIVE_LANGUAGE,
            if enabled { "true" } else { "false" },
        );
        info!("mirror native language: {enabled}");

        if enabled {
            if let Some(native) = self.profile.as_ref().map(|p| p.native_language) {
                self.mirror_to(native);
            }
        }
    }

    /// Remember the signed-in user's profile and re-apply mirroring.
    pub fn on_profile_loaded(&mut self, profile: UserProfile) {
        let native = profile.native_language;
        debug!("profile loaded: native={native}, learning={}", profile.learning_language);
        self.profile = Some(profile);
        if self.state.mirror_native && native != self.state.ui_language {
            self.mirror_to(native);
        }
    }

    /// Forget the profile on logout. The UI language stays as it is.
    pub fn on_profile_cleared(&mut self) {
        if self.profile.take().is_some() {
            debug!("profile cleared");
        }
    }

    fn mirror_to(&mut self, native: LocaleCode) {
        if !self.ui_languages.contains(&native) {
            warn!(
                "native language '{native}' has no UI bundle, keeping '{}'",
                self.state.ui_language
            );
            return;
        }
        self.apply_ui_language(native);
    }

    fn apply_ui_language(&mut self, code: LocaleCode) {
        if self.state.ui_language != code {
            info!("ui language: {} → {code}", self.state.ui_language);
        }
        self.state.ui_language = code;
        write_or_warn(self.storage.as_ref(), keys::UI_LANGUAGE, code.as_str());
        self.display.switch_display_language(code);
    }
}

fn resolve_ui_language(
    storage: &dyn KeyValueStorage,
    ui_languages: &[LocaleCode],
    client_locale: Option<&str>,
) -> LocaleCode {
    if let Some(code) = stored_code(storage, keys::UI_LANGUAGE) {
        if ui_languages.contains(&code) {
            return code;
        }
        warn!("stored ui language '{code}' has no UI bundle, ignoring");
    }
    let from_client =
        client_locale.and_then(|raw| LocaleCode::match_client_locale(raw, ui_languages));
    if let Some(code) = from_client {
        debug!("ui language from client locale: {code}");
        return code;
    }
    FALLBACK_LANGUAGE
}

/// Stored language code, ignoring values that do not parse.
fn stored_code(storage: &dyn KeyValueStorage, key: &str) -> Option<LocaleCode> {
    let raw = read_or_warn(storage, key)?;
    match raw.parse() {
        Ok(code) => Some(code),
        Err(_) => {
            warn!("ignoring stored {key}='{raw}': unsupported language");
            None
        }
    }
}

fn stored_flag(storage: &dyn KeyValueStorage, key: &str) -> Option<bool> {
    let raw = read_or_warn(storage, key)?;
    match raw.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            warn!("ignoring stored {key}='{raw}': expected true or false");
            None
        }
    }
}
