//! Per-process session: owns the preference store and wires it to the
//! translator, the auth snapshot and the completeness monitor.

use lingogi_core::{
    config::DiagnosticsConfig, traits::KeyValueStorage, AuthSnapshot, LingogiError, LocaleCode,
};
use lingogi_i18n::{CompletenessReport, LocaleCatalog, Translator};
use lingogi_prefs::{PreferenceStore, ReadingPreference, ReadingQuery};
use std::sync::Arc;
use tracing::{debug, info};

use crate::diagnostics::CompletenessMonitor;

/// Everything a session needs from the outside.
pub struct SessionContext<'a> {
    pub storage: Arc<dyn KeyValueStorage>,
    pub catalog: Arc<LocaleCatalog>,
    pub diagnostics: &'a DiagnosticsConfig,
    pub client_locale: Option<&'a str>,
}

pub struct Session {
    storage: Arc<dyn KeyValueStorage>,
    translator: Arc<Translator>,
    store: PreferenceStore,
    monitor: CompletenessMonitor,
    auth: AuthSnapshot,
}

impl Session {
    /// Phase 1 resolves stored preferences, phase 2 applies the auth
    /// snapshot on top. Also schedules the startup translation check.
    pub fn init(ctx: SessionContext<'_>, auth: AuthSnapshot) -> Self {
        let translator = Arc::new(Translator::new(ctx.catalog.clone()));
        let store = PreferenceStore::resolve(
            ctx.storage.clone(),
            translator.clone(),
            ctx.catalog.ui_languages(),
            ctx.client_locale,
        );
        let mut monitor = CompletenessMonitor::new(ctx.catalog, ctx.diagnostics);
        monitor.on_session_start();

        let mut session = Self {
            storage: ctx.storage,
            translator,
            store,
            monitor,
            auth: AuthSnapshot::loading(),
        };
        session.on_auth_changed(auth);
        info!("session started: ui={}", session.store.ui_language());
        session
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Feed a new auth snapshot. Repeated identical snapshots are ignored.
    pub fn on_auth_changed(&mut self, auth: AuthSnapshot) {
        if auth == self.auth {
            return;
        }
        let previous = self.auth.profile().cloned();
        self.auth = auth;
        match self.auth.profile() {
            Some(profile) if previous.as_ref() != Some(profile) => {
                self.store.on_profile_loaded(profile.clone());
            }
            None if !self.auth.loading && previous.is_some() => {
                self.store.on_profile_cleared();
            }
            _ => {}
        }
    }

    /// UI language picked by the user. Switching by hand stops mirroring
    /// the native language, and re-runs the translation check.
    pub fn choose_ui_language(&mut self, code: &str) -> Result<LocaleCode, LingogiError> {
        let chosen = self.store.set_ui_language(code)?;
        if self.store.mirror_native() {
            debug!("manual ui language choice disables mirroring");
            self.store.set_mirror_native(false);
        }
        self.monitor.on_ui_language_changed();
        Ok(chosen)
    }

    pub fn set_target_language(&mut self, code: &str) -> Result<LocaleCode, LingogiError> {
        self.store.set_target_language(code)
    }

    pub fn set_mirror_native(&mut self, enabled: bool) {
        self.store.set_mirror_native(enabled);
    }

    /// Reading preferences for a page opened with `query`.
    pub fn open_reading(&self, query: ReadingQuery) -> ReadingPreference {
        ReadingPreference::resolve(self.storage.clone(), query, &self.auth)
    }

    /// End the session. A startup translation check that has not run yet
    /// runs now; its report is returned when diagnostics are enabled.
    pub async fn teardown(mut self) -> Option<CompletenessReport> {
        let report = self.monitor.finish().await;
        debug!("session closed");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingogi_core::{DifficultyLevel, UserProfile};
    use lingogi_prefs::{MemoryStorage, Source};

    fn diagnostics(enabled: bool) -> DiagnosticsConfig {
        DiagnosticsConfig {
            check_translations: enabled,
            startup_delay_ms: 0,
        }
    }

    fn session(storage: Arc<MemoryStorage>, locale: Option<&str>, auth: AuthSnapshot) -> Session {
        let catalog = Arc::new(LocaleCatalog::embedded(LocaleCode::En).unwrap());
        Session::init(
            SessionContext {
                storage,
                catalog,
                diagnostics: &diagnostics(false),
                client_locale: locale,
            },
            auth,
        )
    }

    #[tokio::test]
    async fn test_init_resolves_then_applies_profile() {
        let storage = Arc::new(MemoryStorage::with_values([
            ("ui_language", "es"),
            ("mirror_native_language", "true"),
        ]));
        let s = session(
            storage.clone(),
            Some("fr-FR"),
            AuthSnapshot::signed_in(UserProfile::new(LocaleCode::Ko, LocaleCode::Ja)),
        );
        assert_eq!(s.store().ui_language(), LocaleCode::Ko);
        assert_eq!(s.translator().active_language(), LocaleCode::Ko);
        assert_eq!(s.translator().t("nav.settings"), "설정");
        assert_eq!(storage.get("ui_language").unwrap().as_deref(), Some("ko"));
        assert!(s.teardown().await.is_none());
    }

    #[tokio::test]
    async fn test_translator_follows_client_locale() {
        let s = session(
            Arc::new(MemoryStorage::new()),
            Some("ja_JP.UTF-8"),
            AuthSnapshot::loading(),
        );
        assert_eq!(s.translator().active_language(), LocaleCode::Ja);
    }

    #[tokio::test]
    async fn test_loading_then_profile_applies_mirror() {
        let storage = Arc::new(MemoryStorage::with_values([("mirror_native_language", "true")]));
        let mut s = session(storage, None, AuthSnapshot::loading());
        assert_eq!(s.store().ui_language(), LocaleCode::En);
        assert!(s.store().profile().is_none());

        let user = UserProfile::new(LocaleCode::Es, LocaleCode::Ko);
        s.on_auth_changed(AuthSnapshot::signed_in(user));
        assert_eq!(s.store().ui_language(), LocaleCode::Es);

        s.on_auth_changed(AuthSnapshot::anonymous());
        assert!(s.store().profile().is_none());
        assert_eq!(s.store().ui_language(), LocaleCode::Es);
    }

    #[tokio::test]
    async fn test_manual_choice_stops_mirroring() {
        let storage = Arc::new(MemoryStorage::with_values([("mirror_native_language", "true")]));
        let mut s = session(
            storage.clone(),
            None,
            AuthSnapshot::signed_in(UserProfile::new(LocaleCode::Ko, LocaleCode::Ja)),
        );
        assert_eq!(s.choose_ui_language("fr").unwrap(), LocaleCode::Fr);
        assert!(!s.store().mirror_native());
        assert_eq!(s.translator().active_language(), LocaleCode::Fr);
        assert_eq!(
            storage.get("mirror_native_language").unwrap().as_deref(),
            Some("false")
        );

        assert!(s.choose_ui_language("de").is_err());
        assert_eq!(s.store().ui_language(), LocaleCode::Fr);
    }

    #[tokio::test]
    async fn test_reading_uses_session_auth() {
        let mut user = UserProfile::new(LocaleCode::En, LocaleCode::Ja);
        user.proficiency = DifficultyLevel::Advanced;
        let s = session(Arc::new(MemoryStorage::new()), None, AuthSnapshot::signed_in(user));
        let reading = s.open_reading(ReadingQuery::parse("target=fr"));
        assert_eq!(reading.target_language(), LocaleCode::Fr);
        assert_eq!(reading.target_source(), Source::Url);
        assert_eq!(reading.difficulty(), DifficultyLevel::Advanced);
        assert_eq!(reading.difficulty_source(), Source::Profile);
    }

    #[tokio::test]
    async fn test_teardown_reports_before_startup_delay() {
        let catalog = Arc::new(LocaleCatalog::embedded(LocaleCode::En).unwrap());
        let config = DiagnosticsConfig {
            check_translations: true,
            startup_delay_ms: 60_000,
        };
        let s = Session::init(
            SessionContext {
                storage: Arc::new(MemoryStorage::new()),
                catalog,
                diagnostics: &config,
                client_locale: None,
            },
            AuthSnapshot::anonymous(),
        );
        let report = s.teardown().await.unwrap();
        assert!(!report.is_complete());
    }
}
