//! Active display language and string lookup for the running UI.

use lingogi_core::{traits::DisplayLanguageSwitch, LocaleCode};
use std::fmt::Display;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::catalog::LocaleCatalog;
use crate::labels::{format_ui_text, resolve_ui_text};

/// Resolves UI copy in whichever language was last switched to.
pub struct Translator {
    catalog: Arc<LocaleCatalog>,
    active: RwLock<LocaleCode>,
}

impl Translator {
    /// Start out in the catalog's base language.
    pub fn new(catalog: Arc<LocaleCatalog>) -> Self {
        let active = RwLock::new(catalog.base());
        Self { catalog, active }
    }

    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    pub fn active_language(&self) -> LocaleCode {
        *self.active.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Localized string for `key`.
    pub fn t(&self, key: &str) -> String {
        resolve_ui_text(&self.catalog, self.active_language(), key).to_string()
    }

    /// Localized string for `key` with `{name}` placeholders filled in.
    pub fn t_fmt(&self, key: &str, args: &[(&str, &dyn Display)]) -> String {
        format_ui_text(&self.catalog, self.active_language(), key, args)
    }
}

impl DisplayLanguageSwitch for Translator {
    fn switch_display_language(&self, code: LocaleCode) {
        if !self.catalog.supports_ui(code) {
            warn!("no UI bundle for '{code}', keeping '{}'", self.active_language());
            return;
        }
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        if *active != code {
            info!("display language switched: {} → {code}", *active);
            *active = code;
        }
    }
}
