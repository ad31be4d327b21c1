use crate::{error::LingogiError, locale::LocaleCode};

/// Durable client storage — the one read path and one write path for
/// persisted preferences.
///
/// Values are plain strings; `Ok(None)` means the key is unset. Calls are
/// synchronous and never retried by callers.
pub trait KeyValueStorage: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>, LingogiError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), LingogiError>;

    /// Remove a value. Removing an unset key is not an error.
    fn remove(&self, key: &str) -> Result<(), LingogiError>;
}

/// The rendering layer's "switch active display language" entry point.
///
/// Called whenever the UI language is applied; every localized string
/// re-resolves against the new language afterwards.
pub trait DisplayLanguageSwitch: Send + Sync {
    fn switch_display_language(&self, code: LocaleCode);
}
