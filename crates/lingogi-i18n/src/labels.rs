//! Best-available display strings for a requested locale.
//!
//! Tag names fall back to their canonical name; UI copy falls back to the
//! base bundle and finally to the raw key. Nothing here mutates state.

use lingogi_core::LocaleCode;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::warn;

use crate::catalog::LocaleCatalog;

/// A tag as served by the backend: canonical name plus partial translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTranslationMap {
    /// Canonical display name, always a valid fallback.
    #[serde(alias = "canonicalName")]
    pub name: String,
    /// Language the tag was originally created in.
    #[serde(default, alias = "originalLanguage")]
    pub language: LocaleCode,
    #[serde(default, deserialize_with = "known_translations")]
    pub translations: BTreeMap<LocaleCode, String>,
}

/// Drop entries for codes outside the supported set and null values.
fn known_translations<'de, D>(deserializer: D) -> Result<BTreeMap<LocaleCode, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(code, value)| Some((code.parse().ok()?, value?)))
        .collect())
}

impl TagTranslationMap {
    pub fn new(name: impl Into<String>, language: LocaleCode) -> Self {
        Self {
            name: name.into(),
            language,
            translations: BTreeMap::new(),
        }
    }

    pub fn with_translation(mut self, code: LocaleCode, value: impl Into<String>) -> Self {
        self.translations.insert(code, value.into());
        self
    }

    /// Translation for `code`, if present and not blank.
    pub fn translation(&self, code: LocaleCode) -> Option<&str> {
        self.translations
            .get(&code)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Display name of `tag` in `requested`, else its canonical name.
pub fn resolve_tag_label(tag: &TagTranslationMap, requested: LocaleCode) -> &str {
    tag.translation(requested).unwrap_or(&tag.name)
}

/// Resolve every tag independently, keeping order and duplicates.
pub fn resolve_tag_labels(tags: &[TagTranslationMap], requested: LocaleCode) -> Vec<&str> {
    tags.iter()
        .map(|tag| resolve_tag_label(tag, requested))
        .collect()
}

/// UI copy for `key` in `requested`, else the base bundle's value.
///
/// Every key is looked up in the base bundle first, so debug builds log a
/// key the base lacks even when the requested bundle covers it. A key found
/// nowhere renders as the raw key.
pub fn resolve_ui_text<'a>(
    catalog: &'a LocaleCatalog,
    requested: LocaleCode,
    key: &'a str,
) -> &'a str {
    let base = catalog.base_bundle().get(key);
    if base.is_none() {
        report_missing_base_key(catalog, key);
    }
    let localized = catalog
        .bundle(requested)
        .and_then(|bundle| bundle.get(key))
        .filter(|s| !s.trim().is_empty());
    localized.or(base).unwrap_or(key)
}

/// Log a key absent from the base bundle. Returns whether anything was
/// logged, which only happens in debug builds.
fn report_missing_base_key(catalog: &LocaleCatalog, key: &str) -> bool {
    if !cfg!(debug_assertions) {
        return false;
    }
    warn!(
        "missing translation key '{key}' (not in base bundle '{}')",
        catalog.base()
    );
    true
}

/// `resolve_ui_text` with `{name}` placeholders substituted from `args`.
pub fn format_ui_text(
    catalog: &LocaleCatalog,
    requested: LocaleCode,
    key: &str,
    args: &[(&str, &dyn Display)],
) -> String {
    let mut text = resolve_ui_text(catalog, requested, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), &value.to_string());
    }
    text
}
