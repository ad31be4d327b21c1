//! Locale bundles.
//!
//! A bundle is a nested JSON object per language; leaf strings are
//! addressed by dotted paths (`settings.title`). Bundles for the shipped UI
//! languages are compiled in, and a locales directory may override them.

use lingogi_core::{LingogiError, LocaleCode};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

const EMBEDDED: &[(LocaleCode, &str)] = &[
    (LocaleCode::En, include_str!("../locales/en.json")),
    (LocaleCode::Ko, include_str!("../locales/ko.json")),
    (LocaleCode::Es, include_str!("../locales/es.json")),
    (LocaleCode::Fr, include_str!("../locales/fr.json")),
    (LocaleCode::Ja, include_str!("../locales/ja.json")),
];

/// UI strings for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    code: LocaleCode,
    root: Map<String, Value>,
}

impl LocaleBundle {
    pub fn new(code: LocaleCode, root: Map<String, Value>) -> Self {
        Self { code, root }
    }

    /// Parse a bundle from JSON text. The document must be an object.
    pub fn from_json(code: LocaleCode, text: &str) -> Result<Self, LingogiError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { code, root }),
            other => Err(LingogiError::Catalog(format!(
                "bundle '{code}' must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn code(&self) -> LocaleCode {
        self.code
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Leaf string at a dotted path. Objects and non-string scalars yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Immutable set of bundles with one designated base language.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    base: LocaleBundle,
    others: BTreeMap<LocaleCode, LocaleBundle>,
}

impl LocaleCatalog {
    /// Build a catalog. Fails if no bundle for `base` is provided.
    /// Later bundles for the same code replace earlier ones.
    pub fn new(
        base: LocaleCode,
        bundles: impl IntoIterator<Item = LocaleBundle>,
    ) -> Result<Self, LingogiError> {
        let mut all: BTreeMap<LocaleCode, LocaleBundle> =
            bundles.into_iter().map(|b| (b.code, b)).collect();
        let base_bundle = all
            .remove(&base)
            .ok_or_else(|| LingogiError::Catalog(format!("no bundle for base language '{base}'")))?;
        Ok(Self {
            base: base_bundle,
            others: all,
        })
    }

    /// Catalog of the compiled-in bundles.
    pub fn embedded(base: LocaleCode) -> Result<Self, LingogiError> {
        let bundles = EMBEDDED
            .iter()
            .map(|(code, text)| LocaleBundle::from_json(*code, text))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(base, bundles)
    }

    /// Embedded bundles, overridden by `<code>.json` files in `locales_dir`.
    ///
    /// Files whose stem is not a supported code are skipped with a warning;
    /// a file that fails to parse is an error.
    pub fn load(base: LocaleCode, locales_dir: Option<&Path>) -> Result<Self, LingogiError> {
        let mut bundles = EMBEDDED
            .iter()
            .map(|(code, text)| LocaleBundle::from_json(*code, text))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(dir) = locales_dir {
            let entries = std::fs::read_dir(dir).map_err(|e| {
                LingogiError::Catalog(format!("failed to read {}: {e}", dir.display()))
            })?;
            for entry in entries {
                let path = entry?.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let code = match stem.parse::<LocaleCode>() {
                    Ok(code) => code,
                    Err(_) => {
                        warn!("skipping locale file {}: unsupported code", path.display());
                        continue;
                    }
                };
                let text = std::fs::read_to_string(&path)?;
                let bundle = LocaleBundle::from_json(code, &text).map_err(|e| {
                    LingogiError::Catalog(format!("failed to parse {}: {e}", path.display()))
                })?;
                debug!("loaded locale override {}", path.display());
                bundles.push(bundle);
            }
        }

        let catalog = Self::new(base, bundles)?;
        info!(
            "locale catalog ready: base={}, languages={}",
            catalog.base(),
            catalog
                .ui_languages()
                .iter()
                .map(LocaleCode::as_str)
                .collect::<Vec<_>>()
                .join(",")
        );
        Ok(catalog)
    }

    pub fn base(&self) -> LocaleCode {
        self.base.code
    }

    pub fn base_bundle(&self) -> &LocaleBundle {
        &self.base
    }

    pub fn bundle(&self, code: LocaleCode) -> Option<&LocaleBundle> {
        if code == self.base.code {
            Some(&self.base)
        } else {
            self.others.get(&code)
        }
    }

    /// Non-base bundles, ordered by code.
    pub fn others(&self) -> impl Iterator<Item = &LocaleBundle> {
        self.others.values()
    }

    /// Languages the interface can be displayed in, base first.
    pub fn ui_languages(&self) -> Vec<LocaleCode> {
        std::iter::once(self.base.code)
            .chain(self.others.keys().copied())
            .collect()
    }

    pub fn supports_ui(&self, code: LocaleCode) -> bool {
        self.bundle(code).is_some()
    }
}
