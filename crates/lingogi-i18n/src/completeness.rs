//! Translation completeness diagnostics.
//!
//! Every leaf key of the base bundle must exist in each other bundle. Only
//! presence is checked, never the value or its type. When the base has an
//! object where a target has a scalar (or nothing), the whole base subtree
//! is reported missing.

use lingogi_core::LocaleCode;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::catalog::LocaleCatalog;

/// Missing key paths per non-base language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub base: LocaleCode,
    /// Every non-base bundle has an entry; an empty list means complete.
    pub missing: BTreeMap<LocaleCode, Vec<String>>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.values().all(Vec::is_empty)
    }

    /// Missing paths for one language (empty if complete or unknown).
    pub fn missing_for(&self, code: LocaleCode) -> &[String] {
        self.missing.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_missing(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    /// Emit the report through tracing.
    pub fn log(&self) {
        if self.is_complete() {
            info!(
                "translation check: all {} bundles match base '{}'",
                self.missing.len(),
                self.base
            );
            return;
        }
        for (code, keys) in self.missing.iter().filter(|(_, keys)| !keys.is_empty()) {
            warn!(
                "translation check: '{code}' is missing {} keys: {}",
                keys.len(),
                keys.join(", ")
            );
        }
    }
}

/// Compare every non-base bundle in `catalog` against the base bundle.
pub fn check_completeness(catalog: &LocaleCatalog) -> CompletenessReport {
    let base = catalog.base_bundle().root();
    let missing = catalog
        .others()
        .map(|bundle| (bundle.code(), missing_keys(base, bundle.root())))
        .collect();
    CompletenessReport {
        base: catalog.base(),
        missing,
    }
}

/// Dotted leaf paths of `base` that `target` does not define.
pub fn missing_keys(base: &Map<String, Value>, target: &Map<String, Value>) -> Vec<String> {
    let mut out = Vec::new();
    walk(base, Some(target), "", &mut out);
    out
}

fn walk(
    base: &Map<String, Value>,
    target: Option<&Map<String, Value>>,
    prefix: &str,
    out: &mut Vec<String>,
) {
    for (key, base_value) in base {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let target_value = target.and_then(|t| t.get(key));
        match (base_value, target_value) {
            (Value::Object(base_child), Some(Value::Object(target_child))) => {
                walk(base_child, Some(target_child), &path, out);
            }
            // Target absent or not an object: the whole subtree is missing.
            (Value::Object(base_child), _) => walk(base_child, None, &path, out),
            (_, None) => out.push(path),
            // Base leaf with any target value (scalar or object) present.
            (_, Some(Value::Object(_))) => out.push(path),
            (_, Some(_)) => {}
        }
    }
}
