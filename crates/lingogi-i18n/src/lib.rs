//! # lingogi-i18n
//!
//! Locale bundles and everything that reads them:
//! - `catalog` — embedded and on-disk locale bundles, keyed by `LocaleCode`
//! - `labels` — best-available string for a requested locale (tags, UI copy)
//! - `completeness` — development diagnostic listing keys missing per locale
//! - `translator` — active display language and `t()` lookups

pub mod catalog;
pub mod completeness;
pub mod labels;
pub mod translator;

pub use catalog::{LocaleBundle, LocaleCatalog};
pub use completeness::{check_completeness, missing_keys, CompletenessReport};
pub use labels::{
    format_ui_text, resolve_tag_label, resolve_tag_labels, resolve_ui_text, TagTranslationMap,
};
pub use translator::Translator;
