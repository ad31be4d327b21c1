//! Catalog commands: label, check.

use anyhow::Context;
use lingogi_core::LocaleCode;
use lingogi_i18n::{check_completeness, resolve_tag_labels, TagTranslationMap};

use super::settings::error_text;
use super::status::language_label;
use crate::session::Session;

pub(super) fn handle_label(
    session: &Session,
    tags_json: &str,
    locale: Option<&str>,
) -> anyhow::Result<String> {
    let requested = match locale {
        Some(raw) => match raw.parse::<LocaleCode>() {
            Ok(code) => code,
            Err(e) => return Ok(error_text(session, raw, &e)),
        },
        None => session.store().ui_language(),
    };
    let tags: Vec<TagTranslationMap> =
        serde_json::from_str(tags_json).context("--tags must be a JSON array of tags")?;
    Ok(resolve_tag_labels(&tags, requested).join("\n"))
}

pub(super) fn handle_check(session: &Session) -> String {
    let report = check_completeness(session.translator().catalog());
    report.log();

    let t = session.translator();
    if report.is_complete() {
        return t.t("cli.check.complete");
    }
    let mut lines = Vec::new();
    for (code, keys) in report.missing.iter().filter(|(_, keys)| !keys.is_empty()) {
        lines.push(t.t_fmt(
            "cli.check.missing",
            &[("language", &language_label(*code)), ("count", &keys.len())],
        ));
        lines.extend(keys.iter().map(|key| format!("  {key}")));
    }
    lines.join("\n")
}
