//! Preference-changing commands: set-ui, set-target, mirror.

use lingogi_core::LingogiError;

use super::status::language_label;
use crate::session::Session;

pub(super) fn handle_set_ui(session: &mut Session, code: &str) -> String {
    match session.choose_ui_language(code) {
        Ok(chosen) => session
            .translator()
            .t_fmt("cli.ui_language_set", &[("language", &language_label(chosen))]),
        Err(e) => error_text(session, code, &e),
    }
}

pub(super) fn handle_set_target(session: &mut Session, code: &str) -> String {
    match session.set_target_language(code) {
        Ok(chosen) => session
            .translator()
            .t_fmt("cli.target_language_set", &[("language", &language_label(chosen))]),
        Err(e) => error_text(session, code, &e),
    }
}

pub(super) fn handle_mirror(session: &mut Session, enabled: bool) -> String {
    session.set_mirror_native(enabled);
    if enabled {
        session.translator().t("cli.mirror_enabled")
    } else {
        session.translator().t("cli.mirror_disabled")
    }
}

/// Localized message for a rejected setter value.
pub(super) fn error_text(session: &Session, input: &str, err: &LingogiError) -> String {
    match err {
        LingogiError::UnsupportedLocale(_) => session
            .translator()
            .t_fmt("cli.error.unsupported_locale", &[("code", &input)]),
        LingogiError::InvalidDifficulty(_) => session
            .translator()
            .t_fmt("cli.error.invalid_difficulty", &[("level", &input)]),
        other => format!("Error: {other}"),
    }
}
