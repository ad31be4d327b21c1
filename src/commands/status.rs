//! Read-only commands: status, languages.

use lingogi_core::LocaleCode;

use crate::session::Session;

pub(super) fn handle_status(session: &Session) -> String {
    let t = session.translator();
    let state = session.store().state();
    let mirror = if state.mirror_native {
        t.t("cli.state.on")
    } else {
        t.t("cli.state.off")
    };

    let mut lines = vec![
        t.t("cli.status.header"),
        t.t_fmt(
            "cli.status.ui_language",
            &[("language", &language_label(state.ui_language))],
        ),
        t.t_fmt(
            "cli.status.target_language",
            &[("language", &language_label(state.target_language))],
        ),
        t.t_fmt("cli.status.mirror", &[("state", &mirror)]),
    ];
    if let Some(profile) = session.store().profile() {
        lines.push(t.t_fmt(
            "cli.status.profile",
            &[("language", &language_label(profile.native_language))],
        ));
    }
    lines.join("\n")
}

pub(super) fn handle_languages(session: &Session) -> String {
    let t = session.translator();
    let catalog = t.catalog();
    let mut out = t.t("cli.languages.header");
    for code in LocaleCode::ALL {
        let mut flags = Vec::new();
        if catalog.supports_ui(code) {
            flags.push("ui");
        }
        if code.is_rtl() {
            flags.push("rtl");
        }
        if !code.info().default_enabled {
            flags.push("hidden");
        }
        out.push_str(&format!(
            "\n  {code}  {} ({})",
            code.native_name(),
            code.english_name()
        ));
        if !flags.is_empty() {
            out.push_str(&format!(" [{}]", flags.join(", ")));
        }
    }
    out
}

/// `한국어 (ko)`
pub(super) fn language_label(code: LocaleCode) -> String {
    format!("{} ({code})", code.native_name())
}
