//! `reading`: resolve the reading page's language and difficulty.

use lingogi_core::DifficultyLevel;
use lingogi_prefs::ReadingQuery;

use super::settings::error_text;
use super::status::language_label;
use crate::session::Session;

pub(super) fn handle_reading(
    session: &Session,
    query: &str,
    set_target: Option<&str>,
    set_difficulty: Option<&str>,
) -> String {
    let mut reading = session.open_reading(ReadingQuery::parse(query));
    let mut lines = Vec::new();

    if let Some(code) = set_target {
        if let Err(e) = reading.set_target_language(code) {
            lines.push(error_text(session, code, &e));
        }
    }
    if let Some(level) = set_difficulty {
        if let Err(e) = reading.set_difficulty(level) {
            lines.push(error_text(session, level, &e));
        }
    }

    let t = session.translator();
    lines.push(t.t_fmt(
        "cli.reading.target",
        &[
            ("language", &language_label(reading.target_language())),
            ("source", &reading.target_source()),
        ],
    ));
    lines.push(t.t_fmt(
        "cli.reading.difficulty",
        &[
            ("difficulty", &difficulty_label(session, reading.difficulty())),
            ("source", &reading.difficulty_source()),
        ],
    ));
    lines.join("\n")
}

fn difficulty_label(session: &Session, level: DifficultyLevel) -> String {
    session
        .translator()
        .t(&format!("articles.difficulty.{}", level.as_str()))
}
