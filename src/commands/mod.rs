//! CLI command handlers. Every handler returns the text to print,
//! localized in the session's current UI language.

mod catalog;
mod reading;
mod settings;
mod status;


use clap::{Subcommand, ValueEnum};

use crate::session::Session;

/// Known CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the resolved language preferences.
    Status {
        /// Client locale to resolve against (defaults to the system locale).
        #[arg(long)]
        locale: Option<String>,
    },
    /// Set the interface language.
    SetUi {
        /// Language code, e.g. `ko`.
        code: String,
    },
    /// Set the language being learned.
    SetTarget {
        /// Language code, e.g. `ja`.
        code: String,
    },
    /// Make the interface follow the profile's native language.
    Mirror {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Resolve reading language and difficulty for a page.
    Reading {
        /// Page URL query string, e.g. `?target=fr&difficulty=advanced`.
        #[arg(long, default_value = "")]
        query: String,
        /// Remember a reading language for this session.
        #[arg(long)]
        set_target: Option<String>,
        /// Remember a reading difficulty for this session.
        #[arg(long)]
        set_difficulty: Option<String>,
    },
    /// Resolve tag display names for a locale.
    Label {
        /// JSON array of tags as served by the backend.
        #[arg(long)]
        tags: String,
        /// Requested locale (defaults to the interface language).
        #[arg(long)]
        locale: Option<String>,
    },
    /// List supported languages.
    Languages,
    /// Check every UI bundle against the base bundle.
    Check,
}

impl Command {
    /// Client locale given on the command line, if this command takes one.
    pub fn client_locale(&self) -> Option<&str> {
        match self {
            Self::Status { locale } => locale.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Run a command against the session and return the response text.
pub fn handle(cmd: Command, session: &mut Session) -> anyhow::Result<String> {
    let text = match cmd {
        Command::Status { .. } => status::handle_status(session),
        Command::SetUi { code } => settings::handle_set_ui(session, &code),
        Command::SetTarget { code } => settings::handle_set_target(session, &code),
        Command::Mirror { state } => settings::handle_mirror(session, state == Toggle::On),
        Command::Reading {
            query,
            set_target,
            set_difficulty,
        } => reading::handle_reading(
            session,
            &query,
            set_target.as_deref(),
            set_difficulty.as_deref(),
        ),
        Command::Label { tags, locale } => {
            catalog::handle_label(session, &tags, locale.as_deref())?
        }
        Command::Languages => status::handle_languages(session),
        Command::Check => catalog::handle_check(session),
    };
    Ok(text)
}
