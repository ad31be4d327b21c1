//! Durable storage keys. Values are plain strings; absence means unset.

/// Interface language code.
pub const UI_LANGUAGE: &str = "ui_language";

/// Profile-level target (learning) language code.
pub const TARGET_LANGUAGE: &str = "target_language";

/// `"true"` / `"false"`.
pub const MIRROR_NATIVE_LANGUAGE: &str = "mirror_native_language";

/// Reading page language code.
pub const READING_TARGET_LANGUAGE: &str = "reading_target_language";

/// Reading page difficulty (`beginner` / `intermediate` / `advanced`).
pub const READING_DIFFICULTY: &str = "reading_difficulty";
