//! Default values for config fields.

use crate::locale::LocaleCode;

pub(super) fn default_data_dir() -> String {
    "~/.lingogi".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_storage_path() -> String {
    "~/.lingogi/data/preferences.json".to_string()
}

pub(super) fn default_base_language() -> LocaleCode {
    LocaleCode::En
}

pub(super) fn default_check_translations() -> bool {
    cfg!(debug_assertions)
}

pub(super) fn default_startup_delay_ms() -> u64 {
    1500
}
