//! Test doubles shared by the store and reading tests.

use lingogi_core::{
    traits::{DisplayLanguageSwitch, KeyValueStorage},
    LingogiError, LocaleCode,
};
use std::sync::Mutex;

/// Records every display switch.
#[derive(Default)]
pub struct RecordingDisplay {
    switches: Mutex<Vec<LocaleCode>>,
}

impl RecordingDisplay {
    pub fn switches(&self) -> Vec<LocaleCode> {
        self.switches.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<LocaleCode> {
        self.switches.lock().unwrap().last().copied()
    }
}

impl DisplayLanguageSwitch for RecordingDisplay {
    fn switch_display_language(&self, code: LocaleCode) {
        self.switches.lock().unwrap().push(code);
    }
}

/// Storage whose every call fails.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn name(&self) -> &str {
        "failing"
    }

    fn get(&self, _key: &str) -> Result<Option<String>, LingogiError> {
        Err(LingogiError::Storage("storage unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), LingogiError> {
        Err(LingogiError::Storage("storage unavailable".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), LingogiError> {
        Err(LingogiError::Storage("storage unavailable".into()))
    }
}
