//! Supported languages and reading difficulty levels.
//!
//! `LocaleCode` is the closed set of languages Lingogi knows about. The
//! registry below is the single source of truth for their display names and
//! script direction; everything else treats a code as an opaque key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LingogiError;

/// A supported language, identified by its ISO 639-1 code.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    Ko,
    Ja,
    Zh,
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Ar,
    He,
}

impl LocaleCode {
    /// Every supported code, in registry order.
    pub const ALL: [LocaleCode; 12] = [
        Self::Ko,
        Self::Ja,
        Self::Zh,
        Self::En,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Pt,
        Self::Ru,
        Self::Ar,
        Self::He,
    ];

    /// Lowercase wire form (`"en"`, `"ko"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::Zh => "zh",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Ar => "ar",
            Self::He => "he",
        }
    }

    /// Registry entry for this code.
    pub fn info(&self) -> &'static LanguageInfo {
        // ALL and LANGUAGES share the same order.
        &LANGUAGES[*self as usize]
    }

    pub fn english_name(&self) -> &'static str {
        self.info().english_name
    }

    pub fn native_name(&self) -> &'static str {
        self.info().native_name
    }

    pub fn is_rtl(&self) -> bool {
        self.info().rtl
    }

    /// Match a client-reported locale (`ko-KR`, `pt_BR.UTF-8`, `FR`) against
    /// `candidates`: the full tag first, then its primary language subtag.
    pub fn match_client_locale(raw: &str, candidates: &[LocaleCode]) -> Option<LocaleCode> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(code) = raw.parse::<LocaleCode>() {
            if candidates.contains(&code) {
                return Some(code);
            }
        }
        raw.split(['-', '_', '.', '@'])
            .next()
            .and_then(|lang| lang.parse::<LocaleCode>().ok())
            .filter(|code| candidates.contains(code))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = LingogiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == lower)
            .ok_or_else(|| LingogiError::UnsupportedLocale(s.to_string()))
    }
}

/// How well a language feature is supported, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Experimental,
    Basic,
    Advanced,
    Full,
}

/// Per-language features whose support level is tracked in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFeature {
    Lemmatization,
    Translation,
    SpeechSynthesis,
    SpeechRecognition,
}

/// Static metadata about a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: LocaleCode,
    pub english_name: &'static str,
    pub native_name: &'static str,
    /// Right-to-left script.
    pub rtl: bool,
    pub lemmatization: SupportLevel,
    pub translation: SupportLevel,
    pub speech_synthesis: SupportLevel,
    pub speech_recognition: SupportLevel,
    /// Offered in language pickers without opting in.
    pub default_enabled: bool,
}

impl LanguageInfo {
    pub fn support(&self, feature: LanguageFeature) -> SupportLevel {
        match feature {
            LanguageFeature::Lemmatization => self.lemmatization,
            LanguageFeature::Translation => self.translation,
            LanguageFeature::SpeechSynthesis => self.speech_synthesis,
            LanguageFeature::SpeechRecognition => self.speech_recognition,
        }
    }
}

/// The language registry. Order must match `LocaleCode::ALL`.
pub static LANGUAGES: [LanguageInfo; 12] = [
    LanguageInfo {
        code: LocaleCode::Ko,
        english_name: "Korean",
        native_name: "한국어",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Ja,
        english_name: "Japanese",
        native_name: "日本語",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Zh,
        english_name: "Chinese (Simplified)",
        native_name: "中文",
        rtl: false,
        lemmatization: SupportLevel::Basic,
        translation: SupportLevel::Advanced,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::En,
        english_name: "English",
        native_name: "English",
        rtl: false,
        lemmatization: SupportLevel::Full,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Es,
        english_name: "Spanish",
        native_name: "Español",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Fr,
        english_name: "French",
        native_name: "Français",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::De,
        english_name: "German",
        native_name: "Deutsch",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::It,
        english_name: "Italian",
        native_name: "Italiano",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Pt,
        english_name: "Portuguese",
        native_name: "Português",
        rtl: false,
        lemmatization: SupportLevel::Advanced,
        translation: SupportLevel::Full,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Ru,
        english_name: "Russian",
        native_name: "Русский",
        rtl: false,
        lemmatization: SupportLevel::Basic,
        translation: SupportLevel::Advanced,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::Ar,
        english_name: "Arabic",
        native_name: "العربية",
        rtl: true,
        lemmatization: SupportLevel::Basic,
        translation: SupportLevel::Advanced,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: true,
    },
    LanguageInfo {
        code: LocaleCode::He,
        english_name: "Hebrew",
        native_name: "עברית",
        rtl: true,
        lemmatization: SupportLevel::Basic,
        translation: SupportLevel::Basic,
        speech_synthesis: SupportLevel::Experimental,
        speech_recognition: SupportLevel::Experimental,
        default_enabled: false,
    },
];

/// Registry lookup by raw code. Returns `None` for unknown codes.
pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    code.parse::<LocaleCode>().ok().map(|c| c.info())
}

/// Languages shown in pickers by default.
pub fn enabled_languages() -> impl Iterator<Item = &'static LanguageInfo> {
    LANGUAGES.iter().filter(|info| info.default_enabled)
}

/// Languages supporting `feature` at exactly `level`, in registry order.
pub fn languages_by_support_level(
    feature: LanguageFeature,
    level: SupportLevel,
) -> impl Iterator<Item = LocaleCode> {
    LANGUAGES
        .iter()
        .filter(move |info| info.support(feature) == level)
        .map(|info| info.code)
}

/// Reading difficulty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = LingogiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == lower)
            .ok_or_else(|| LingogiError::InvalidDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_codes() {
        for code in LocaleCode::ALL {
            assert_eq!(code.info().code, code, "registry out of order at {code}");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("KO".parse::<LocaleCode>().unwrap(), LocaleCode::Ko);
        assert_eq!(" en ".parse::<LocaleCode>().unwrap(), LocaleCode::En);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "xx".parse::<LocaleCode>().unwrap_err();
        assert!(matches!(err, LingogiError::UnsupportedLocale(ref s) if s == "xx"));
        assert!("".parse::<LocaleCode>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&LocaleCode::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let back: LocaleCode = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(back, LocaleCode::Fr);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(LocaleCode::Ko.native_name(), "한국어");
        assert_eq!(LocaleCode::Es.native_name(), "Español");
        assert_eq!(LocaleCode::De.english_name(), "German");
    }

    #[test]
    fn test_rtl_languages() {
        let rtl: Vec<_> = LocaleCode::ALL.iter().filter(|c| c.is_rtl()).collect();
        assert_eq!(rtl, vec![&LocaleCode::Ar, &LocaleCode::He]);
    }

    #[test]
    fn test_hebrew_not_enabled_by_default() {
        assert!(enabled_languages().all(|info| info.code != LocaleCode::He));
        assert_eq!(enabled_languages().count(), 11);
    }

    #[test]
    fn test_languages_by_support_level() {
        let basic: Vec<_> =
            languages_by_support_level(LanguageFeature::Lemmatization, SupportLevel::Basic)
                .collect();
        assert_eq!(
            basic,
            vec![LocaleCode::Zh, LocaleCode::Ru, LocaleCode::Ar, LocaleCode::He]
        );
        let full: Vec<_> =
            languages_by_support_level(LanguageFeature::Lemmatization, SupportLevel::Full)
                .collect();
        assert_eq!(full, vec![LocaleCode::En]);
        assert_eq!(
            languages_by_support_level(LanguageFeature::SpeechSynthesis, SupportLevel::Experimental)
                .count(),
            LocaleCode::ALL.len()
        );
    }

    #[test]
    fn test_support_levels_are_ordered() {
        assert!(SupportLevel::Experimental < SupportLevel::Basic);
        assert!(SupportLevel::Advanced < SupportLevel::Full);
        assert_eq!(
            LocaleCode::He.info().support(LanguageFeature::Translation),
            SupportLevel::Basic
        );
        let with_lemmatization = LANGUAGES
            .iter()
            .filter(|info| info.support(LanguageFeature::Lemmatization) >= SupportLevel::Basic)
            .count();
        assert_eq!(with_lemmatization, LANGUAGES.len());
    }

    #[test]
    fn test_language_info_lookup() {
        assert_eq!(language_info("pt").unwrap().native_name, "Português");
        assert!(language_info("klingon").is_none());
    }

    #[test]
    fn test_match_client_locale_region_tag() {
        let ui = [LocaleCode::En, LocaleCode::Ko, LocaleCode::Fr];
        assert_eq!(
            LocaleCode::match_client_locale("ko-KR", &ui),
            Some(LocaleCode::Ko)
        );
        assert_eq!(
            LocaleCode::match_client_locale("fr_CA.UTF-8", &ui),
            Some(LocaleCode::Fr)
        );
        assert_eq!(LocaleCode::match_client_locale("EN", &ui), Some(LocaleCode::En));
    }

    #[test]
    fn test_match_client_locale_outside_candidates() {
        let ui = [LocaleCode::En, LocaleCode::Ko];
        assert_eq!(LocaleCode::match_client_locale("de-DE", &ui), None);
        assert_eq!(LocaleCode::match_client_locale("x-pirate", &ui), None);
        assert_eq!(LocaleCode::match_client_locale("", &ui), None);
    }

    #[test]
    fn test_difficulty_parse_and_default() {
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Intermediate);
        assert_eq!(
            "Advanced".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Advanced
        );
        assert!(matches!(
            "expert".parse::<DifficultyLevel>(),
            Err(LingogiError::InvalidDifficulty(_))
        ));
    }
}
