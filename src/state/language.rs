use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Target languages offered by the translation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Russian,
    Ukrainian,
    Hebrew,
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::Russian,
        Language::Ukrainian,
        Language::Hebrew,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
    ];

    /// The name sent in the `language` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::Ukrainian => "Ukrainian",
            Language::Hebrew => "Hebrew",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "ru" => Some(Language::Russian),
            "uk" => Some(Language::Ukrainian),
            "he" => Some(Language::Hebrew),
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            "fr" => Some(Language::French),
            "de" => Some(Language::German),
            "it" => Some(Language::Italian),
            _ => None,
        }
    }

    /// Picks the default target language for a locale tag such as
    /// `ru_RU.UTF-8` or `fr-CA`, falling back to English.
    pub fn from_locale(locale: Option<&str>) -> Language {
        locale
            .and_then(|tag| tag.split(['_', '-', '.', '@']).next())
            .and_then(Language::from_code)
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}
