//! # Internationalization
//!
//! UI labels are looked up in a translation table keyed by language code.
//! Milestone content is never translated; each language gets its own
//! document instead (see `io::FsSource`).
//!
//! Lookup order: current language, default language, built-in English
//! labels, then the key itself.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::io::LOAD_FAILURE_MESSAGE;

/// Languages the timeline ships UI labels and documents for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Zh => "zh",
        }
    }

    /// The next language in [`Language::ALL`], wrapping around.
    pub fn next(self) -> Language {
        let i = Language::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Language::ALL[(i + 1) % Language::ALL.len()]
    }

    /// Reads a locale such as `fr_FR.UTF-8` or `zh-CN`, keeping only the primary subtag.
    pub fn from_locale(locale: &str) -> Option<Language> {
        let primary = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();
        primary.parse().ok()
    }

    /// Picks the language to start with.
    ///
    /// An explicit choice wins, then a saved preference, then the environment
    /// locale. Unsupported codes fall through to the next source.
    pub fn resolve(explicit: Option<&str>, saved: Option<&str>) -> Language {
        let env_locale = ["LC_ALL", "LANG"]
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()));
        Self::resolve_with_locale(explicit, saved, env_locale.as_deref())
    }

    pub fn resolve_with_locale(
        explicit: Option<&str>,
        saved: Option<&str>,
        locale: Option<&str>,
    ) -> Language {
        for (source, candidate) in [("explicit", explicit), ("saved", saved), ("locale", locale)] {
            let Some(value) = candidate else { continue };
            match Language::from_locale(value) {
                Some(language) => {
                    log::debug!("language {language} from {source} value {value:?}");
                    return language;
                }
                None => log::warn!("unsupported {source} language {value:?}, ignoring"),
            }
        }
        Language::default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Failed to read translations at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse translations at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// English labels used when no translation file provides a key.
const BUILTIN_EN: &[(&str, &str)] = &[
    ("timeline.title", "Timeline"),
    ("timeline.error", LOAD_FAILURE_MESSAGE),
    ("timeline.empty", "No milestones to show."),
    ("filter.all", "All"),
    ("filter.work", "Work"),
    ("filter.education", "Education"),
    ("filter.achievement", "Achievements"),
    ("filter.personal", "Personal"),
    ("help.quit", "q: Quit"),
    ("help.filter", "f: Filter"),
    ("help.language", "l: Language"),
    ("help.scroll", "↑/k ↓/j: Scroll"),
];

/// Translation table: language code → key → text.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    table: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            table: serde_json::from_str(json)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TranslationError> {
        let content = std::fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| TranslationError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads translations, falling back to an empty table with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}");
            Self::default()
        })
    }

    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::default(), key))
            .or_else(|| builtin(key))
            .unwrap_or(key)
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.table
            .get(language.code())
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

fn builtin(key: &str) -> Option<&'static str> {
    BUILTIN_EN
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}
