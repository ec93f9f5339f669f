//! Language registry: display names for language tokens.
//!
//! This module provides the built-in table of ISO 639-1 codes and their English
//! names, plus the `NameResolver` seam the routing core uses to label
//! directions and model titles. The table is a lazily initialized `OnceLock`
//! singleton; it is static data, so there is no initialization order to manage.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Maps a language token to a human-readable name.
///
/// Implementations must be total: an unknown token yields a best-effort
/// fallback (usually the token itself) rather than failing, since routing
/// never depends on naming completeness.
pub trait NameResolver: Send + Sync {
    fn display_name(&self, code: &str) -> String;
}

/// Configuration for a known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "cs")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Czech")
    pub name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    by_code: HashMap<&'static str, usize>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::from_languages(default_languages()))
    }

    fn from_languages(languages: Vec<LanguageConfig>) -> Self {
        let by_code = languages
            .iter()
            .enumerate()
            .map(|(idx, lang)| (lang.code, idx))
            .collect();
        Self { languages, by_code }
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is in the table
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.by_code.get(code).map(|&idx| &self.languages[idx])
    }
}

impl NameResolver for LanguageRegistry {
    fn display_name(&self, code: &str) -> String {
        match self.get_by_code(code) {
            Some(lang) => lang.name.to_string(),
            None => code.to_string(),
        }
    }
}

/// Resolver that labels languages by their raw token.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNames;

impl NameResolver for IdentityNames {
    fn display_name(&self, code: &str) -> String {
        code.to_string()
    }
}

macro_rules! languages {
    ($($code:literal => $name:literal),* $(,)?) => {
        vec![$(LanguageConfig { code: $code, name: $name }),*]
    };
}

/// Built-in ISO 639-1 names.
fn default_languages() -> Vec<LanguageConfig> {
    languages![
        "ar" => "Arabic",
        "bg" => "Bulgarian",
        "ca" => "Catalan",
        "cs" => "Czech",
        "cy" => "Welsh",
        "da" => "Danish",
        "de" => "German",
        "el" => "Greek",
        "en" => "English",
        "es" => "Spanish",
        "et" => "Estonian",
        "eu" => "Basque",
        "fa" => "Persian",
        "fi" => "Finnish",
        "fr" => "French",
        "ga" => "Irish",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "hr" => "Croatian",
        "hu" => "Hungarian",
        "hy" => "Armenian",
        "id" => "Indonesian",
        "is" => "Icelandic",
        "it" => "Italian",
        "ja" => "Japanese",
        "ka" => "Georgian",
        "ko" => "Korean",
        "lt" => "Lithuanian",
        "lv" => "Latvian",
        "mk" => "Macedonian",
        "mt" => "Maltese",
        "nl" => "Dutch",
        "no" => "Norwegian",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "sq" => "Albanian",
        "sr" => "Serbian",
        "sv" => "Swedish",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "ur" => "Urdu",
        "vi" => "Vietnamese",
        "zh" => "Chinese",
    ]
}
