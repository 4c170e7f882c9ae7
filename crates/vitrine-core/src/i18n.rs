//! Multilingual content fields and the translation resolver.
//!
//! The CMS ships translated fields in two shapes: a keyed object
//! (`{"en": "...", "fr": "..."}`) and a list of `{"lang", "value"}` pairs.
//! Both are normalized into [`MultilingualText`] at deserialization, so
//! every consumer resolves through the same fallback chain:
//! current language, then English, French, Arabic, then the caller default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::VitrineError;

/// A language the site is published in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    /// Every supported language, in fallback order.
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    /// ISO 639-1 code used as the key in CMS payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Parse a language code. Case-insensitive; region subtags
    /// (`fr-DZ`, `en_US`) are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| VitrineError::UnknownLanguage(s.to_string()))
    }
}

/// A field carrying parallel translations keyed by language code.
///
/// Empty strings are never stored, so a present key always holds
/// displayable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultilingualText(BTreeMap<String, String>);

impl MultilingualText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Empty values are dropped.
    pub fn with(mut self, lang: Language, value: impl Into<String>) -> Self {
        self.insert(lang.code(), value.into());
        self
    }

    fn insert(&mut self, code: &str, value: String) {
        if value.is_empty() {
            return;
        }
        self.0
            .entry(code.trim().to_ascii_lowercase())
            .or_insert(value);
    }

    /// Translation for exactly `lang`, without fallback.
    pub fn get(&self, lang: Language) -> Option<&str> {
        self.0.get(lang.code()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Best translation for `lang`: the language itself, then the fixed chain.
    pub fn pick(&self, lang: Language) -> Option<&str> {
        std::iter::once(lang)
            .chain(Language::ALL)
            .find_map(|l| self.get(l))
    }

    /// Normalize any JSON value into a multilingual field.
    ///
    /// Objects are read as `code -> text`, arrays as `{lang, value}` pairs
    /// (first entry per language wins). Anything else is treated as absent.
    pub fn from_json(value: &Value) -> Self {
        let mut text = Self::new();
        match value {
            Value::Object(map) => {
                for (code, v) in map {
                    if let Some(s) = v.as_str() {
                        text.insert(code, s.to_string());
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    let lang = item.get("lang").and_then(Value::as_str);
                    let value = item.get("value").and_then(Value::as_str);
                    if let (Some(lang), Some(value)) = (lang, value) {
                        text.insert(lang, value.to_string());
                    }
                }
            }
            _ => {}
        }
        text
    }
}

impl<'de> Deserialize<'de> for MultilingualText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Resolve a multilingual field for display.
///
/// Returns the translation for `lang`, else `en`, else `fr`, else `ar`,
/// else `fallback`. An absent field yields `fallback`.
pub fn resolve(field: Option<&MultilingualText>, lang: Language, fallback: &str) -> String {
    field
        .and_then(|f| f.pick(lang))
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(v: Value) -> MultilingualText {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_resolve_prefers_current_language() {
        let field = text(json!({"en": "Hello", "fr": "Bonjour", "ar": "مرحبا"}));
        assert_eq!(resolve(Some(&field), Language::Fr, "x"), "Bonjour");
        assert_eq!(resolve(Some(&field), Language::Ar, "x"), "مرحبا");
    }

    #[test]
    fn test_resolve_fallback_chain_order() {
        let field = text(json!({"fr": "Bonjour", "ar": "مرحبا"}));
        // Arabic reader gets Arabic; English reader skips to French before Arabic.
        assert_eq!(resolve(Some(&field), Language::Ar, ""), "مرحبا");
        assert_eq!(resolve(Some(&field), Language::En, ""), "Bonjour");

        let only_ar = text(json!({"ar": "مرحبا"}));
        assert_eq!(resolve(Some(&only_ar), Language::Fr, ""), "مرحبا");

        let en_and_ar = text(json!({"en": "Hello", "ar": "مرحبا"}));
        assert_eq!(resolve(Some(&en_and_ar), Language::Fr, ""), "Hello");
    }

    #[test]
    fn test_resolve_absent_returns_fallback() {
        assert_eq!(resolve(None, Language::Fr, "X"), "X");
        assert_eq!(resolve(Some(&MultilingualText::new()), Language::En, "X"), "X");
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let field = text(json!({"fr": "", "en": "Hello"}));
        assert_eq!(resolve(Some(&field), Language::Fr, "X"), "Hello");

        let all_empty = text(json!({"fr": "", "en": "", "ar": ""}));
        assert!(all_empty.is_empty());
        assert_eq!(resolve(Some(&all_empty), Language::Fr, "X"), "X");
    }

    #[test]
    fn test_pair_list_shape_matches_keyed_shape() {
        let keyed = text(json!({"en": "Mission", "fr": "Mission FR"}));
        let pairs = text(json!([
            {"lang": "fr", "value": "Mission FR"},
            {"lang": "en", "value": "Mission"}
        ]));
        assert_eq!(keyed, pairs);
        for lang in Language::ALL {
            assert_eq!(
                resolve(Some(&keyed), lang, "-"),
                resolve(Some(&pairs), lang, "-")
            );
        }
    }

    #[test]
    fn test_pair_list_first_entry_wins() {
        let pairs = text(json!([
            {"lang": "en", "value": "first"},
            {"lang": "en", "value": "second"}
        ]));
        assert_eq!(pairs.get(Language::En), Some("first"));
    }

    #[test]
    fn test_non_object_input_is_absent() {
        for v in [json!(null), json!(42), json!("plain"), json!(true)] {
            let field = text(v);
            assert!(field.is_empty());
            assert_eq!(resolve(Some(&field), Language::En, "fallback"), "fallback");
        }
    }

    #[test]
    fn test_malformed_pairs_are_skipped() {
        let pairs = text(json!([
            {"lang": "en"},
            "garbage",
            {"lang": "fr", "value": "Oui"}
        ]));
        assert_eq!(pairs.get(Language::En), None);
        assert_eq!(resolve(Some(&pairs), Language::En, ""), "Oui");
    }

    #[test]
    fn test_non_empty_when_any_language_present() {
        let samples = [
            json!({"en": "a"}),
            json!({"fr": "b"}),
            json!({"ar": "c"}),
            json!({"EN": "d"}),
        ];
        for sample in samples {
            let field = text(sample);
            for lang in Language::ALL {
                assert!(!resolve(Some(&field), lang, "").is_empty());
            }
        }
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("fr"), Some(Language::Fr));
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("fr_DZ"), Some(Language::Fr));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert!("es".parse::<Language>().is_err());
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
    }

    #[test]
    fn test_builder_drops_empty_values() {
        let field = MultilingualText::new()
            .with(Language::En, "")
            .with(Language::Fr, "Salut");
        assert_eq!(field.get(Language::En), None);
        assert_eq!(field.pick(Language::En), Some("Salut"));
    }
}
