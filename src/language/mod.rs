//! Message lookup for renderer captions.
//!
//! Translations are flat JSON objects mapping message keys to templates.
//! The bundled languages are compiled into the binary; a configured
//! directory is read as `<directory>/<language>.json` instead. A key missing
//! from the loaded map renders as `![key]` instead of failing.

pub mod template;

pub use template::Delimiters;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LanguageError;

/// Language name reported for translations supplied as an explicit map.
pub const CUSTOM_LANGUAGE: &str = "_custom_";

pub const DEFAULT_LANGUAGE: &str = "eng";

static BUNDLED: [(&str, &str); 3] = [
    ("eng", include_str!("../../languages/eng.json")),
    ("deu", include_str!("../../languages/deu.json")),
    ("fra", include_str!("../../languages/fra.json")),
];

/// Names of the languages compiled into the binary.
pub fn bundled_languages() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(name, _)| *name)
}

/// What to load translations from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageTarget {
    Name(String),
    Translations(BTreeMap<String, String>),
}

impl LanguageTarget {
    /// Accepts a JSON string (language name) or object (translation map).
    pub fn from_value(value: Value) -> Result<Self, LanguageError> {
        match value {
            Value::String(name) => Ok(LanguageTarget::Name(name)),
            Value::Object(map) => Ok(LanguageTarget::Translations(stringify_map(map, None)?)),
            other => Err(LanguageError::InvalidTarget {
                found: json_type_name(&other).to_string(),
            }),
        }
    }
}

impl From<&str> for LanguageTarget {
    fn from(name: &str) -> Self {
        LanguageTarget::Name(name.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Language {
    language: String,
    translations: BTreeMap<String, String>,
    /// `None` reads the bundled languages.
    directory: Option<PathBuf>,
    delimiters: Delimiters,
    pattern: Regex,
}

impl Language {
    /// Set up from the bundled languages.
    pub fn new(target: impl Into<LanguageTarget>) -> Result<Self, LanguageError> {
        Self::with_source(None, target)
    }

    /// Set up with language files looked up in `directory`.
    pub fn with_directory(
        directory: impl Into<PathBuf>,
        target: impl Into<LanguageTarget>,
    ) -> Result<Self, LanguageError> {
        Self::with_source(Some(directory.into()), target)
    }

    /// Set up from `directory` when given, else from the bundled languages.
    pub fn with_source(
        directory: Option<PathBuf>,
        target: impl Into<LanguageTarget>,
    ) -> Result<Self, LanguageError> {
        let delimiters = Delimiters::default();
        let pattern = delimiters.pattern()?;

        let mut language = Self {
            language: CUSTOM_LANGUAGE.to_string(),
            translations: BTreeMap::new(),
            directory,
            delimiters,
            pattern,
        };
        language.set_target(target)?;

        Ok(language)
    }

    /// Replace the placeholder bracket pair.
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Result<Self, LanguageError> {
        self.pattern = delimiters.pattern()?;
        self.delimiters = delimiters;
        Ok(self)
    }

    /// Switch to another language or translation map.
    pub fn set_target(&mut self, target: impl Into<LanguageTarget>) -> Result<&mut Self, LanguageError> {
        match target.into() {
            LanguageTarget::Name(name) => {
                self.translations = match &self.directory {
                    Some(directory) => Self::load_from(directory, &name)?,
                    None => Self::load(&name)?,
                };
                self.language = name;
            }
            LanguageTarget::Translations(translations) => {
                self.translations = translations;
                self.language = CUSTOM_LANGUAGE.to_string();
            }
        }

        Ok(self)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn translations(&self) -> &BTreeMap<String, String> {
        &self.translations
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Read translations for one of the bundled languages.
    pub fn load(language: &str) -> Result<BTreeMap<String, String>, LanguageError> {
        let (_, content) = BUNDLED
            .iter()
            .find(|(name, _)| *name == language)
            .ok_or_else(|| LanguageError::NotBundled {
                language: language.to_string(),
            })?;

        decode(content, &Path::new("languages").join(format!("{}.json", language)))
    }

    /// Read translations for `language` from `<directory>/<language>.json`.
    pub fn load_from(
        directory: impl AsRef<Path>,
        language: &str,
    ) -> Result<BTreeMap<String, String>, LanguageError> {
        let path = directory.as_ref().join(format!("{}.json", language));
        tracing::debug!(path = %path.display(), "loading translations");

        let content = fs::read_to_string(&path).map_err(|source| LanguageError::NotFound {
            path: path.clone(),
            source,
        })?;

        decode(&content, &path)
    }

    /// Render the template for `key`, or `![key]` when it is unknown.
    pub fn translate(&self, key: &str, placeholders: &[(&str, &str)]) -> String {
        match self.translations.get(key) {
            Some(template) => template::render(template, &self.pattern, placeholders),
            None => {
                tracing::warn!(key, language = %self.language, "missing translation");
                format!("![{}]", key)
            }
        }
    }
}

fn decode(content: &str, path: &Path) -> Result<BTreeMap<String, String>, LanguageError> {
    let decoded: Value = serde_json::from_str(content).map_err(|e| LanguageError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match decoded {
        Value::Object(map) => stringify_map(map, Some(path)),
        other => Err(LanguageError::Decode {
            path: path.to_path_buf(),
            message: format!("expected an object, found {}", json_type_name(&other)),
        }),
    }
}

/// Scalars become text the way a loosely typed catalogue would print them:
/// `true` is `"1"`, `false` and `null` are empty.
fn stringify_map(
    map: serde_json::Map<String, Value>,
    path: Option<&Path>,
) -> Result<BTreeMap<String, String>, LanguageError> {
    map.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Bool(true) => "1".to_string(),
                Value::Bool(false) => String::new(),
                Value::Number(n) => n.to_string(),
                other => {
                    let message = format!("value for {:?} is {}, expected a scalar", key, json_type_name(&other));
                    return Err(match path {
                        Some(path) => LanguageError::Decode {
                            path: path.to_path_buf(),
                            message,
                        },
                        None => LanguageError::InvalidTarget { found: message },
                    });
                }
            };
            Ok((key, text))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom() -> Language {
        let translations = BTreeMap::from([
            ("greeting".to_string(), "Hello, {name}!".to_string()),
            ("plain".to_string(), "Nothing to fill".to_string()),
        ]);
        Language::new(LanguageTarget::Translations(translations)).unwrap()
    }

    #[test]
    fn test_translate_known_key() {
        let language = custom();
        assert_eq!(language.translate("greeting", &[("name", "Ada")]), "Hello, Ada!");
        assert_eq!(language.translate("plain", &[]), "Nothing to fill");
    }

    #[test]
    fn test_translate_missing_key_falls_back() {
        let language = custom();
        assert_eq!(language.translate("nope", &[]), "![nope]");
    }

    #[test]
    fn test_custom_language_name() {
        assert_eq!(custom().language(), CUSTOM_LANGUAGE);
    }

    #[test]
    fn test_bundled_english() {
        let language = Language::new("eng").unwrap();
        assert_eq!(language.language(), "eng");
        assert_eq!(language.translate("old_version", &[]), "Old");
        assert_eq!(language.translate("new_version", &[]), "New");
    }

    #[test]
    fn test_target_from_value() {
        assert_eq!(
            LanguageTarget::from_value(json!("deu")).unwrap(),
            LanguageTarget::Name("deu".to_string())
        );

        let target = LanguageTarget::from_value(json!({"a": "b", "n": 3, "yes": true, "no": false})).unwrap();
        match target {
            LanguageTarget::Translations(map) => {
                assert_eq!(map["a"], "b");
                assert_eq!(map["n"], "3");
                assert_eq!(map["yes"], "1");
                assert_eq!(map["no"], "");
            }
            _ => panic!("Expected translation map"),
        }

        assert!(matches!(
            LanguageTarget::from_value(json!(42)),
            Err(LanguageError::InvalidTarget { .. })
        ));
        assert!(matches!(
            LanguageTarget::from_value(json!({"a": ["b"]})),
            Err(LanguageError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_custom_delimiters() {
        let language = custom()
            .with_delimiters(Delimiters::new("[[", "]]"))
            .unwrap();
        assert_eq!(language.translate("greeting", &[("name", "Ada")]), "Hello, {name}!");

        let translations = BTreeMap::from([("k".to_string(), "v=[[v]]".to_string())]);
        let language = Language::new(LanguageTarget::Translations(translations))
            .unwrap()
            .with_delimiters(Delimiters::new("[[", "]]"))
            .unwrap();
        assert_eq!(language.translate("k", &[("v", "1")]), "v=1");
    }

    #[test]
    fn test_bundled_languages_need_no_files() {
        for name in bundled_languages() {
            let translations = Language::load(name).unwrap();
            assert_eq!(translations.len(), 3, "unexpected keys for {}", name);
        }
        assert_eq!(Language::new("fra").unwrap().translate("new_version", &[]), "Après");
    }

    #[test]
    fn test_unknown_bundled_language() {
        let err = Language::new("klingon").unwrap_err();
        assert!(matches!(err, LanguageError::NotBundled { ref language } if language == "klingon"));
    }

    #[test]
    fn test_set_target_switches_language() {
        let mut language = custom();
        language.set_target("deu").unwrap();
        assert_eq!(language.language(), "deu");
        assert!(language.translations().contains_key("differences"));
    }
}
