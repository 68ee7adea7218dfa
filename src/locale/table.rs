use super::error::LocaleError;
use std::collections::HashMap;

/// Language every lookup falls back to
pub const FALLBACK_LANGUAGE: &str = "en";

/// Key rendered when the requested key exists in no table; `{0}` is the key
pub const INVALID_KEY: &str = "invalidKey";

/// Translation strings of every loaded language
///
/// Always holds a complete [`FALLBACK_LANGUAGE`] table containing
/// [`INVALID_KEY`], so [`LocaleTable::translate`] always has something to
/// render.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    languages: HashMap<String, HashMap<String, String>>,
}

impl LocaleTable {
    /// Build a table from language code -> (key -> template)
    pub fn from_languages(
        languages: HashMap<String, HashMap<String, String>>,
    ) -> Result<Self, LocaleError> {
        let fallback = languages
            .get(FALLBACK_LANGUAGE)
            .ok_or_else(|| LocaleError::MissingFallbackLanguage(FALLBACK_LANGUAGE.to_string()))?;

        if !fallback.contains_key(INVALID_KEY) {
            return Err(LocaleError::MissingInvalidKey {
                language: FALLBACK_LANGUAGE.to_string(),
                key: INVALID_KEY.to_string(),
            });
        }

        Ok(Self { languages })
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Loaded language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|terms| terms.get(key))
            .map(String::as_str)
    }

    /// Template for `key` in `language`, falling back to English
    fn template(&self, language: Option<&str>, key: &str) -> Option<&str> {
        language
            .and_then(|language| self.lookup(language, key))
            .or_else(|| self.lookup(FALLBACK_LANGUAGE, key))
    }

    /// Render `key` in `language` with positional arguments
    ///
    /// Unknown languages and keys missing from `language` use the English
    /// string. A key missing everywhere renders [`INVALID_KEY`] with the key
    /// as its only argument.
    pub fn translate(&self, language: Option<&str>, key: &str, args: &[&str]) -> String {
        if let Some(template) = self.template(language, key) {
            return render(template, args);
        }

        let language = language.unwrap_or(FALLBACK_LANGUAGE);
        match self.template(Some(language), INVALID_KEY) {
            Some(template) => render(template, &[key]),
            // Unreachable for tables built through from_languages
            None => key.to_string(),
        }
    }
}

/// Expand `\n` escapes, then replace `{i}` with `args[i]`
///
/// Placeholders without a matching argument are left as they are.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut sentence = template.replace("\\n", "\n");
    for (i, arg) in args.iter().enumerate() {
        sentence = sentence.replace(&format!("{{{i}}}"), arg);
    }
    sentence
}

/// Display names of each language: English name first, native name second
#[derive(Debug, Clone, Default)]
pub struct LocaleAliases {
    names: HashMap<String, Vec<String>>,
}

impl LocaleAliases {
    pub fn insert(&mut self, language: impl Into<String>, english: String, native: String) {
        self.names.insert(language.into(), vec![english, native]);
    }

    pub fn names(&self, language: &str) -> Option<&[String]> {
        self.names.get(language).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
