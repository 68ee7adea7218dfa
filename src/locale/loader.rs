use super::error::LocaleError;
use super::table::{LocaleAliases, LocaleTable};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// `<language>-<category>.json` in the working directory
static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)-(infos|terms)\.json$").expect("valid translation file name regex")
});

/// `"key": "value"` pairs of a terms file
static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([a-zA-Z0-9]+)"\s*:\s*"([^"]+)""#).expect("valid translation term regex")
});

/// Content of an `infos` file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub name_english: String,
    pub name_language: String,
}

/// Load every translation found under `source_dir`
///
/// `source_dir` holds one subdirectory per language, each with an
/// `infos.json` and a `terms.json`. The files are first copied into the flat
/// `work_dir` as `<language>-<file>`, then everything in `work_dir` is loaded.
/// Files not following that naming are ignored.
pub fn load_translations(
    source_dir: &Path,
    work_dir: &Path,
) -> Result<(LocaleTable, LocaleAliases), LocaleError> {
    fs::create_dir_all(work_dir).map_err(|err| LocaleError::io(work_dir, err))?;

    if source_dir.is_dir() {
        copy_language_files(source_dir, work_dir)?;
    } else {
        debug!(source_dir = %source_dir.display(), "Translation source directory not found");
    }

    let mut languages: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut aliases = LocaleAliases::default();

    for entry in fs::read_dir(work_dir).map_err(|err| LocaleError::io(work_dir, err))? {
        let entry = entry.map_err(|err| LocaleError::io(work_dir, err))?;
        let path = entry.path();
        let file_name = entry.file_name();

        let Some(captures) = file_name.to_str().and_then(|name| FILE_NAME.captures(name)) else {
            debug!(path = %path.display(), "Skipping file with unexpected name");
            continue;
        };
        let language = captures[1].to_string();

        let content = fs::read_to_string(&path).map_err(|err| LocaleError::io(&path, err))?;

        if &captures[2] == "infos" {
            let info = parse_infos(&content).map_err(|source| LocaleError::MalformedMetadata {
                language: language.clone(),
                source,
            })?;
            aliases.insert(language, info.name_english, info.name_language);
        } else {
            let terms = parse_terms(&content);
            debug!(%language, count = terms.len(), "Loaded translation terms");
            languages.insert(language, terms);
        }
    }

    info!(
        languages = languages.len(),
        aliases = aliases.len(),
        "Translations loaded"
    );

    Ok((LocaleTable::from_languages(languages)?, aliases))
}

/// Copy `<source>/<language>/<file>` to `<work>/<language>-<file>`
fn copy_language_files(source_dir: &Path, work_dir: &Path) -> Result<(), LocaleError> {
    for language_dir in fs::read_dir(source_dir).map_err(|err| LocaleError::io(source_dir, err))? {
        let language_dir = language_dir.map_err(|err| LocaleError::io(source_dir, err))?;
        let language_path = language_dir.path();
        if !language_path.is_dir() {
            continue;
        }
        let language = language_dir.file_name().to_string_lossy().into_owned();

        for file in fs::read_dir(&language_path).map_err(|err| LocaleError::io(&language_path, err))? {
            let file = file.map_err(|err| LocaleError::io(&language_path, err))?;
            let from = file.path();
            if !from.is_file() {
                continue;
            }

            let to = work_dir.join(format!(
                "{}-{}",
                language,
                file.file_name().to_string_lossy()
            ));
            fs::copy(&from, &to).map_err(|err| LocaleError::io(&from, err))?;
        }
    }

    Ok(())
}

/// Decode the metadata of a language
pub fn parse_infos(content: &str) -> Result<LocaleInfo, serde_json::Error> {
    serde_json::from_str(content)
}

/// Extract key/value pairs, keeping the first value of repeated keys
///
/// Matching is line-agnostic and tolerant: anything that is not a quoted
/// alphanumeric key followed by a quoted value is ignored.
pub fn parse_terms(content: &str) -> HashMap<String, String> {
    let mut terms = HashMap::new();
    for captures in TERM.captures_iter(content) {
        terms
            .entry(captures[1].to_string())
            .or_insert_with(|| captures[2].to_string());
    }
    terms
}
