use std::path::PathBuf;

/// Errors raised while building the translation tables
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("failed to access translation file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed locale metadata for language `{language}`")]
    MalformedMetadata {
        language: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no translations found for the fallback language `{0}`")]
    MissingFallbackLanguage(String),
    #[error("fallback language `{language}` has no `{key}` entry")]
    MissingInvalidKey { language: String, key: String },
}

impl LocaleError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
