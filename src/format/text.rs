//! Text helpers for Discord output
//!
//! Discord limits message content to 2000 characters and embed descriptions
//! to 4096. Lengths are counted in characters, not bytes.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

/// Maximum length of a message content
pub const MESSAGE_MAX_LEN: usize = 2000;

/// Maximum length of an embed description
pub const EMBED_DESCRIPTION_MAX_LEN: usize = 4096;

/// HTML rewrites applied in order by [`clean_html`]
static HTML_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"<br */>", "\n"),
        (r"</br>", "\n"),
        (r"<b>([^<]+)</b>", "**$1**"),
        (r"<strong>([^<]+)</strong>", "**$1**"),
        (r#"<a href="([^"]+)">([^<]+)</a>"#, "[$2]($1)"),
        (r"<[^>]+>([^<]+)</[^>]+>", "$1"),
        (r"</?[^>]+>", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid HTML rule regex"), replacement)
    })
    .collect()
});

const IMAGE_EXTENSIONS: [&str; 4] = ["gif", "png", "jpg", "jpeg"];

/// Truncate content to `max_len` characters
///
/// If content exceeds the limit, truncates to `max_len - 3` chars and appends "..."
pub fn truncate(content: &str, max_len: usize) -> String {
    let char_count = content.chars().count();

    if char_count > max_len {
        let truncated: String = content.chars().take(max_len.saturating_sub(3)).collect();
        let result = format!("{}...", truncated);

        warn!(
            original_len = char_count,
            truncated_len = result.chars().count(),
            "Content exceeds limit, truncated"
        );

        result
    } else {
        content.to_string()
    }
}

/// Convert a small HTML fragment into Discord markdown
///
/// Line breaks become newlines, bold tags become `**bold**`, links become
/// `[text](href)` and every other tag is dropped.
pub fn clean_html(html: &str) -> String {
    HTML_RULES
        .iter()
        .fold(html.to_string(), |text, (rule, replacement)| {
            rule.replace_all(&text, *replacement).into_owned()
        })
}

/// Escape backslashes and double quotes
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Uppercase the first character and lowercase the rest
pub fn to_word_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Whether Discord displays files with this extension inline
///
/// Accepts the extension with or without its leading dot.
pub fn is_image(extension: &str) -> bool {
    let extension = extension.to_lowercase();
    let extension = extension.strip_prefix('.').unwrap_or(&extension);
    IMAGE_EXTENSIONS
        .iter()
        .any(|image| extension.starts_with(image))
}

/// Extension of a file name including its leading dot, or an empty string
pub fn extension(file: &str) -> String {
    Path::new(file)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
