//! Mention markup, bare IDs and name normalization
//!
//! Discord renders references as `<@ID>` / `<@!ID>` (users), `<@&ID>` (roles)
//! and `<#ID>` (channels). IDs are snowflakes of 17 to 20 digits.

use regex::Regex;
use std::sync::LazyLock;

static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?([0-9]{17,20})>").expect("valid user mention regex"));
static ROLE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@&([0-9]{17,20})>").expect("valid role mention regex"));
static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#([0-9]{17,20})>").expect("valid channel mention regex"));

/// Kind of entity a mention refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    User,
    Role,
    Channel,
}

impl MentionKind {
    fn pattern(self) -> &'static Regex {
        match self {
            MentionKind::User => &USER_MENTION,
            MentionKind::Role => &ROLE_MENTION,
            MentionKind::Channel => &CHANNEL_MENTION,
        }
    }
}

/// Extract the ID of the first mention of `kind` in `token`
///
/// Returns `None` when there is no such mention or the ID does not fit a
/// non-zero `u64`.
pub fn parse_mention(token: &str, kind: MentionKind) -> Option<u64> {
    let captures = kind.pattern().captures(token)?;
    captures[1].parse::<u64>().ok().filter(|id| *id != 0)
}

/// Parse a bare numeric ID; zero is reserved by Discord and rejected
pub fn parse_id(token: &str) -> Option<u64> {
    token.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// IDs to try directly, mention first
pub fn candidate_ids(token: &str, kind: MentionKind) -> Vec<u64> {
    parse_mention(token, kind)
        .into_iter()
        .chain(parse_id(token))
        .collect()
}

/// Lowercase and keep only letters and digits
///
/// A word without any letter or digit is returned unchanged so that names
/// made only of symbols can still be matched.
pub fn normalize(word: &str) -> String {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if cleaned.is_empty() {
        word.to_string()
    } else {
        cleaned
    }
}

/// Compare an already normalized token with a candidate name
pub fn matches_normalized(normalized_token: &str, candidate: &str) -> bool {
    normalize(candidate) == normalized_token
}
