use anyhow::Context as _;
use serde::Deserialize;
use std::time::Duration;

/// Default command prefix
fn default_command_prefix() -> String {
    "!".to_string()
}

/// Default directory holding one subdirectory per language
fn default_translations_dir() -> String {
    "translations".to_string()
}

/// Default flat working directory the translation files are copied into
fn default_translations_work_dir() -> String {
    "Translations".to_string()
}

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    10
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    5
}

/// Default timeout for a single Discord fetch during lookups, in seconds
fn default_fetch_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    // Translations
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,
    #[serde(default = "default_translations_work_dir")]
    pub translations_work_dir: String,
    #[serde(default)]
    pub default_language: Option<String>,

    // Bot info embed
    #[serde(default)]
    pub bot_name: Option<String>,
    #[serde(default)]
    pub bot_creator: Option<String>,
    #[serde(default)]
    pub github_owner: Option<String>,

    // Telemetry
    #[serde(default)]
    pub telemetry_endpoint: Option<String>,
    #[serde(default)]
    pub telemetry_token: Option<String>,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("command_prefix", &self.command_prefix)
            .field("translations_dir", &self.translations_dir)
            .field("translations_work_dir", &self.translations_work_dir)
            .field("default_language", &self.default_language)
            .field("bot_name", &self.bot_name)
            .field("bot_creator", &self.bot_creator)
            .field("github_owner", &self.github_owner)
            .field("telemetry_endpoint", &self.telemetry_endpoint)
            .field(
                "telemetry_token",
                &self.telemetry_token.as_deref().map(mask_token),
            )
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn http_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http_connect_timeout)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }

    /// Check if telemetry is fully configured (endpoint, token and bot name)
    pub fn has_telemetry(&self) -> bool {
        self.telemetry_endpoint.is_some()
            && self.telemetry_token.is_some()
            && self.bot_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_params() -> Params {
        Params {
            discord_token: "MTExMjIyMzMzNDQ0NTU1NjY2Nzc3ODg4OTk5".to_string(),
            command_prefix: default_command_prefix(),
            translations_dir: default_translations_dir(),
            translations_work_dir: default_translations_work_dir(),
            default_language: None,
            bot_name: Some("Sanara".to_string()),
            bot_creator: None,
            github_owner: None,
            telemetry_endpoint: Some("https://example.com/stats".to_string()),
            telemetry_token: Some("telemetry-secret-token".to_string()),
            http_timeout: default_http_timeout(),
            http_connect_timeout: default_http_connect_timeout(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }

    #[rstest]
    #[case::long_string("MTExMjIyMzMzNDQ0NTU1NjY2Nzc3ODg4OTk5", "MTEx***OTk5")]
    #[case::short_string("short", "s***")]
    #[case::empty_string("", "<empty>")]
    fn test_mask_token(#[case] input: &str, #[case] expected: &str) {
        let masked = mask_token(input);
        assert_eq!(masked, expected);
    }

    #[test]
    fn test_params_debug_masks_sensitive_data() {
        let debug_output = format!("{:?}", test_params());

        assert!(debug_output.contains("MTEx***OTk5"));
        assert!(!debug_output.contains("MTExMjIyMzMzNDQ0NTU1NjY2Nzc3ODg4OTk5"));

        assert!(debug_output.contains("tele***oken"));
        assert!(!debug_output.contains("telemetry-secret-token"));

        // Endpoint is not a secret
        assert!(debug_output.contains("https://example.com/stats"));
    }

    #[rstest]
    #[case::complete(true, true, true, true)]
    #[case::no_endpoint(false, true, true, false)]
    #[case::no_token(true, false, true, false)]
    #[case::no_bot_name(true, true, false, false)]
    fn test_has_telemetry(
        #[case] endpoint: bool,
        #[case] token: bool,
        #[case] bot_name: bool,
        #[case] expected: bool,
    ) {
        let mut params = test_params();
        if !endpoint {
            params.telemetry_endpoint = None;
        }
        if !token {
            params.telemetry_token = None;
        }
        if !bot_name {
            params.bot_name = None;
        }
        assert_eq!(params.has_telemetry(), expected);
    }

    #[test]
    fn test_timeouts_are_seconds() {
        let params = test_params();
        assert_eq!(params.http_timeout(), Duration::from_secs(10));
        assert_eq!(params.http_connect_timeout(), Duration::from_secs(5));
        assert_eq!(params.fetch_timeout(), Duration::from_secs(5));
    }
}
