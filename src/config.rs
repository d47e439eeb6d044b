use std::path::PathBuf;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GHT";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const USERNAME: &str = "halfguru";
/// Pin a theme by name; `None` draws a random one every run.
pub const THEME: Option<&str> = None;
pub const TEMPLATE_PATH: &str = "template.svg";
pub const OUTPUT_PATH: &str = "stats.svg";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means unauthenticated requests.
    pub token: Option<String>,
    pub api_base: String,
    pub username: String,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Theme name to render with. Defaults to [`THEME`]; tests and callers
    /// set it for deterministic output. `None` picks a random theme.
    pub theme: Option<String>,
}

impl Config {
    /// Build the run configuration. The token is the only value read from the
    /// environment; everything else is fixed.
    pub fn from_env() -> Self {
        Self::with_token(std::env::var(TOKEN_ENV).ok())
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
            username: USERNAME.to_string(),
            template_path: PathBuf::from(TEMPLATE_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            theme: THEME.map(str::to_string),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_token(Some("ghp_fake".to_string()));
        assert_eq!(config.token.as_deref(), Some("ghp_fake"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.username, USERNAME);
        assert_eq!(config.template_path, PathBuf::from("template.svg"));
        assert_eq!(config.output_path, PathBuf::from("stats.svg"));
        assert_eq!(config.theme.as_deref(), THEME);
    }

    #[test]
    fn test_blank_token_is_treated_as_missing() {
        assert!(Config::with_token(Some("   ".to_string())).token.is_none());
        assert!(Config::with_token(None).token.is_none());
    }

    #[test]
    fn test_api_base_override_strips_trailing_slash() {
        let config = Config::with_token(None).with_api_base("http://127.0.0.1:4000/");
        assert_eq!(config.api_base, "http://127.0.0.1:4000");
    }
}
