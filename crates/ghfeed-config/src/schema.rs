//! Configuration schema.

use std::time::Duration;

use ghfeed_core::{EventKind, KindFilter};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Event selection.
    #[serde(default)]
    pub events: EventsConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.github.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "github.api_url",
                reason: "must not be empty",
            });
        }

        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "github.timeout_secs",
                reason: "must be positive",
            });
        }

        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User agent sent with requests (defaults to `ghfeed/<version>`).
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Event selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Kinds to render; events of other types are skipped.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<EventKind>,
}

impl EventsConfig {
    /// Returns the dispatcher pre-filter for these kinds.
    #[must_use]
    pub fn filter(&self) -> KindFilter {
        KindFilter::only(self.kinds.iter().copied())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            kinds: default_kinds(),
        }
    }
}

fn default_kinds() -> Vec<EventKind> {
    EventKind::ALL.to_vec()
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Line printed before the events.
    #[serde(default = "default_header")]
    pub header: String,

    /// Prefix of each event line.
    #[serde(default = "default_bullet")]
    pub bullet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            bullet: default_bullet(),
        }
    }
}

fn default_header() -> String {
    "Output:".to_string()
}

fn default_bullet() -> String {
    "- ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.timeout(), Duration::from_secs(30));
        assert!(config.github.user_agent.is_none());
        assert_eq!(config.events.kinds, EventKind::ALL.to_vec());
        assert_eq!(config.output.header, "Output:");
        assert_eq!(config.output.bullet, "- ");
    }

    #[test]
    fn test_empty_toml_matches_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [github]
            timeout_secs = 5
        "#,
        )
        .unwrap();

        assert_eq!(config.github.timeout_secs, 5);
        assert_eq!(config.github.api_url, "https://api.github.com");
    }

    #[test]
    fn test_kinds_parse_type_strings() {
        let config: Config = toml::from_str(
            r#"
            [events]
            kinds = ["PushEvent", "IssuesEvent"]
        "#,
        )
        .unwrap();

        assert_eq!(config.events.kinds, vec![EventKind::Push, EventKind::Issues]);
        assert_eq!(
            config.events.filter(),
            KindFilter::only([EventKind::Push, EventKind::Issues])
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [events]
            kinds = ["ForkEvent"]
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.github.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "github.timeout_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_empty_api_url() {
        let mut config = Config::default();
        config.github.api_url = "  ".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "github.api_url",
                ..
            })
        ));
    }
}
