//! Runtime configuration, read from `FORMS_*` environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `FORMS_HOST` | `127.0.0.1` |
//! | `FORMS_PORT` | `8080` |
//! | `FORMS_DATABASE` | `forms.sqlite` |
//! | `FORMS_IDENTITY_HEADER` | `X-User-Id` |
//! | `FORMS_JSON_LIMIT` | `10485760` (10 MB) |

use ::config::{Environment, Map};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const ENV_PREFIX: &str = "FORMS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("FORMS_{name} must not be blank")]
    Blank { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    #[serde(rename = "database")]
    pub database_path: PathBuf,
    /// Header carrying the authenticated user id, set by the upstream auth proxy.
    pub identity_header: String,
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("forms.sqlite"),
            identity_header: "X-User-Id".to_string(),
            json_limit: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Same as `from_env`, but reads `FORMS_*` variables from `vars` instead
    /// of the process environment.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.check_blanks()?;
        Ok(config)
    }

    fn check_blanks(&self) -> Result<(), ConfigError> {
        let fields = [
            ("HOST", self.host.as_str()),
            ("DATABASE", self.database_path.to_str().unwrap_or("-")),
            ("IDENTITY_HEADER", self.identity_header.as_str()),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Blank { name: *name }),
            None => Ok(()),
        }
    }
}
