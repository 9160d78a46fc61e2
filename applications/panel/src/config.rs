/// Panel configuration
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PanelConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub auth: AuthTransport,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

/// How requests prove session validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTransport {
    /// Session cookie carried by the client's cookie store
    #[default]
    Cookie,
    /// Bearer token read from the session cache
    Bearer,
}

impl PanelConfig {
    /// Load configuration from `config.toml` (if present) layered with
    /// `SCRIBE_`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SCRIBE")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings.build().context("loading configuration")?;

        config
            .try_deserialize()
            .context("parsing configuration")
    }
}

fn default_server() -> ServerSettings {
    ServerSettings {
        url: default_url(),
        auth: AuthTransport::default(),
    }
}

fn default_session() -> SessionSettings {
    SessionSettings {
        cache_path: default_cache_path(),
    }
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(".scribe-session.json")
}
