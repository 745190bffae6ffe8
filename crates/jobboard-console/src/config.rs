use jobboard_client::IdentityConfig;
use serde::Deserialize;

pub const API_KEY_ENV: &str = "JOBBOARD_IDENTITY_API_KEY";

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    pub api: ApiConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

/// Where the postings backend lives.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
        }
    }
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    /// Environment overrides, looked up through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.identity.api_key = key.trim().to_string();
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    let mut config = match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    };

    config.apply_env(|name| std::env::var(name).ok());
    if config.identity.api_key.is_empty() {
        tracing::warn!("identity api_key is empty, sign-in will fail (set {API_KEY_ENV})");
    }
    config
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
