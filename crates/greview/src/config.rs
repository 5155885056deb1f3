use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use greview_core::{LabelCatalog, LabelRange};
use greview_rest::RemoteConfig;

const CONFIG_ENV: &str = "GREVIEW_CONFIG";
const PASSWORD_ENV: &str = "GREVIEW_PASSWORD";

#[derive(serde::Serialize, serde::Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
    /// Extra labels, or new ranges for the built-in ones.
    #[serde(default)]
    pub labels: BTreeMap<String, LabelRange>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, Clone)]
pub struct Profile {
    pub base_url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    pub fn remote_config(&self) -> RemoteConfig {
        self.remote_config_with(std::env::var(PASSWORD_ENV).ok())
    }

    /// Without a username the profile is anonymous and read-only.
    pub fn remote_config_with(&self, password_override: Option<String>) -> RemoteConfig {
        let mut config = RemoteConfig::anonymous(&self.base_url);
        if let Some(username) = &self.username {
            let password = password_override
                .or_else(|| self.password.clone())
                .unwrap_or_default();
            config = config.with_credentials(username, password);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> anyhow::Result<&Profile> {
        self.profiles.get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "profile '{}' not found in {}",
                name,
                config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config".to_string())
            )
        })
    }

    pub fn label_catalog(&self) -> anyhow::Result<LabelCatalog> {
        let mut catalog = LabelCatalog::default();
        for (name, range) in &self.labels {
            catalog.insert(name.clone(), *range)?;
        }
        Ok(catalog)
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("could not find home directory"))
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(home_dir()?.join(".greview").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring unreadable config {}: {e}", path.display());
            Config::default()
        }
    }
}
