use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for piimask
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Which classifier to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Remote `/analyze` endpoint
    Http,
    /// Built-in regex recognizers
    Pattern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Minimum score for a detection to be kept
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            endpoint: default_endpoint(),
            threshold: default_threshold(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_backend() -> Backend {
    Backend::Http
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/analyze".to_string()
}

fn default_threshold() -> f64 {
    0.6
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_file_name() -> String {
    "pii_results.json".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.classifier.threshold) {
            anyhow::bail!(
                "classifier.threshold must be between 0 and 1, got {}",
                self.classifier.threshold
            );
        }
        if self.classifier.timeout_secs == 0 {
            anyhow::bail!("classifier.timeout_secs must be positive");
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "piimask", "piimask") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.piimask/config.toml")
        }
    }
}
