//! Configuration
//!
//! YAML設定ファイルの読み込みと検証

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::dto::collect_config::CollectConfig;
use crate::application::dto::load_config::LoadConfig;
use crate::domain::entities::load_plan::{LoadFiles, ReplaceStrategy};

/// Semantic validation errors (missing keys are reported by serde_yaml).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` must not be empty")]
    EmptyValue(&'static str),

    #[error("`adjust.apps` must list at least one app")]
    NoApps,

    #[error("app '{0}' has an empty key")]
    EmptyAppKey(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory for output.csv and the COPY sidecar files
    pub load_path: String,
    pub vertica: VerticaConfig,
    pub adjust: AdjustConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerticaConfig {
    /// ODBC data source name
    #[serde(default = "default_dsn")]
    pub dsn: String,
    pub table: String,
    #[serde(default)]
    pub replace_strategy: ReplaceStrategy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdjustConfig {
    pub token: String,
    /// app name -> app key, in output order
    pub apps: IndexMap<String, String>,
}

fn default_dsn() -> String {
    "vertica".to_string()
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load_path.trim().is_empty() {
            return Err(ConfigError::EmptyValue("load_path"));
        }
        if self.vertica.dsn.trim().is_empty() {
            return Err(ConfigError::EmptyValue("vertica.dsn"));
        }
        if self.vertica.table.trim().is_empty() {
            return Err(ConfigError::EmptyValue("vertica.table"));
        }
        if self.adjust.token.trim().is_empty() {
            return Err(ConfigError::EmptyValue("adjust.token"));
        }
        if self.adjust.apps.is_empty() {
            return Err(ConfigError::NoApps);
        }
        if let Some((app, _)) = self.adjust.apps.iter().find(|(_, key)| key.trim().is_empty()) {
            return Err(ConfigError::EmptyAppKey(app.clone()));
        }
        Ok(())
    }

    /// `load_path` with `~` expanded
    pub fn load_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.load_path).as_ref())
    }

    pub fn collect_config(&self) -> CollectConfig {
        CollectConfig::new(self.adjust.token.clone(), self.adjust.apps.clone())
    }

    /// Load settings for a data file written by the collect step
    pub fn load_config(&self, data_file: impl Into<PathBuf>) -> LoadConfig {
        LoadConfig::new(
            self.vertica.table.clone(),
            LoadFiles::new(data_file, &self.load_dir()),
            self.vertica.replace_strategy,
        )
    }
}
