// src/environment.rs
use crate::app_log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub data_path: PathBuf,
    pub public_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub site_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            public_path: PathBuf::from("public"),
            output_path: PathBuf::from("out"),
            base_path: String::new(),
            site_url: None,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), &Self::get_environment())
    }

    pub fn get_environment() -> String {
        std::env::var("CV_SITE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Missing file means defaults relative to the working directory.
    pub fn load_from(config_path: &Path, environment: &str) -> Result<Self> {
        app_log!(info, "Loading configuration for environment: {}", environment);

        let env_config = if config_path.exists() {
            let config_content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config_file: ConfigFile = serde_yaml::from_str(&config_content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;

            match environment {
                "production" => config_file.production,
                _ => config_file.local,
            }
        } else {
            app_log!(info, "{} not found, using defaults", config_path.display());
            Self::default()
        };

        Ok(Self {
            data_path: Self::resolve_path(&env_config.data_path)?,
            public_path: Self::resolve_path(&env_config.public_path)?,
            output_path: Self::resolve_path(&env_config.output_path)?,
            base_path: normalize_base_path(&env_config.base_path),
            site_url: env_config.site_url.filter(|url| !url.trim().is_empty()),
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}

/// "" or "/prefix" without a trailing slash.
pub fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
