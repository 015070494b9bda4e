// src/config.rs
use crate::environment::{normalize_base_path, EnvironmentConfig};
use crate::render::html::PageContext;
use chrono::Datelike;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8000;

/// Resolved settings for one run: environment file first, then CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub output_dir: PathBuf,
    pub base_path: String,
    pub site_url: Option<String>,
    pub port: u16,
    pub root_dir: PathBuf,
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::from_environment(EnvironmentConfig::default())
    }

    pub fn from_environment(env: EnvironmentConfig) -> Self {
        // Capture the current directory at creation time
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            data_dir: env.data_path,
            public_dir: env.public_path,
            output_dir: env.output_path,
            base_path: normalize_base_path(&env.base_path),
            site_url: env.site_url,
            port: port_from_env().unwrap_or(DEFAULT_PORT),
            root_dir: current_dir,
        }
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn with_public_dir(mut self, dir: PathBuf) -> Self {
        self.public_dir = dir;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    pub fn with_site_url(mut self, url: String) -> Self {
        self.site_url = Some(url);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn absolute_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }

    pub fn data_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.data_dir)
    }

    pub fn public_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.public_dir)
    }

    pub fn output_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.output_dir)
    }

    /// Page context stamped with the current year.
    pub fn page_context(&self) -> PageContext {
        PageContext::new(
            &self.base_path,
            self.site_url.clone(),
            chrono::Utc::now().year(),
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn port_from_env() -> Option<u16> {
    std::env::var("ROCKET_PORT").ok()?.parse().ok()
}
