// src/core/fs_ops.rs
//! File system helpers shared by the exporter

use crate::app_log;
use anyhow::{Context, Result};
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(debug, "Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Write a file, creating parent directories first.
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(debug, "Written file: {}", path.display());
        Ok(())
    }

    /// Canonical form of `path`. A path that does not exist yet is resolved
    /// through its parent, and kept as given when the parent is missing too.
    pub async fn resolve(path: &Path) -> PathBuf {
        if let Ok(canonical) = fs::canonicalize(path).await {
            return canonical;
        }
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => match fs::canonicalize(parent).await {
                Ok(parent) => parent.join(name),
                Err(_) => path.to_path_buf(),
            },
            _ => path.to_path_buf(),
        }
    }

    pub async fn remove_dir_all(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_dir_all(path)
                .await
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
            app_log!(debug, "Removed directory: {}", path.display());
        }
        Ok(())
    }

    /// Recursively copy `src` into `dest`. Returns the number of files copied.
    #[async_recursion]
    pub async fn copy_dir_all(src: &Path, dest: &Path) -> Result<usize> {
        Self::ensure_dir_exists(dest).await?;

        let mut copied = 0;
        let mut entries = fs::read_dir(src)
            .await
            .with_context(|| format!("Failed to read directory: {}", src.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let target = dest.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                copied += Self::copy_dir_all(&path, &target).await?;
            } else {
                fs::copy(&path, &target).await.with_context(|| {
                    format!("Failed to copy {} to {}", path.display(), target.display())
                })?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}
