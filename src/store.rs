// src/store.rs
//! Locale-keyed CV documents on disk: `<data_dir>/cv.<lang>.json`.

use crate::app_log;
use crate::error::{SiteError, SiteResult};
use crate::locale::{Locale, SUPPORTED_LOCALES};
use crate::types::CvDocument;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.data_dir.join(format!("cv.{}.json", locale.code()))
    }

    /// Read, parse and validate the document for `locale`. Every failure
    /// (missing file, bad JSON, missing field, invalid value) is reported as
    /// `DocumentUnavailable`.
    pub async fn load(&self, locale: Locale) -> SiteResult<CvDocument> {
        let path = self.path_for(locale);
        let unavailable = |reason: String| SiteError::DocumentUnavailable {
            locale: locale.code().to_string(),
            path: path.clone(),
            reason,
        };

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        let document = CvDocument::from_json(&content).map_err(unavailable)?;

        app_log!(debug, "Loaded CV document for {} from {}", locale, path.display());
        Ok(document)
    }

    /// Every supported locale, in switcher order, with its own outcome.
    pub async fn load_all(&self) -> Vec<(Locale, SiteResult<CvDocument>)> {
        let mut results = Vec::with_capacity(SUPPORTED_LOCALES.len());
        for locale in SUPPORTED_LOCALES {
            let result = self.load(locale).await;
            if let Err(e) = &result {
                app_log!(warn, "{}", e);
            }
            results.push((locale, result));
        }
        results
    }
}
