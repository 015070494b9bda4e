// src/generator.rs
//! Static export: one page per locale plus the not-found page and assets.

use crate::app_log;
use crate::config::SiteConfig;
use crate::core::FsOps;
use crate::locale::Locale;
use crate::render::html::{document_page, not_found_page, redirect_page, PageContext};
use crate::store::DocumentStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub written: Vec<Locale>,
    pub skipped: Vec<(Locale, String)>,
    pub assets_copied: usize,
}

pub struct SiteGenerator {
    pub config: SiteConfig,
    store: DocumentStore,
    context: PageContext,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        let store = DocumentStore::new(config.data_dir_absolute());
        let context = config.page_context();
        Self {
            config,
            store,
            context,
        }
    }

    /// Write the site into the output directory, replacing its previous contents.
    ///
    /// Locales whose document fails to load are skipped; the export fails
    /// only when no locale could be written. Nothing in the output directory
    /// is touched until at least one document has loaded.
    pub async fn generate(&self) -> Result<ExportReport> {
        let out = self.config.output_dir_absolute();
        let public = self.config.public_dir_absolute();
        guard_output_dir(&out, &[self.config.data_dir_absolute(), public.clone()]).await?;

        let mut documents = Vec::new();
        let mut skipped = Vec::new();
        for (locale, result) in self.store.load_all().await {
            match result {
                Ok(document) => documents.push((locale, document)),
                Err(e) => skipped.push((locale, e.to_string())),
            }
        }

        if documents.is_empty() {
            anyhow::bail!(
                "No CV documents could be loaded from {}",
                self.store.data_dir().display()
            );
        }

        FsOps::remove_dir_all(&out).await?;
        FsOps::ensure_dir_exists(&out).await?;

        let assets_copied = if public.is_dir() {
            FsOps::copy_dir_all(&public, &out)
                .await
                .context("Failed to copy public assets")?
        } else {
            app_log!(warn, "Public directory not found: {}", public.display());
            0
        };

        let mut written = Vec::new();
        for (locale, document) in &documents {
            let html = document_page(document, *locale, &self.context);
            FsOps::write_file_safe(&out.join(locale.code()).join("index.html"), &html).await?;
            app_log!(info, "Generated page for {}", locale);
            written.push(*locale);
        }

        FsOps::write_file_safe(&out.join("404.html"), &not_found_page(&self.context)).await?;
        FsOps::write_file_safe(
            &out.join("index.html"),
            &redirect_page(&self.context, Locale::DEFAULT),
        )
        .await?;
        FsOps::write_file_safe(&out.join(".nojekyll"), "").await?;

        let report = ExportReport {
            generated_at: Utc::now(),
            output_dir: out,
            written,
            skipped,
            assets_copied,
        };

        app_log!(
            info,
            "✅ Exported {} locale(s) to {} at {}",
            report.written.len(),
            report.output_dir.display(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        Ok(report)
    }
}

/// Refuse an output directory that is, or contains, one of the inputs,
/// or that sits inside the public directory being copied into it.
async fn guard_output_dir(out: &Path, inputs: &[PathBuf]) -> Result<()> {
    let out = FsOps::resolve(out).await;
    for input in inputs {
        let input = FsOps::resolve(input).await;
        if input.starts_with(&out) || out.starts_with(&input) {
            anyhow::bail!(
                "Output directory {} overlaps input directory {}",
                out.display(),
                input.display()
            );
        }
    }
    Ok(())
}

/// Validate every supported document without writing anything.
/// Returns (locale, error) for each failure.
pub async fn check_documents(store: &DocumentStore) -> Vec<(Locale, String)> {
    store
        .load_all()
        .await
        .into_iter()
        .filter_map(|(locale, result)| result.err().map(|e| (locale, e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "name": "Lucía Ramos",
        "title": "Analyst",
        "contact": { "email": "a@b.c", "phone": "", "location": "Berlin", "linkedin": "", "github": "" },
        "summary": "Hi",
        "experience": [],
        "education": [],
        "skills": { "technical": [] },
        "languages": []
    }"#;

    fn workspace() -> (TempDir, SiteConfig) {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("data")).unwrap();
        std::fs::create_dir_all(root.path().join("public/images")).unwrap();
        std::fs::write(root.path().join("public/images/logo.png"), b"png").unwrap();
        let config = SiteConfig::new()
            .with_data_dir(root.path().join("data"))
            .with_public_dir(root.path().join("public"))
            .with_output_dir(root.path().join("out"));
        (root, config)
    }

    #[tokio::test]
    async fn test_export_skips_unavailable_locales() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), DOC).unwrap();
        std::fs::write(root.path().join("data/cv.fr.json"), DOC).unwrap();

        let report = SiteGenerator::new(config).generate().await.unwrap();

        assert_eq!(report.written, vec![Locale::En, Locale::Fr]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, Locale::Es);
        assert_eq!(report.assets_copied, 1);

        let out = root.path().join("out");
        assert!(out.join("en/index.html").exists());
        assert!(out.join("fr/index.html").exists());
        assert!(!out.join("es/index.html").exists());
        assert!(out.join("404.html").exists());
        assert!(out.join(".nojekyll").exists());
        assert!(out.join("images/logo.png").exists());
        let root_page = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(root_page.contains("url=/en/"));
    }

    #[tokio::test]
    async fn test_export_writes_site_url() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), DOC).unwrap();
        let config = config.with_site_url("https://example.org/cv/".to_string());

        SiteGenerator::new(config).generate().await.unwrap();
        let page = std::fs::read_to_string(root.path().join("out/en/index.html")).unwrap();
        assert!(page.contains(r#"content="https://example.org/cv/en/""#));
    }

    #[tokio::test]
    async fn test_export_fails_without_documents() {
        let (_root, config) = workspace();
        assert!(SiteGenerator::new(config).generate().await.is_err());
    }

    #[tokio::test]
    async fn test_failed_export_keeps_previous_output() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), "{ broken").unwrap();
        let previous = root.path().join("out/en/index.html");
        std::fs::create_dir_all(previous.parent().unwrap()).unwrap();
        std::fs::write(&previous, "<html>old</html>").unwrap();

        assert!(SiteGenerator::new(config).generate().await.is_err());
        assert_eq!(std::fs::read_to_string(previous).unwrap(), "<html>old</html>");
    }

    #[tokio::test]
    async fn test_export_refuses_output_containing_data() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), DOC).unwrap();
        let config = config.with_output_dir(root.path().to_path_buf());

        let err = SiteGenerator::new(config).generate().await.unwrap_err();
        assert!(err.to_string().contains("overlaps"));
        assert!(root.path().join("data/cv.en.json").exists());
        assert!(root.path().join("public/images/logo.png").exists());
    }

    #[tokio::test]
    async fn test_export_refuses_output_inside_public() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), DOC).unwrap();
        let config = config.with_output_dir(root.path().join("public/site"));

        assert!(SiteGenerator::new(config).generate().await.is_err());
        assert!(!root.path().join("public/site").exists());
        assert!(root.path().join("public/images/logo.png").exists());
    }

    #[tokio::test]
    async fn test_check_documents_lists_failures() {
        let (root, config) = workspace();
        std::fs::write(root.path().join("data/cv.en.json"), DOC).unwrap();
        std::fs::write(root.path().join("data/cv.es.json"), "{}").unwrap();

        let failures = check_documents(&DocumentStore::new(config.data_dir_absolute())).await;
        let locales: Vec<_> = failures.iter().map(|(l, _)| *l).collect();
        assert_eq!(locales, vec![Locale::Es, Locale::Fr]);
    }
}
