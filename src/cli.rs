// src/cli.rs
use crate::app_log;
use crate::config::SiteConfig;
use crate::environment::EnvironmentConfig;
use crate::generator::{check_documents, SiteGenerator};
use crate::store::DocumentStore;
use crate::web::start_web_server;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cv-site")]
#[command(about = "Multilingual CV and portfolio site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the static site (one page per locale) to the output directory
    Export {
        #[command(flatten)]
        paths: PathArgs,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Sub-path the site is deployed under, e.g. /online-cv
        #[arg(long)]
        base_path: Option<String>,
        /// Public URL of the deployed site, written to og:url
        #[arg(long)]
        site_url: Option<String>,
    },
    /// Serve the site over HTTP
    Serve {
        #[command(flatten)]
        paths: PathArgs,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        base_path: Option<String>,
    },
    /// Validate every locale's CV document
    Check {
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// Directory holding cv.<lang>.json
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// Static assets copied or served as-is
    #[arg(long)]
    pub public: Option<PathBuf>,
}

impl PathArgs {
    fn apply(self, mut config: SiteConfig) -> SiteConfig {
        if let Some(dir) = self.data {
            config = config.with_data_dir(dir);
        }
        if let Some(dir) = self.public {
            config = config.with_public_dir(dir);
        }
        config
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = SiteConfig::from_environment(EnvironmentConfig::load()?);

    match cli.command {
        Command::Export {
            paths,
            output,
            base_path,
            site_url,
        } => {
            let mut config = paths.apply(config);
            if let Some(dir) = output {
                config = config.with_output_dir(dir);
            }
            if let Some(base) = base_path {
                config = config.with_base_path(&base);
            }
            if let Some(url) = site_url {
                config = config.with_site_url(url);
            }

            let report = SiteGenerator::new(config).generate().await?;
            for (locale, reason) in &report.skipped {
                app_log!(warn, "❌ Skipped {}: {}", locale, reason);
            }
            app_log!(
                info,
                "✅ Site written to {} ({} asset file(s))",
                report.output_dir.display(),
                report.assets_copied
            );
        }

        Command::Serve {
            paths,
            port,
            base_path,
        } => {
            let mut config = paths.apply(config);
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(base) = base_path {
                config = config.with_base_path(&base);
            }
            start_web_server(config).await?;
        }

        Command::Check { data } => {
            let config = PathArgs { data, public: None }.apply(config);
            let store = DocumentStore::new(config.data_dir_absolute());
            let failures = check_documents(&store).await;

            if failures.is_empty() {
                app_log!(info, "✅ All CV documents are valid");
            } else {
                for (locale, reason) in &failures {
                    app_log!(error, "❌ {}: {}", locale, reason);
                }
                anyhow::bail!("{} CV document(s) failed validation", failures.len());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_arguments() {
        let cli = Cli::parse_from([
            "cv-site",
            "export",
            "--data",
            "fixtures",
            "--output",
            "dist",
            "--base-path",
            "/online-cv",
            "--site-url",
            "https://example.org/online-cv",
        ]);
        match cli.command {
            Command::Export {
                paths,
                output,
                base_path,
                site_url,
            } => {
                assert_eq!(paths.data, Some(PathBuf::from("fixtures")));
                assert_eq!(output, Some(PathBuf::from("dist")));
                assert_eq!(base_path.as_deref(), Some("/online-cv"));
                assert_eq!(site_url.as_deref(), Some("https://example.org/online-cv"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_log_file_is_global() {
        let cli = Cli::parse_from(["cv-site", "serve", "--port", "9000", "--log-file", "/tmp/cv.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/cv.log")));
        assert!(matches!(cli.command, Command::Serve { port: Some(9000), .. }));
    }

    #[test]
    fn test_path_args_override_config() {
        let config = PathArgs {
            data: Some(PathBuf::from("/srv/data")),
            public: None,
        }
        .apply(SiteConfig::new());
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert!(config.public_dir.ends_with("public"));
    }
}
