pub mod logging;

pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod generator;
pub mod locale;
pub mod navigation;
pub mod render;
pub mod store;
pub mod switcher;
pub mod title;
pub mod types;
pub mod web;

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use generator::{ExportReport, SiteGenerator};
pub use locale::{detect_locale, resolve, Locale, LocaleCopy, SUPPORTED_LOCALES};
pub use render::{render, render_page, SectionId, SectionRenderer};
pub use store::DocumentStore;
pub use web::{build_rocket, start_web_server};
