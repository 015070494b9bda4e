// src/switcher.rs
//! Language switcher: the locale list and the equivalent path in another locale.

use crate::error::SiteResult;
use crate::locale::{Locale, SUPPORTED_LOCALES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub locale: Locale,
    pub label: &'static str,
    pub flag: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleSwitch {
    current: Locale,
}

impl LocaleSwitch {
    pub fn new(current: Locale) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn options(&self) -> Vec<LocaleOption> {
        SUPPORTED_LOCALES
            .into_iter()
            .map(|locale| LocaleOption {
                locale,
                label: locale.label(),
                flag: locale.flag(),
                selected: locale == self.current,
            })
            .collect()
    }

    /// Path of the same page in `code`: the first path segment is replaced.
    pub fn select(&self, path: &str, code: &str) -> SiteResult<String> {
        let target = Locale::parse(code)?;
        Ok(replace_locale_segment(path, target))
    }

    /// Like [`select`](Self::select) for sites deployed under a sub-path
    /// (e.g. `/online-cv`); the base is kept and only the segment after it changes.
    pub fn select_with_base(&self, path: &str, base_path: &str, code: &str) -> SiteResult<String> {
        let target = Locale::parse(code)?;
        let base = base_path.trim_end_matches('/');
        match path.strip_prefix(base) {
            Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                Ok(format!("{}{}", base, replace_locale_segment(rest, target)))
            }
            _ => Ok(replace_locale_segment(path, target)),
        }
    }
}

fn replace_locale_segment(path: &str, target: Locale) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    // "" before the leading slash sits at index 0
    if segments.len() < 2 {
        segments = vec!["", ""];
    }
    segments[1] = target.code();
    segments.join("/")
}
