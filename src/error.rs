// src/error.rs
//! Domain errors. Both variants surface to visitors as the same not-found page.

use std::path::PathBuf;
use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Requested locale is not one of en, es, fr
    #[error("unsupported locale '{code}'")]
    UnsupportedLocale { code: String },

    /// Document file is missing, unreadable, malformed or fails validation
    #[error("CV document for '{locale}' unavailable at {path}: {reason}")]
    DocumentUnavailable {
        locale: String,
        path: PathBuf,
        reason: String,
    },
}

impl SiteError {
    pub fn unsupported(code: &str) -> Self {
        Self::UnsupportedLocale {
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_locale_display() {
        let err = SiteError::unsupported("de");
        assert_eq!(err.to_string(), "unsupported locale 'de'");
    }

    #[test]
    fn test_document_unavailable_display() {
        let err = SiteError::DocumentUnavailable {
            locale: "fr".to_string(),
            path: PathBuf::from("data/cv.fr.json"),
            reason: "missing field `name`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CV document for 'fr' unavailable at data/cv.fr.json: missing field `name`"
        );
    }
}
