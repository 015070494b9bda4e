// src/locale.rs
//! Supported locales and their page copy

use crate::error::{SiteError, SiteResult};
use crate::types::CvDocument;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
    Fr,
}

/// Ordered as shown in the language switcher.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Es, Locale::Fr];

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Exact, case-sensitive match on the URL segment.
    pub fn parse(code: &str) -> SiteResult<Self> {
        match code {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            other => Err(SiteError::unsupported(other)),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Name of the language in itself, for the switcher.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "gb",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Es => "es_ES",
            Self::Fr => "fr_FR",
        }
    }

    pub fn copy(self) -> LocaleCopy {
        match self {
            Self::En => EN,
            Self::Es => ES,
            Self::Fr => FR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a URL locale segment to its page copy.
pub fn resolve(code: &str) -> SiteResult<LocaleCopy> {
    Locale::parse(code).map(Locale::copy)
}

/// Best-effort locale inference from the language names listed in a document.
/// Spanish wins over French; anything else is English.
pub fn detect_locale(document: &CvDocument) -> Locale {
    let names: Vec<String> = document
        .languages
        .iter()
        .map(|l| l.name.to_lowercase())
        .collect();
    let listed = |candidates: &[&str]| names.iter().any(|n| candidates.contains(&n.as_str()));

    if listed(&["español", "espanol"]) {
        Locale::Es
    } else if listed(&["français", "francais"]) {
        Locale::Fr
    } else {
        Locale::En
    }
}

// ===== Page copy =====

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyKey {
    Summary,
    Experience,
    OtherExperience,
    Education,
    Skills,
    TechnicalSkills,
    SoftSkills,
    Languages,
    Publications,
    Awards,
    Download,
    NavAbout,
    NavExperience,
    NavOtherExperience,
    NavSkills,
    NavEducation,
    NavPublications,
    NavAwards,
    SwitchLabel,
    GoTo,
}

impl CopyKey {
    pub const ALL: [CopyKey; 20] = [
        CopyKey::Summary,
        CopyKey::Experience,
        CopyKey::OtherExperience,
        CopyKey::Education,
        CopyKey::Skills,
        CopyKey::TechnicalSkills,
        CopyKey::SoftSkills,
        CopyKey::Languages,
        CopyKey::Publications,
        CopyKey::Awards,
        CopyKey::Download,
        CopyKey::NavAbout,
        CopyKey::NavExperience,
        CopyKey::NavOtherExperience,
        CopyKey::NavSkills,
        CopyKey::NavEducation,
        CopyKey::NavPublications,
        CopyKey::NavAwards,
        CopyKey::SwitchLabel,
        CopyKey::GoTo,
    ];
}

/// Localized display strings for one page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocaleCopy {
    pub locale: Locale,
    pub summary: &'static str,
    pub experience: &'static str,
    pub other_experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub technical_skills: &'static str,
    pub soft_skills: &'static str,
    pub languages: &'static str,
    pub publications: &'static str,
    pub awards: &'static str,
    pub download: &'static str,
    pub nav: NavTitles,
    pub switch_label: &'static str,
    pub go_to: &'static str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavTitles {
    pub about: &'static str,
    pub experience: &'static str,
    pub other_experience: &'static str,
    pub skills: &'static str,
    pub education: &'static str,
    pub publications: &'static str,
    pub awards: &'static str,
}

impl LocaleCopy {
    pub fn get(&self, key: CopyKey) -> &'static str {
        match key {
            CopyKey::Summary => self.summary,
            CopyKey::Experience => self.experience,
            CopyKey::OtherExperience => self.other_experience,
            CopyKey::Education => self.education,
            CopyKey::Skills => self.skills,
            CopyKey::TechnicalSkills => self.technical_skills,
            CopyKey::SoftSkills => self.soft_skills,
            CopyKey::Languages => self.languages,
            CopyKey::Publications => self.publications,
            CopyKey::Awards => self.awards,
            CopyKey::Download => self.download,
            CopyKey::NavAbout => self.nav.about,
            CopyKey::NavExperience => self.nav.experience,
            CopyKey::NavOtherExperience => self.nav.other_experience,
            CopyKey::NavSkills => self.nav.skills,
            CopyKey::NavEducation => self.nav.education,
            CopyKey::NavPublications => self.nav.publications,
            CopyKey::NavAwards => self.nav.awards,
            CopyKey::SwitchLabel => self.switch_label,
            CopyKey::GoTo => self.go_to,
        }
    }
}

const EN: LocaleCopy = LocaleCopy {
    locale: Locale::En,
    summary: "About Me",
    experience: "Professional Experience",
    other_experience: "Other Relevant Experience",
    education: "Education",
    skills: "Skills & Languages",
    technical_skills: "What I Bring to the Table",
    soft_skills: "Soft Skills",
    languages: "Languages",
    publications: "Publications",
    awards: "Scholarships, Awards & Further Academic Training",
    download: "Download PDF",
    nav: NavTitles {
        about: "About",
        experience: "Experience",
        other_experience: "Other Experience",
        skills: "Skills",
        education: "Education",
        publications: "Publications",
        awards: "Awards",
    },
    switch_label: "Select language",
    go_to: "Go to",
};

const ES: LocaleCopy = LocaleCopy {
    locale: Locale::Es,
    summary: "Sobre Mí",
    experience: "Experiencia Profesional",
    other_experience: "Otras Experiencias Relevantes",
    education: "Educación",
    skills: "Habilidades e Idiomas",
    technical_skills: "Lo que Aporto",
    soft_skills: "Habilidades Blandas",
    languages: "Idiomas",
    publications: "Publicaciones",
    awards: "Becas, Premios y Formación Académica Adicional",
    download: "Descargar PDF",
    nav: NavTitles {
        about: "Sobre Mí",
        experience: "Experiencia",
        other_experience: "Otras Experiencias",
        skills: "Habilidades",
        education: "Educación",
        publications: "Publicaciones",
        awards: "Premios",
    },
    switch_label: "Seleccionar idioma",
    go_to: "Ir a",
};

const FR: LocaleCopy = LocaleCopy {
    locale: Locale::Fr,
    summary: "À Propos de Moi",
    experience: "Expérience Professionnelle",
    other_experience: "Autres Expériences Pertinentes",
    education: "Éducation",
    skills: "Compétences et Langues",
    technical_skills: "Ce que j'apporte",
    soft_skills: "Compétences Humaines",
    languages: "Langues",
    publications: "Publications",
    awards: "Bourses, Prix et Formation Supplémentaire",
    download: "Télécharger le PDF",
    nav: NavTitles {
        about: "À Propos",
        experience: "Expérience",
        other_experience: "Autres Expériences",
        skills: "Compétences",
        education: "Éducation",
        publications: "Publications",
        awards: "Prix",
    },
    switch_label: "Choisir la langue",
    go_to: "Aller à",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Contact, LanguageEntry, Skills};

    fn document_with_languages(names: &[&str]) -> CvDocument {
        CvDocument {
            name: "Test".to_string(),
            title: "Analyst".to_string(),
            contact: Contact {
                email: String::new(),
                phone: String::new(),
                location: String::new(),
                linkedin: String::new(),
                github: String::new(),
            },
            summary: String::new(),
            experience: vec![],
            other_experience: vec![],
            education: vec![],
            skills: Skills {
                technical: vec![],
                soft: None,
            },
            languages: names
                .iter()
                .map(|n| LanguageEntry {
                    name: n.to_string(),
                    level: "Native".to_string(),
                })
                .collect(),
            publications: vec![],
            awards: vec![],
        }
    }

    #[test]
    fn test_resolve_covers_every_key() {
        for locale in SUPPORTED_LOCALES {
            let copy = resolve(locale.code()).unwrap();
            assert_eq!(copy.locale, locale);
            for key in CopyKey::ALL {
                assert!(
                    !copy.get(key).trim().is_empty(),
                    "{:?} missing for {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_resolve_rejects_other_codes() {
        for code in ["de", "", "EN", "en-US", "english", "pt"] {
            match resolve(code) {
                Err(SiteError::UnsupportedLocale { code: c }) => assert_eq!(c, code),
                other => panic!("expected UnsupportedLocale for {:?}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_localized_headings() {
        assert_eq!(resolve("en").unwrap().experience, "Professional Experience");
        assert_eq!(resolve("es").unwrap().download, "Descargar PDF");
        assert_eq!(resolve("fr").unwrap().languages, "Langues");
    }

    #[test]
    fn test_detect_locale() {
        assert_eq!(
            detect_locale(&document_with_languages(&["Español", "Inglés"])),
            Locale::Es
        );
        assert_eq!(
            detect_locale(&document_with_languages(&["Francais", "Anglais"])),
            Locale::Fr
        );
        assert_eq!(
            detect_locale(&document_with_languages(&["Spanish", "English"])),
            Locale::En
        );
        assert_eq!(detect_locale(&document_with_languages(&[])), Locale::En);
    }

    #[test]
    fn test_detect_locale_prefers_spanish() {
        let doc = document_with_languages(&["Français", "Español"]);
        assert_eq!(detect_locale(&doc), Locale::Es);
    }
}
