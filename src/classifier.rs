// src/classifier.rs
//! Lookups from free-text CV fields to presentation assets.
//!
//! Every function here is total: unknown input yields `None` or a documented
//! default, never an error. Tables are checked top to bottom and matching is a
//! case-insensitive substring test unless stated otherwise.

use crate::types::Publication;

/// Relative path of a static asset under the public directory.
pub type AssetRef = &'static str;

/// Flag-icon country code.
pub type CountryCode = &'static str;

pub const DEFAULT_FLAG: CountryCode = "gb";
pub const DEFAULT_PROFICIENCY: u8 = 80;

// ===== Organizations =====

const ORGANIZATION_LOGOS: &[(&[&str], AssetRef)] = &[
    (&["icmpd"], "images/icmpd-logo.png"),
    (&["ilo", "international labour"], "images/ilo-logo.png"),
    (&["unicef"], "images/unicef-logo.png"),
    (&["housing", "vivienda"], "images/ministry-housing-peru-logo.jpg"),
    (
        &["economy", "finance", "economía"],
        "images/ministry-finance-peru-logo.jpg",
    ),
    (
        &["education", "educación"],
        "images/ministry-education-peru-logo.jpg",
    ),
];

fn first_match<T: Copy>(text: &str, table: &[(&[&str], T)]) -> Option<T> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(terms, _)| terms.iter().any(|term| lower.contains(term)))
        .map(|(_, value)| *value)
}

pub fn organization_logo(name: &str) -> Option<AssetRef> {
    if name.is_empty() {
        return None;
    }
    first_match(name, ORGANIZATION_LOGOS)
}

// ===== Institutions =====

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Institution {
    pub logo: AssetRef,
    pub website: &'static str,
}

const INSTITUTIONS: &[(&[&str], Institution)] = &[
    (
        &["hertie"],
        Institution {
            logo: "images/hertie-school.png",
            website: "https://www.hertie-school.org/",
        },
    ),
    (
        &["pacifico"],
        Institution {
            logo: "images/universidad-del-pacifico.png",
            website: "https://www.up.edu.pe/",
        },
    ),
];

/// Logo and website of a known school; both or neither.
pub fn institution_logo(name: &str) -> Option<Institution> {
    first_match(name, INSTITUTIONS)
}

// ===== Languages =====

const FLAGS: &[(&[&str], CountryCode)] = &[
    (&["english", "anglais", "inglés"], "gb"),
    (&["spanish", "espanol", "español", "castilian"], "es"),
    (&["french", "français", "francés"], "fr"),
];

pub fn flag_for(language_name: &str) -> CountryCode {
    first_match(language_name, FLAGS).unwrap_or(DEFAULT_FLAG)
}

/// Highest proficiency first: a label is scored by the first row it matches.
const PROFICIENCY: &[(&[&str], u8)] = &[
    (&["native", "nativ"], 100),
    (
        &[
            "full professional",
            "professionnel complet",
            "profesional completo",
            "c1",
        ],
        95,
    ),
    (
        &[
            "professional working",
            "compétence professionnelle",
            "competencia profesional",
            "b1",
        ],
        85,
    ),
    (&["a2"], 70),
];

/// Bar width (0..=100) for a free-text proficiency label.
pub fn proficiency_level(label: &str) -> u8 {
    first_match(label, PROFICIENCY).unwrap_or(DEFAULT_PROFICIENCY)
}

// ===== Publications =====

const THUMBNAILS: &[(&str, AssetRef)] = &[
    (
        "impact_ai_digitalisation_indigenous_communities_2025",
        "images/publications/ai_indigenous_communities_2025.png",
    ),
    (
        "forging_just_transition_green_jobs_2023",
        "images/publications/gsp_report_2023.png",
    ),
    (
        "women_participation_politics_care_policies_latin_america_2023",
        "images/publications/women_participation_politics_2023.png",
    ),
    (
        "nuevas_herramientas_analizar_territorio_peruano_2021",
        "images/publications/territory_analysis_peru_2021.png",
    ),
    (
        "reporte_brechas_relevancias_centros_poblados_rurales_2021",
        "images/publications/rural_centers_report_2021.png",
    ),
];

/// Slugs are matched as written, so this lookup is case-sensitive.
pub fn thumbnail_for(publication: &Publication) -> Option<AssetRef> {
    let file = publication.pdf_file.as_deref()?;
    THUMBNAILS
        .iter()
        .find(|(slug, _)| file.contains(slug))
        .map(|(_, thumb)| *thumb)
}

pub fn publication_pdf(publication: &Publication) -> Option<String> {
    publication
        .pdf_file
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(|f| format!("publications/{}", f))
}

// ===== Awards =====

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AwardVisual {
    /// Certificate PDF shown through a thumbnail.
    Document {
        pdf: AssetRef,
        thumbnail: AssetRef,
    },
    /// Granting body's logo linking to its site.
    Logo {
        src: AssetRef,
        link: &'static str,
        large: bool,
    },
}

const GOOD_PRACTICES: AwardVisual = AwardVisual::Document {
    pdf: "awards/good-practices-award-2019.pdf",
    thumbnail: "images/awards/good-practices-award-thumbnail.png",
};

const HERTIE: AwardVisual = AwardVisual::Logo {
    src: "images/hertie-school.png",
    link: "https://www.hertie-school.org/",
    large: false,
};

const UN_GENEVA: AwardVisual = AwardVisual::Logo {
    src: "images/un-geneva-logo.png",
    link: "https://www.ungeneva.org/",
    large: true,
};

pub fn award_visual(title: &str) -> Option<AwardVisual> {
    let lower = title.to_lowercase();
    if lower.contains("good practices") || lower.contains("buenas prácticas") {
        Some(GOOD_PRACTICES)
    } else if lower.contains("hertie") {
        Some(HERTIE)
    } else if lower.contains("geneva") || has_word(&lower, "un") {
        Some(UN_GENEVA)
    } else {
        None
    }
}

/// Whole-word test; "un" must not fire on "fund" or "university".
fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}
