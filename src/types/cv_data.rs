// src/types/cv_data.rs
//! CV document schema, one JSON file per locale

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Document =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDocument {
    pub name: String,
    pub title: String,
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub other_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: Option<String>,
    pub period: String,
    pub location: String,
    pub description: Option<Description>,
}

/// Free text or a bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Block(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<Skill>,
    pub soft: Option<Vec<Skill>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    /// Proficiency as written, e.g. "Native" or "Full Professional (C1)"
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub year: Option<Year>,
    pub link: Option<String>,
    pub pdf_file: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub year: Year,
}

/// Years are written both as `2023` and `"2019 - 2021"` in the sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

// ===== Validation =====

pub const MAX_LEVEL: u8 = 100;

impl CvDocument {
    /// Checks what serde cannot express: non-blank name, skill levels within 0..=100.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("field `name` is blank".to_string());
        }

        let soft = self.skills.soft.as_deref().unwrap_or_default();
        for skill in self.skills.technical.iter().chain(soft) {
            if skill.level > MAX_LEVEL {
                return Err(format!(
                    "skill '{}' has level {} (expected 0-{})",
                    skill.name, skill.level, MAX_LEVEL
                ));
            }
        }

        Ok(())
    }

    /// Parse and validate a document from JSON text.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let document: CvDocument = serde_json::from_str(content).map_err(|e| e.to_string())?;
        document.validate()?;
        Ok(document)
    }
}
