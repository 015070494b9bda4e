// src/types/mod.rs
pub mod cv_data;

pub use cv_data::{
    Award, Contact, CvDocument, Description, EducationEntry, ExperienceEntry, LanguageEntry,
    Publication, Skill, Skills, Year,
};
