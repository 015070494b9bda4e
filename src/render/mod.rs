// src/render/mod.rs
//! Maps one CV document and its locale copy onto the ordered page sections.

pub mod expand;
pub mod html;

pub use expand::ExpandState;

use crate::classifier::{self, AssetRef, AwardVisual, CountryCode, Institution};
use crate::locale::LocaleCopy;
use crate::title::{split_title, TitleLines};
use crate::types::{Contact, CvDocument, Description, ExperienceEntry, Skill};
use std::fmt;

pub const RESUME_PDF: AssetRef = "Resume.pdf";

// ===== Section identity =====

/// DOM ids are part of the page contract; navigation binds to them by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    OtherExperience,
    Skills,
    Education,
    Publications,
    Awards,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::OtherExperience,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Publications,
        SectionId::Awards,
    ];

    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::OtherExperience => "other-experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Publications => "publications",
            Self::Awards => "awards",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }

    pub fn heading(self, copy: &LocaleCopy) -> &'static str {
        match self {
            Self::About => copy.summary,
            Self::Experience => copy.experience,
            Self::OtherExperience => copy.other_experience,
            Self::Skills => copy.skills,
            Self::Education => copy.education,
            Self::Publications => copy.publications,
            Self::Awards => copy.awards,
        }
    }

    pub fn nav_title(self, copy: &LocaleCopy) -> &'static str {
        match self {
            Self::About => copy.nav.about,
            Self::Experience => copy.nav.experience,
            Self::OtherExperience => copy.nav.other_experience,
            Self::Skills => copy.nav.skills,
            Self::Education => copy.nav.education,
            Self::Publications => copy.nav.publications,
            Self::Awards => copy.nav.awards,
        }
    }

    fn toggleable(self) -> bool {
        matches!(self, Self::Experience | Self::OtherExperience)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

// ===== Rendered values =====

#[derive(Debug, Clone)]
pub struct RenderedPage<'a> {
    pub copy: LocaleCopy,
    pub header: PageHeader<'a>,
    pub sections: Vec<Section<'a>>,
}

impl RenderedPage<'_> {
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

#[derive(Debug, Clone)]
pub struct PageHeader<'a> {
    pub name: &'a str,
    pub title: TitleLines,
    pub contact: &'a Contact,
    pub download_label: &'static str,
    pub resume: AssetRef,
}

#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub id: SectionId,
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

#[derive(Debug, Clone)]
pub enum SectionBody<'a> {
    About { summary: &'a str },
    Experience(Vec<ExperienceItem<'a>>),
    Skills(SkillsPanel<'a>),
    Education(Vec<EducationItem<'a>>),
    Publications(Vec<PublicationItem<'a>>),
    Awards(Vec<AwardItem<'a>>),
}

#[derive(Debug, Clone)]
pub struct ExperienceItem<'a> {
    pub index: usize,
    pub entry: &'a ExperienceEntry,
    pub logo: Option<AssetRef>,
    pub expanded: bool,
}

/// Expanded-only part of an experience entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details<'a> {
    Bullets(&'a [String]),
    Block(&'a str),
}

impl<'a> ExperienceItem<'a> {
    /// "Role, Organization" or just the role.
    pub fn heading(&self) -> String {
        match self.entry.organization.as_deref() {
            Some(org) if !org.is_empty() => format!("{}, {}", self.entry.role, org),
            _ => self.entry.role.clone(),
        }
    }

    /// "Period | Location"
    pub fn meta(&self) -> String {
        format!("{} | {}", self.entry.period, self.entry.location)
    }

    /// Description in its display shape, regardless of expand state.
    pub fn details(&self) -> Option<Details<'a>> {
        match self.entry.description.as_ref()? {
            Description::Bullets(items) => Some(Details::Bullets(items.as_slice())),
            Description::Block(text) => Some(Details::Block(text.as_str())),
        }
    }

    /// What the entry shows right now: nothing extra while collapsed.
    pub fn visible_details(&self) -> Option<Details<'a>> {
        if self.expanded {
            self.details()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillsPanel<'a> {
    pub technical_title: &'static str,
    pub technical: Vec<SkillBar<'a>>,
    pub soft_title: &'static str,
    pub soft: Option<Vec<SkillBar<'a>>>,
    pub languages_title: &'static str,
    pub languages: Vec<LanguageBar<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar<'a> {
    pub name: &'a str,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBar<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub flag: CountryCode,
    pub level: u8,
}

#[derive(Debug, Clone)]
pub struct EducationItem<'a> {
    pub degree: &'a str,
    pub institution: &'a str,
    pub period: &'a str,
    pub school: Option<Institution>,
}

#[derive(Debug, Clone)]
pub struct PublicationItem<'a> {
    pub title: &'a str,
    pub year: Option<String>,
    pub link: Option<&'a str>,
    pub pdf: Option<String>,
    pub thumbnail: Option<AssetRef>,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct AwardItem<'a> {
    pub title: &'a str,
    pub year: String,
    pub visual: Option<AwardVisual>,
}

// ===== Renderer =====

/// Renders one document for one page load and owns that page's expand state.
#[derive(Debug, Clone)]
pub struct SectionRenderer<'a> {
    document: &'a CvDocument,
    copy: LocaleCopy,
    experience: ExpandState,
    other_experience: ExpandState,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(document: &'a CvDocument, copy: LocaleCopy) -> Self {
        Self {
            document,
            copy,
            experience: ExpandState::new(),
            other_experience: ExpandState::new(),
        }
    }

    pub fn copy(&self) -> &LocaleCopy {
        &self.copy
    }

    pub fn expand_state(&self, section: SectionId) -> Option<&ExpandState> {
        match section {
            SectionId::Experience => Some(&self.experience),
            SectionId::OtherExperience => Some(&self.other_experience),
            _ => None,
        }
    }

    /// Flip one entry. Returns false when the section has no toggleable
    /// entries or the index is out of range.
    pub fn toggle(&mut self, section: SectionId, index: usize) -> bool {
        if !section.toggleable() {
            return false;
        }
        let (len, state) = match section {
            SectionId::Experience => (self.document.experience.len(), &mut self.experience),
            _ => (
                self.document.other_experience.len(),
                &mut self.other_experience,
            ),
        };
        if index >= len {
            return false;
        }
        state.toggle(index);
        true
    }

    /// Collapse everything, as on a fresh navigation.
    pub fn reset(&mut self) {
        self.experience.clear();
        self.other_experience.clear();
    }

    pub fn page(&self) -> RenderedPage<'a> {
        RenderedPage {
            copy: self.copy,
            header: self.header(),
            sections: self.sections(),
        }
    }

    pub fn header(&self) -> PageHeader<'a> {
        let doc = self.document;
        PageHeader {
            name: &doc.name,
            title: split_title(&doc.title, self.copy.locale),
            contact: &doc.contact,
            download_label: self.copy.download,
            resume: RESUME_PDF,
        }
    }

    pub fn sections(&self) -> Vec<Section<'a>> {
        let doc = self.document;
        let mut sections = Vec::with_capacity(SectionId::ALL.len());

        sections.push(self.section(
            SectionId::About,
            SectionBody::About {
                summary: &doc.summary,
            },
        ));
        sections.push(self.section(
            SectionId::Experience,
            SectionBody::Experience(experience_items(&doc.experience, &self.experience, true)),
        ));
        if !doc.other_experience.is_empty() {
            sections.push(self.section(
                SectionId::OtherExperience,
                SectionBody::Experience(experience_items(
                    &doc.other_experience,
                    &self.other_experience,
                    false,
                )),
            ));
        }
        sections.push(self.section(SectionId::Skills, SectionBody::Skills(self.skills_panel())));
        sections.push(self.section(
            SectionId::Education,
            SectionBody::Education(
                doc.education
                    .iter()
                    .map(|edu| EducationItem {
                        degree: &edu.degree,
                        institution: &edu.institution,
                        period: &edu.period,
                        school: classifier::institution_logo(&edu.institution),
                    })
                    .collect(),
            ),
        ));
        if !doc.publications.is_empty() {
            sections.push(self.section(
                SectionId::Publications,
                SectionBody::Publications(
                    doc.publications
                        .iter()
                        .map(|p| PublicationItem {
                            title: &p.title,
                            year: p.year.as_ref().map(ToString::to_string),
                            link: p.link.as_deref().filter(|l| !l.is_empty()),
                            pdf: classifier::publication_pdf(p),
                            thumbnail: classifier::thumbnail_for(p),
                            description: p.description.as_deref().filter(|d| !d.is_empty()),
                        })
                        .collect(),
                ),
            ));
        }
        if !doc.awards.is_empty() {
            sections.push(self.section(
                SectionId::Awards,
                SectionBody::Awards(
                    doc.awards
                        .iter()
                        .map(|a| AwardItem {
                            title: &a.title,
                            year: a.year.to_string(),
                            visual: classifier::award_visual(&a.title),
                        })
                        .collect(),
                ),
            ));
        }

        sections
    }

    fn section(&self, id: SectionId, body: SectionBody<'a>) -> Section<'a> {
        Section {
            id,
            title: id.heading(&self.copy),
            body,
        }
    }

    fn skills_panel(&self) -> SkillsPanel<'a> {
        let doc = self.document;
        SkillsPanel {
            technical_title: self.copy.technical_skills,
            technical: skill_bars(&doc.skills.technical),
            soft_title: self.copy.soft_skills,
            soft: doc.skills.soft.as_deref().map(skill_bars),
            languages_title: self.copy.languages,
            languages: doc
                .languages
                .iter()
                .map(|lang| LanguageBar {
                    name: &lang.name,
                    label: &lang.level,
                    flag: classifier::flag_for(&lang.name),
                    level: classifier::proficiency_level(&lang.level),
                })
                .collect(),
        }
    }
}

/// Only the main experience list carries organization logos.
fn experience_items<'a>(
    entries: &'a [ExperienceEntry],
    state: &ExpandState,
    with_logos: bool,
) -> Vec<ExperienceItem<'a>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ExperienceItem {
            index,
            entry,
            logo: if with_logos {
                entry
                    .organization
                    .as_deref()
                    .and_then(classifier::organization_logo)
            } else {
                None
            },
            expanded: state.is_expanded(index),
        })
        .collect()
}

fn skill_bars(skills: &[Skill]) -> Vec<SkillBar<'_>> {
    skills
        .iter()
        .map(|s| SkillBar {
            name: &s.name,
            level: s.level.min(crate::types::cv_data::MAX_LEVEL),
        })
        .collect()
}

/// Sections of a freshly loaded page: everything collapsed.
pub fn render<'a>(document: &'a CvDocument, copy: LocaleCopy) -> Vec<Section<'a>> {
    SectionRenderer::new(document, copy).sections()
}

/// Header and sections of a freshly loaded page.
pub fn render_page<'a>(document: &'a CvDocument, copy: LocaleCopy) -> RenderedPage<'a> {
    SectionRenderer::new(document, copy).page()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{resolve, Locale};
    use crate::types::{Award, Publication, Year};
    use serde_json::json;

    fn document() -> CvDocument {
        serde_json::from_value(json!({
            "name": "Lucía Ramos",
            "title": "Data & Policy Analyst | Digital Innovation for Migration & Social Protection",
            "contact": {
                "email": "lucia@example.org",
                "phone": "+49 000 000",
                "location": "Berlin, Germany",
                "linkedin": "https://www.linkedin.com/in/example",
                "github": "https://github.com/example"
            },
            "summary": "Analyst working on migration data.",
            "experience": [
                {
                    "role": "Data Analyst",
                    "organization": "ICMPD",
                    "period": "2023 - Present",
                    "location": "Vienna",
                    "description": ["Built dashboards", "Ran surveys"]
                },
                {
                    "role": "Consultant",
                    "organization": "UNICEF",
                    "period": "2021 - 2022",
                    "location": "Lima",
                    "description": "Evaluated programmes."
                },
                {
                    "role": "Intern",
                    "period": "2020",
                    "location": "Lima"
                }
            ],
            "other_experience": [],
            "education": [
                { "degree": "MPP", "institution": "Hertie School", "period": "2022 - 2024" }
            ],
            "skills": {
                "technical": [{ "name": "R", "level": 90 }],
                "soft": [{ "name": "Facilitation", "level": 85 }]
            },
            "languages": [
                { "name": "Spanish", "level": "Native" },
                { "name": "English", "level": "Full Professional (C1)" }
            ],
            "publications": [],
            "awards": []
        }))
        .unwrap()
    }

    fn ids(sections: &[Section<'_>]) -> Vec<&'static str> {
        sections.iter().map(|s| s.id.dom_id()).collect()
    }

    fn experience_of<'s, 'a>(sections: &'s [Section<'a>], id: SectionId) -> &'s [ExperienceItem<'a>] {
        match &sections.iter().find(|s| s.id == id).unwrap().body {
            SectionBody::Experience(items) => items,
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_optional_sections_are_omitted_when_empty() {
        let doc = document();
        let sections = render(&doc, resolve("en").unwrap());
        assert_eq!(ids(&sections), vec!["about", "experience", "skills", "education"]);
    }

    #[test]
    fn test_publications_rendered_in_source_order() {
        let mut doc = document();
        doc.publications = ["First", "Second", "Third"]
            .iter()
            .map(|t| Publication {
                title: t.to_string(),
                year: Some(Year::Number(2023)),
                link: None,
                pdf_file: None,
                description: None,
            })
            .collect();
        doc.awards.push(Award {
            title: "Hertie School Scholarship".to_string(),
            year: Year::Text("2022".to_string()),
        });

        let sections = render(&doc, resolve("en").unwrap());
        assert_eq!(
            ids(&sections),
            vec!["about", "experience", "skills", "education", "publications", "awards"]
        );
        match &sections[4].body {
            SectionBody::Publications(items) => {
                let titles: Vec<_> = items.iter().map(|p| p.title).collect();
                assert_eq!(titles, vec!["First", "Second", "Third"]);
                assert_eq!(items[0].year.as_deref(), Some("2023"));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_all_entries_start_collapsed() {
        let doc = document();
        let sections = render(&doc, resolve("en").unwrap());
        let items = experience_of(&sections, SectionId::Experience);
        assert!(items.iter().all(|i| !i.expanded && i.visible_details().is_none()));
    }

    #[test]
    fn test_toggle_isolated_and_idempotent() {
        let doc = document();
        let mut renderer = SectionRenderer::new(&doc, resolve("en").unwrap());

        assert!(renderer.toggle(SectionId::Experience, 2));
        let sections = renderer.sections();
        let items = experience_of(&sections, SectionId::Experience);
        assert!(!items[0].expanded);
        assert!(!items[1].expanded);
        assert!(items[2].expanded);
        // no description on entry 2: expanded but nothing extra to show
        assert_eq!(items[2].visible_details(), None);

        assert!(renderer.toggle(SectionId::Experience, 2));
        assert_eq!(
            renderer.expand_state(SectionId::Experience),
            Some(&ExpandState::new())
        );
    }

    #[test]
    fn test_expanded_details_shape() {
        let doc = document();
        let mut renderer = SectionRenderer::new(&doc, resolve("en").unwrap());
        renderer.toggle(SectionId::Experience, 0);
        renderer.toggle(SectionId::Experience, 1);
        let sections = renderer.sections();
        let items = experience_of(&sections, SectionId::Experience);
        let bullets = vec!["Built dashboards".to_string(), "Ran surveys".to_string()];

        assert_eq!(
            items[0].visible_details(),
            Some(Details::Bullets(&bullets))
        );
        assert_eq!(
            items[1].visible_details(),
            Some(Details::Block("Evaluated programmes."))
        );
    }

    #[test]
    fn test_toggle_rejects_invalid_targets() {
        let doc = document();
        let mut renderer = SectionRenderer::new(&doc, resolve("en").unwrap());
        assert!(!renderer.toggle(SectionId::Skills, 0));
        assert!(!renderer.toggle(SectionId::Experience, 3));
        assert!(!renderer.toggle(SectionId::OtherExperience, 0));
    }

    #[test]
    fn test_reset_collapses_everything() {
        let doc = document();
        let mut renderer = SectionRenderer::new(&doc, resolve("en").unwrap());
        renderer.toggle(SectionId::Experience, 1);
        renderer.reset();
        assert_eq!(
            renderer.expand_state(SectionId::Experience),
            Some(&ExpandState::new())
        );
    }

    #[test]
    fn test_derived_fields() {
        let doc = document();
        let renderer = SectionRenderer::new(&doc, resolve("en").unwrap());
        let sections = renderer.sections();

        let items = experience_of(&sections, SectionId::Experience);
        assert_eq!(items[0].logo, Some("images/icmpd-logo.png"));
        assert_eq!(items[0].heading(), "Data Analyst, ICMPD");
        assert_eq!(items[2].heading(), "Intern");
        assert_eq!(items[2].meta(), "2020 | Lima");

        let skills = sections.iter().find(|s| s.id == SectionId::Skills).unwrap();
        match &skills.body {
            SectionBody::Skills(panel) => {
                assert_eq!(panel.technical_title, "What I Bring to the Table");
                assert_eq!(panel.languages[0].flag, "es");
                assert_eq!(panel.languages[0].level, 100);
                assert_eq!(panel.languages[1].level, 95);
                assert_eq!(panel.soft.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("unexpected body {:?}", other),
        }

        let education = sections.iter().find(|s| s.id == SectionId::Education).unwrap();
        match &education.body {
            SectionBody::Education(items) => {
                assert_eq!(
                    items[0].school.map(|s| s.website),
                    Some("https://www.hertie-school.org/")
                );
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_header_uses_locale_copy() {
        let doc = document();
        let page = render_page(&doc, Locale::Es.copy());
        assert_eq!(page.header.download_label, "Descargar PDF");
        assert_eq!(page.header.title.first, "Data & Policy Analyst");
        assert_eq!(page.sections[0].title, "Sobre Mí");
    }

    #[test]
    fn test_dom_id_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(id.dom_id()), Some(id));
        }
        assert_eq!(SectionId::from_dom_id("contact"), None);
    }
}
