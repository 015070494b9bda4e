// src/navigation.rs
//! Section navigation bar: which section is in view, and jumping to one.
//!
//! The browser reports intersections; this type decides what they mean. The
//! page writer binds the same registered ids and threshold into the page
//! script so both sides agree.

use crate::locale::LocaleCopy;
use crate::render::SectionId;

/// Fraction of a section that must be visible before it becomes active.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// One viewport observation for a section element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<'a> {
    pub id: &'a str,
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Scroll so the target's top meets the viewport top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub block: ScrollBlock,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub title: &'static str,
    pub tooltip: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationOverlay {
    copy: LocaleCopy,
    registered: Vec<SectionId>,
    active: Option<SectionId>,
}

impl NavigationOverlay {
    /// Only sections present on the page are registered; absent ones
    /// (e.g. no publications) never show up in the bar.
    pub fn new(copy: LocaleCopy, present: &[SectionId]) -> Self {
        let registered = SectionId::ALL
            .into_iter()
            .filter(|id| present.contains(id))
            .collect();
        Self {
            copy,
            registered,
            active: None,
        }
    }

    pub fn registered(&self) -> &[SectionId] {
        &self.registered
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Apply a batch of observations in delivery order; the last qualifying
    /// one wins. Returns the active section afterwards.
    pub fn observe(&mut self, entries: &[Intersection<'_>]) -> Option<SectionId> {
        for entry in entries {
            if !entry.intersecting || entry.ratio < VISIBILITY_THRESHOLD {
                continue;
            }
            if let Some(id) = SectionId::from_dom_id(entry.id) {
                if self.registered.contains(&id) {
                    self.active = Some(id);
                }
            }
        }
        self.active
    }

    pub fn go_to(&self, id: SectionId) -> Option<ScrollRequest> {
        self.registered.contains(&id).then_some(ScrollRequest {
            target: id,
            block: ScrollBlock::Start,
            behavior: ScrollBehavior::Smooth,
        })
    }

    pub fn items(&self) -> Vec<NavItem> {
        self.registered
            .iter()
            .map(|&id| {
                let title = id.nav_title(&self.copy);
                NavItem {
                    id,
                    title,
                    tooltip: format!("{} {}", self.copy.go_to, title),
                    active: self.active == Some(id),
                }
            })
            .collect()
    }
}
