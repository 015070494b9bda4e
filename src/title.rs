// src/title.rs
//! Two-line layout of the headline title. Display only; data is untouched.

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLines {
    pub first: String,
    pub second: Option<String>,
}

impl TitleLines {
    fn single(title: &str) -> Self {
        Self {
            first: title.to_string(),
            second: None,
        }
    }
}

struct Marker {
    locale: Locale,
    word: &'static str,
    /// At least one must appear in the title for the marker to apply; empty means always.
    requires: &'static [&'static str],
}

const MARKERS: [Marker; 3] = [
    Marker {
        locale: Locale::En,
        word: "for",
        requires: &[],
    },
    Marker {
        locale: Locale::Es,
        word: "en",
        requires: &["Migración", "Social"],
    },
    Marker {
        locale: Locale::Fr,
        word: "pour",
        requires: &["migration", "sociale"],
    },
];

impl Marker {
    fn separator(&self) -> String {
        format!(" {} ", self.word)
    }

    fn applies(&self, title: &str) -> bool {
        title.contains(&self.separator())
            && (self.requires.is_empty() || self.requires.iter().any(|r| title.contains(r)))
    }
}

/// Split a compound job title at its locale conjunction.
///
/// The locale's own marker is tried first, then the others in en, es, fr
/// order. Before the marker, " | " segments decide the break: two segments
/// put the first on line one, three or more keep the first two there.
pub fn split_title(title: &str, locale: Locale) -> TitleLines {
    let ordered = MARKERS
        .iter()
        .filter(|m| m.locale == locale)
        .chain(MARKERS.iter().filter(|m| m.locale != locale));

    for marker in ordered {
        if marker.applies(title) {
            return split_at(title, marker);
        }
    }

    TitleLines::single(title)
}

fn split_at(title: &str, marker: &Marker) -> TitleLines {
    let separator = marker.separator();
    // everything after the first marker belongs to line two
    let (before, after) = title
        .split_once(separator.as_str())
        .unwrap_or((title, ""));

    let segments: Vec<&str> = before.split(" | ").collect();
    if segments.len() >= 2 {
        // at most two segments stay on line one, at least one moves down
        let head = segments.len().min(3) - 1;
        TitleLines {
            first: segments[..head].join(" | "),
            second: Some(format!(
                "{}{}{}",
                segments[head..].join(" | "),
                separator,
                after
            )),
        }
    } else {
        TitleLines {
            first: before.to_string(),
            second: Some(format!("{} {}", marker.word, after)),
        }
    }
}
