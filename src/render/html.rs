// src/render/html.rs
//! HTML page writer.
//!
//! The page shell is a `{{var}}` template filled from a variable map; section
//! markup is built with `format!` and every piece of document text goes
//! through [`escape`].

use std::collections::HashMap;
use std::fmt::Write as _;

use super::{
    render_page, AwardItem, Details, EducationItem, ExperienceItem, PageHeader,
    PublicationItem, RenderedPage, Section, SectionBody, SkillBar, SkillsPanel,
};
use crate::classifier::AwardVisual;
use crate::locale::Locale;
use crate::navigation::{NavigationOverlay, VISIBILITY_THRESHOLD};
use crate::switcher::LocaleSwitch;
use crate::types::CvDocument;

/// Deployment facts the markup needs but the document does not carry.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Prefix for every site-relative URL, e.g. "" or "/online-cv".
    pub base_path: String,
    /// Public URL of the site, used for Open Graph tags when set.
    pub site_url: Option<String>,
    pub year: i32,
}

impl PageContext {
    pub fn new(base_path: &str, site_url: Option<String>, year: i32) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            site_url,
            year,
        }
    }

    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }

    pub fn locale_root(&self, locale: Locale) -> String {
        format!("{}/{}/", self.base_path, locale.code())
    }
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Substitute `{{key}}` placeholders in one pass over the template.
/// Inserted values are never scanned again; unknown keys stay as written.
pub fn fill(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let key = &after_open[..end];
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Full page for a freshly loaded document: all entries collapsed.
pub fn document_page(document: &CvDocument, locale: Locale, ctx: &PageContext) -> String {
    write_page(&render_page(document, locale.copy()), ctx)
}

pub fn write_page(page: &RenderedPage<'_>, ctx: &PageContext) -> String {
    let locale = page.copy.locale;
    let nav = NavigationOverlay::new(page.copy, &page.section_ids());
    let switch = LocaleSwitch::new(locale);

    let body = page
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| write_section(section, i, ctx))
        .collect::<Vec<_>>()
        .join("\n");

    let page_title = format!("{} – CV & Portfolio", page.header.name);
    let description = page.header.title.first.clone()
        + &page
            .header
            .title
            .second
            .as_deref()
            .map(|s| format!(" {}", s))
            .unwrap_or_default();

    let mut vars = HashMap::new();
    vars.insert("lang", locale.code().to_string());
    vars.insert("title", escape(&page_title));
    vars.insert("description", escape(&description));
    vars.insert("og_locale", locale.og_locale().to_string());
    vars.insert("og_url", og_url(ctx, locale));
    vars.insert("favicon", ctx.asset("favicon.svg"));
    vars.insert("style", STYLE.to_string());
    vars.insert("nav", write_nav(&nav));
    vars.insert("switcher", write_switcher(&switch, ctx));
    vars.insert("header", write_header(&page.header, ctx));
    vars.insert("sections", body);
    vars.insert(
        "footer",
        format!("&copy; {} {}", ctx.year, escape(page.header.name)),
    );
    vars.insert("script", write_script(&nav));

    fill(PAGE_TEMPLATE, &vars)
}

fn og_url(ctx: &PageContext, locale: Locale) -> String {
    match &ctx.site_url {
        Some(url) => format!(
            r#"<meta property="og:url" content="{}/{}/" />"#,
            escape(url.trim_end_matches('/')),
            locale.code()
        ),
        None => String::new(),
    }
}

fn write_nav(nav: &NavigationOverlay) -> String {
    let mut out = String::from(r#"<nav class="section-nav"><ul>"#);
    for item in nav.items() {
        let _ = write!(
            out,
            r#"<li><button type="button" data-nav="{id}" class="{class}" title="{tooltip}">{title}</button></li>"#,
            id = item.id.dom_id(),
            class = if item.active { "active" } else { "" },
            tooltip = escape(&item.tooltip),
            title = escape(item.title),
        );
    }
    out.push_str("</ul></nav>");
    out
}

fn write_switcher(switch: &LocaleSwitch, ctx: &PageContext) -> String {
    let copy = switch.current().copy();
    let mut out = format!(
        r#"<div class="locale-switch"><select id="locale-switch" aria-label="{}" data-base="{}">"#,
        escape(copy.switch_label),
        escape(&ctx.base_path)
    );
    for option in switch.options() {
        let _ = write!(
            out,
            r#"<option value="{code}" data-flag="{flag}"{selected}>{label}</option>"#,
            code = option.locale.code(),
            flag = option.flag,
            selected = if option.selected { " selected" } else { "" },
            label = escape(option.label),
        );
    }
    out.push_str("</select></div>");
    out
}

fn write_header(header: &PageHeader<'_>, ctx: &PageContext) -> String {
    let second = header
        .title
        .second
        .as_deref()
        .map(|line| format!("<div>{}</div>", escape(line)))
        .unwrap_or_default();
    let contact = header.contact;

    format!(
        r#"<header class="hero">
  <h1>{name}</h1>
  <h2><div>{first}</div>{second}</h2>
  <div class="contact">
    <span>{location}</span>
    <a href="mailto:{email}">{email}</a>
    <a href="{linkedin}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn Profile">LinkedIn</a>
    <a href="{github}" target="_blank" rel="noopener noreferrer" aria-label="GitHub Profile">GitHub</a>
  </div>
  <a class="download" href="{resume}" target="_blank" rel="noopener noreferrer">{download}</a>
</header>"#,
        name = escape(header.name),
        first = escape(&header.title.first),
        second = second,
        location = escape(&contact.location),
        email = escape(&contact.email),
        linkedin = escape(&contact.linkedin),
        github = escape(&contact.github),
        resume = ctx.asset(header.resume),
        download = escape(header.download_label),
    )
}

fn write_section(section: &Section<'_>, position: usize, ctx: &PageContext) -> String {
    let inner = match &section.body {
        SectionBody::About { summary } => format!(r#"<p class="summary">{}</p>"#, escape(summary)),
        SectionBody::Experience(items) => write_experience(items, ctx),
        SectionBody::Skills(panel) => write_skills(panel),
        SectionBody::Education(items) => write_education(items, ctx),
        SectionBody::Publications(items) => write_publications(items, ctx),
        SectionBody::Awards(items) => write_awards(items, ctx),
    };
    // alternate backgrounds down the page
    let tone = if position % 2 == 0 { "tint" } else { "plain" };

    format!(
        r#"<section id="{id}" class="{tone}"><div class="wrap"><h3><span>{title}</span></h3>
{inner}
</div></section>"#,
        id = section.id.dom_id(),
        tone = tone,
        title = escape(section.title),
        inner = inner,
    )
}

fn write_experience(items: &[ExperienceItem<'_>], ctx: &PageContext) -> String {
    let mut out = String::from(r#"<ul class="experience">"#);
    for item in items {
        let logo = item
            .logo
            .map(|src| {
                format!(
                    r#"<img class="logo" src="{}" alt="{} logo" />"#,
                    ctx.asset(src),
                    escape(item.entry.organization.as_deref().unwrap_or_default())
                )
            })
            .unwrap_or_default();
        let details = match item.details() {
            Some(Details::Bullets(lines)) => format!(
                "<ul class=\"bullets\">{}</ul>",
                lines
                    .iter()
                    .map(|l| format!("<li>{}</li>", escape(l)))
                    .collect::<String>()
            ),
            Some(Details::Block(text)) => format!(r#"<div class="block">{}</div>"#, escape(text)),
            None => String::new(),
        };
        let _ = write!(
            out,
            r#"<li><details data-index="{index}"{open}><summary>{logo}<div><div class="role">{heading}</div><div class="meta">{meta}</div></div></summary>{details}</details></li>"#,
            index = item.index,
            open = if item.expanded { " open" } else { "" },
            logo = logo,
            heading = escape(&item.heading()),
            meta = escape(&item.meta()),
            details = details,
        );
    }
    out.push_str("</ul>");
    out
}

fn write_bars(bars: &[SkillBar<'_>]) -> String {
    bars.iter()
        .map(|bar| {
            format!(
                r#"<div class="skill"><span>{}</span><div class="bar"><div style="width: {}%"></div></div></div>"#,
                escape(bar.name),
                bar.level
            )
        })
        .collect()
}

fn write_skills(panel: &SkillsPanel<'_>) -> String {
    let soft = panel
        .soft
        .as_ref()
        .map(|bars| {
            format!(
                "<div><h4>{}</h4>{}</div>",
                escape(panel.soft_title),
                write_bars(bars)
            )
        })
        .unwrap_or_default();
    let languages: String = panel
        .languages
        .iter()
        .map(|lang| {
            format!(
                r#"<div class="language"><span class="fi fi-{flag} circular"></span><span title="{label}">{name}</span><div class="bar"><div style="width: {level}%"></div></div></div>"#,
                flag = lang.flag,
                label = escape(lang.label),
                name = escape(lang.name),
                level = lang.level,
            )
        })
        .collect();

    format!(
        r#"<div class="skills"><div><h4>{}</h4>{}</div>{}</div>
<div class="languages"><h4>{}</h4>{}</div>"#,
        escape(panel.technical_title),
        write_bars(&panel.technical),
        soft,
        escape(panel.languages_title),
        languages
    )
}

fn write_education(items: &[EducationItem<'_>], ctx: &PageContext) -> String {
    let mut out = String::from(r#"<ul class="education">"#);
    for item in items {
        let (logo, institution) = match item.school {
            Some(school) => (
                format!(
                    r#"<a href="{url}" target="_blank" rel="noopener noreferrer"><img class="logo" src="{src}" alt="{name} logo" /></a>"#,
                    url = school.website,
                    src = ctx.asset(school.logo),
                    name = escape(item.institution),
                ),
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    school.website,
                    escape(item.institution)
                ),
            ),
            None => (String::new(), escape(item.institution)),
        };
        let _ = write!(
            out,
            r#"<li>{logo}<div><div class="degree">{degree}</div><div class="meta">{institution} | {period}</div></div></li>"#,
            logo = logo,
            degree = escape(item.degree),
            institution = institution,
            period = escape(item.period),
        );
    }
    out.push_str("</ul>");
    out
}

fn write_publications(items: &[PublicationItem<'_>], ctx: &PageContext) -> String {
    let mut out = String::from(r#"<div class="publications">"#);
    for item in items {
        let thumbnail = item
            .thumbnail
            .map(|src| {
                format!(
                    r#"<img class="thumb" src="{}" alt="{} preview" />"#,
                    ctx.asset(src),
                    escape(item.title)
                )
            })
            .unwrap_or_default();
        let title = match item.link {
            Some(link) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape(link),
                escape(item.title)
            ),
            None => format!("<span>{}</span>", escape(item.title)),
        };
        let year = item
            .year
            .as_deref()
            .map(|y| format!(r#" <span class="year">({})</span>"#, escape(y)))
            .unwrap_or_default();
        let pdf = item
            .pdf
            .as_deref()
            .map(|path| {
                format!(
                    r#" <a class="pdf" href="{}" target="_blank" rel="noopener noreferrer" aria-label="Download PDF: {}"><img src="{}" alt="PDF Download" /></a>"#,
                    ctx.asset(&escape(path)),
                    escape(item.title),
                    ctx.asset("images/pdf-icon.png")
                )
            })
            .unwrap_or_default();
        let description = item
            .description
            .map(|d| format!("<p>{}</p>", escape(d)))
            .unwrap_or_default();

        let _ = write!(
            out,
            r#"<article>{thumbnail}<div><div class="title">{title}{year}{pdf}</div>{description}</div></article>"#
        );
    }
    out.push_str("</div>");
    out
}

fn write_awards(items: &[AwardItem<'_>], ctx: &PageContext) -> String {
    let mut out = String::from(r#"<div class="awards">"#);
    for item in items {
        let visual = match item.visual {
            Some(AwardVisual::Document { pdf, thumbnail }) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer"><img class="thumb" src="{}" alt="Award document" /></a>"#,
                ctx.asset(pdf),
                ctx.asset(thumbnail)
            ),
            Some(AwardVisual::Logo { src, link, large }) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer"><img class="{}" src="{}" alt="{} logo" /></a>"#,
                link,
                if large { "logo large" } else { "logo" },
                ctx.asset(src),
                escape(item.title)
            ),
            None => String::new(),
        };
        let _ = write!(
            out,
            r#"<article>{visual}<div><div class="title">{title}</div><div class="year">({year})</div></div></article>"#,
            visual = visual,
            title = escape(item.title),
            year = escape(&item.year),
        );
    }
    out.push_str("</div>");
    out
}

fn write_script(nav: &NavigationOverlay) -> String {
    let ids = nav
        .registered()
        .iter()
        .map(|id| format!("\"{}\"", id.dom_id()))
        .collect::<Vec<_>>()
        .join(",");
    let mut vars = HashMap::new();
    vars.insert("ids", ids);
    vars.insert("threshold", VISIBILITY_THRESHOLD.to_string());
    fill(SCRIPT_TEMPLATE, &vars)
}

/// Shown for unsupported locales and unavailable documents alike.
pub fn not_found_page(ctx: &PageContext) -> String {
    let mut vars = HashMap::new();
    vars.insert("home", ctx.locale_root(Locale::DEFAULT));
    fill(NOT_FOUND_TEMPLATE, &vars)
}

/// Root page of a static export: forwards to the default locale.
pub fn redirect_page(ctx: &PageContext, locale: Locale) -> String {
    let mut vars = HashMap::new();
    vars.insert("target", ctx.locale_root(locale));
    fill(REDIRECT_TEMPLATE, &vars)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{lang}}">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{{title}}</title>
<meta name="description" content="{{description}}" />
<meta property="og:title" content="{{title}}" />
<meta property="og:description" content="{{description}}" />
<meta property="og:type" content="website" />
<meta property="og:locale" content="{{og_locale}}" />
{{og_url}}
<meta name="twitter:card" content="summary" />
<meta name="twitter:title" content="{{title}}" />
<link rel="icon" href="{{favicon}}" />
<style>{{style}}</style>
</head>
<body>
{{nav}}
{{switcher}}
<main>
{{header}}
{{sections}}
</main>
<footer>{{footer}}</footer>
<script>{{script}}</script>
</body>
</html>
"#;

const SCRIPT_TEMPLATE: &str = r#"
(function () {
  var ids = [{{ids}}];
  var threshold = {{threshold}};
  var buttons = document.querySelectorAll("[data-nav]");
  function mark(id) {
    buttons.forEach(function (b) {
      b.classList.toggle("active", b.getAttribute("data-nav") === id);
    });
  }
  if ("IntersectionObserver" in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (e) {
        if (e.isIntersecting && e.intersectionRatio >= threshold) mark(e.target.id);
      });
    }, { threshold: threshold });
    ids.forEach(function (id) {
      var el = document.getElementById(id);
      if (el) observer.observe(el);
    });
  }
  buttons.forEach(function (b) {
    b.addEventListener("click", function () {
      var el = document.getElementById(b.getAttribute("data-nav"));
      if (el) el.scrollIntoView({ behavior: "smooth", block: "start" });
    });
  });
  var select = document.getElementById("locale-switch");
  if (select) {
    select.addEventListener("change", function () {
      var base = select.getAttribute("data-base") || "";
      var path = window.location.pathname;
      var prefix = "";
      var rest = path;
      var next = path.charAt(base.length);
      if (base && path.indexOf(base) === 0 && (next === "" || next === "/")) {
        prefix = base;
        rest = path.slice(base.length);
      }
      var segments = rest.split("/");
      if (segments.length < 2) segments = ["", ""];
      segments[1] = select.value;
      window.location.href = prefix + segments.join("/");
    });
  }
})();
"#;

const NOT_FOUND_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>404 – Page Not Found</title>
<meta name="robots" content="noindex" />
</head>
<body style="font-family: system-ui, sans-serif; height: 100vh; margin: 0; display: flex; align-items: center; justify-content: center; text-align: center;">
<div>
<h1 style="display: inline-block; margin: 0 20px 0 0; padding: 0 23px 0 0; font-size: 32px; border-right: 1px solid #ccc;">404</h1>
<div style="display: inline-block;">
<h2 style="font-size: 18px; font-weight: 400; margin: 0;">Sorry, this page could not be found.</h2>
<p><a href="{{home}}">Return to homepage</a></p>
</div>
</div>
</body>
</html>
"#;

const REDIRECT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta http-equiv="refresh" content="0; url={{target}}" />
<link rel="canonical" href="{{target}}" />
<title>Redirecting…</title>
</head>
<body><a href="{{target}}">{{target}}</a></body>
</html>
"#;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #1f2937; }
.section-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(31, 41, 55, 0.95); }
.section-nav ul { display: flex; justify-content: center; gap: 3rem; list-style: none; margin: 0; padding: 1rem; }
.section-nav button { background: none; border: 0; color: #d1d5db; font-size: 1rem; cursor: pointer; border-bottom: 2px solid transparent; }
.section-nav button.active, .section-nav button:hover { color: #fb923c; border-bottom-color: #fb923c; }
.locale-switch { position: fixed; top: 0.75rem; right: 1rem; z-index: 60; }
.hero { padding: 7rem 2rem 5rem; text-align: center; color: #fff; background: #374151; }
.hero h1 { font-size: 4rem; margin: 0 0 2rem; }
.hero h2 { font-weight: 500; margin: 0 0 2.5rem; }
.hero .contact { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
.hero a { color: inherit; }
.hero .download { display: inline-block; margin-top: 3rem; padding: 0.75rem 2rem; background: #fb923c; border-radius: 0.5rem; text-decoration: none; font-weight: 600; }
section { padding: 3.5rem 0; scroll-margin-top: 4rem; }
section.tint { background: #fff7ed; }
.wrap { max-width: 64rem; margin: 0 auto; padding: 0 2rem; }
h3 span { display: inline-block; padding-bottom: 0.25rem; border-bottom: 4px solid #f97316; }
ul.experience, ul.education { list-style: none; padding: 0; }
details summary { display: flex; align-items: center; gap: 1rem; cursor: pointer; padding: 0.75rem; border-radius: 0.5rem; }
details summary:hover { background: #f9fafb; }
.role, .degree { font-weight: 600; font-size: 1.125rem; }
.meta, .year { color: #6b7280; font-size: 0.875rem; }
.logo { width: 3rem; height: 3rem; object-fit: contain; }
.logo.large { width: 5rem; height: 5rem; }
.thumb { width: 6rem; height: 8rem; object-fit: cover; border: 1px solid #e5e7eb; }
.skills { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 3rem; }
.skill, .language { margin-bottom: 1rem; }
.bar { width: 80%; height: 0.5rem; background: #e5e7eb; border-radius: 9999px; }
.bar div { height: 100%; background: #f97316; border-radius: 9999px; }
ul.education li, .publications article, .awards article { display: flex; gap: 1.5rem; align-items: center; margin-bottom: 1.5rem; }
.pdf img { width: 1.25rem; height: 1.25rem; }
footer { text-align: center; padding: 2rem; color: #6b7280; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{SectionId, SectionRenderer};
    use serde_json::json;

    fn document() -> CvDocument {
        serde_json::from_value(json!({
            "name": "Lucía <Ramos>",
            "title": "Policy Analyst",
            "contact": {
                "email": "lucia@example.org",
                "phone": "",
                "location": "Berlin",
                "linkedin": "https://www.linkedin.com/in/example",
                "github": "https://github.com/example"
            },
            "summary": "Numbers & policy.",
            "experience": [{
                "role": "Analyst",
                "organization": "UNICEF",
                "period": "2021",
                "location": "Lima",
                "description": ["Item one"]
            }],
            "education": [],
            "skills": { "technical": [{ "name": "R", "level": 90 }] },
            "languages": [{ "name": "Español", "level": "Nativo" }],
            "publications": [{ "title": "Report", "pdf_file": "report.pdf" }]
        }))
        .unwrap()
    }

    fn ctx() -> PageContext {
        PageContext::new("/online-cv/", None, 2025)
    }

    #[test]
    fn test_fill_replaces_placeholders() {
        let mut vars = HashMap::new();
        vars.insert("name", "World".to_string());
        assert_eq!(fill("Hello {{name}}, {{name}}!", &vars), "Hello World, World!");
        assert_eq!(fill("{{unknown}} and {{name", &vars), "{{unknown}} and {{name");
    }

    #[test]
    fn test_fill_does_not_rescan_inserted_values() {
        let mut vars = HashMap::new();
        vars.insert("a", "{{b}}".to_string());
        vars.insert("b", "B".to_string());
        assert_eq!(fill("{{a}}|{{b}}", &vars), "{{b}}|B");
    }

    #[test]
    fn test_placeholder_text_in_document_is_kept_verbatim() {
        let mut doc = document();
        doc.summary = "Literal {{lang}} and {{footer}} in my summary".to_string();
        let first = document_page(&doc, Locale::En, &ctx());
        assert!(first.contains("Literal {{lang}} and {{footer}} in my summary"));
        for _ in 0..20 {
            assert_eq!(document_page(&doc, Locale::En, &ctx()), first);
        }
    }

    #[test]
    fn test_switch_script_requires_segment_boundary() {
        let html = document_page(&document(), Locale::En, &ctx());
        assert!(html.contains(r#"(next === "" || next === "/")"#));
        assert!(html.contains("window.location.href = prefix + segments.join(\"/\");"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_contains_present_sections_only() {
        let html = document_page(&document(), Locale::En, &ctx());
        for id in ["about", "experience", "skills", "education", "publications"] {
            assert!(html.contains(&format!(r#"<section id="{}""#, id)), "missing {}", id);
        }
        assert!(!html.contains(r#"id="awards""#));
        assert!(!html.contains(r#"id="other-experience""#));
        assert!(!html.contains(r#"data-nav="awards""#));
        assert!(html.contains(r#"data-nav="publications""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_page_escapes_and_prefixes_assets() {
        let html = document_page(&document(), Locale::En, &ctx());
        assert!(html.contains("Lucía &lt;Ramos&gt;"));
        assert!(html.contains("Numbers &amp; policy."));
        assert!(html.contains(r#"src="/online-cv/images/unicef-logo.png""#));
        assert!(html.contains(r#"href="/online-cv/publications/report.pdf""#));
        assert!(html.contains(r#"href="/online-cv/Resume.pdf""#));
    }

    #[test]
    fn test_entries_render_collapsed() {
        let html = document_page(&document(), Locale::En, &ctx());
        assert!(html.contains(r#"<details data-index="0">"#));
        assert!(!html.contains(" open>"));
        assert!(html.contains("<li>Item one</li>"));
    }

    #[test]
    fn test_expanded_entry_renders_open() {
        let doc = document();
        let mut renderer = SectionRenderer::new(&doc, Locale::En.copy());
        renderer.toggle(SectionId::Experience, 0);
        let html = write_page(&renderer.page(), &ctx());
        assert!(html.contains(r#"<details data-index="0" open>"#));
    }

    #[test]
    fn test_localized_page() {
        let html = document_page(&document(), Locale::Fr, &ctx());
        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains("Expérience Professionnelle"));
        assert!(html.contains(r#"<option value="fr" data-flag="fr" selected>"#));
        assert!(html.contains(r#"class="fi fi-es circular""#));
        assert!(html.contains("width: 100%"));
    }

    #[test]
    fn test_script_binds_registered_sections() {
        let html = document_page(&document(), Locale::En, &ctx());
        assert!(html.contains(r#"var ids = ["about","experience","skills","education","publications"];"#));
        assert!(html.contains("var threshold = 0.3;"));
    }

    #[test]
    fn test_not_found_and_redirect() {
        let ctx = ctx();
        let page = not_found_page(&ctx);
        assert!(page.contains("Sorry, this page could not be found."));
        assert!(page.contains(r#"href="/online-cv/en/""#));

        let redirect = redirect_page(&ctx, Locale::En);
        assert!(redirect.contains("url=/online-cv/en/"));
    }
}
