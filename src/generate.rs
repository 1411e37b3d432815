//! HTML page generation.
//!
//! Renders the profile into a single `index.html` and copies static assets
//! next to it.
//!
//! ## Page Structure
//!
//! ```text
//! nav.site-nav            ← class "scrolled" past the threshold
//! ├── a.logo  → #top
//! ├── button.menu-toggle
//! └── ul.nav-links        ← class "open" while the menu is expanded
//! header#top.hero
//! section#about           ┐
//! section#experience      │ each with two reveal regions:
//! section#projects        │   <id>-header and <id>-body
//! section#contact         ┘
//! footer
//! ```
//!
//! ## Render Passes
//!
//! Class membership is a pure function of [`RenderState`]: the view flags
//! plus the names of regions already revealed. The static build renders
//! [`RenderState::initial`]; `folio simulate --html` renders the state a
//! scripted session ended in. Every reveal region carries
//! `data-reveal="<name>"` so a host runtime can find it.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! └── ...                 # content/assets/ copied verbatim
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{
    self, About, Contact, ContactLink, ContentError, Experience, Job, LinkKind, Profile,
    Project, ProjectIcon, Projects,
};
use crate::types::{Anchor, ViewFlags};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("failed to copy assets: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Directory inside the content root whose files are copied verbatim.
pub const ASSETS_DIR: &str = "assets";

/// What a render pass needs to decide class membership.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub flags: ViewFlags,
    /// Names of reveal regions that have been revealed.
    pub revealed: &'a [String],
    /// Whether a view layer is driving the page. Unmounted pages show every
    /// region so they stay readable.
    pub mounted: bool,
}

impl RenderState<'static> {
    pub fn initial() -> Self {
        Self {
            flags: ViewFlags::default(),
            revealed: &[],
            mounted: false,
        }
    }
}

impl RenderState<'_> {
    fn reveal_class(&self, name: &str) -> &'static str {
        if self.revealed.iter().any(|r| r == name) {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

/// Summary of a `generate` run.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub bytes: usize,
    pub sections: usize,
    pub reveal_regions: usize,
    pub assets: Vec<PathBuf>,
}

/// Load config and profile from `source`, render, and write into `output_dir`.
pub fn generate(source: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let site_config = config::load_config(source)?;
    let profile = content::load_profile(source)?;

    fs::create_dir_all(output_dir)?;

    let page = render_page(&profile, &site_config, RenderState::initial()).into_string();
    let index = output_dir.join("index.html");
    fs::write(&index, &page)?;
    tracing::info!(path = %index.display(), bytes = page.len(), "generated index.html");

    let assets = copy_assets(&source.join(ASSETS_DIR), output_dir)?;

    Ok(GenerateReport {
        index,
        bytes: page.len(),
        sections: Anchor::SECTIONS.len(),
        reveal_regions: Anchor::SECTIONS.len() * 2,
        assets,
    })
}

/// Copy every file under `src` into `dst`, preserving relative paths.
/// Returns the relative paths copied. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !src.is_dir() {
        return Ok(Vec::new());
    }
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            tracing::debug!(asset = %relative.display(), "copied asset");
            copied.push(relative.to_path_buf());
        }
    }
    Ok(copied)
}

fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(site: &SiteConfig, title: &str, mounted: bool, content: Markup) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&site.colors),
        CSS_STATIC
    );
    html! {
        (DOCTYPE)
        html lang=(site.site.lang) class=[mounted.then_some("view-mounted")] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !site.site.description.is_empty() {
                    meta name="description" content=(site.site.description);
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the fixed navigation bar
pub fn render_nav(logo: &str, flags: ViewFlags) -> Markup {
    html! {
        nav class=(flags.nav_class()) {
            a.logo href=(Anchor::Top.href()) { (logo) }
            button.menu-toggle type="button" aria-label="Toggle menu"
                aria-expanded=(if flags.menu_open { "true" } else { "false" }) aria-controls="nav-links" {
                @if flags.menu_open { "✕" } @else { "☰" }
            }
            ul id="nav-links" class=(flags.menu_class()) {
                @for anchor in Anchor::SECTIONS {
                    li { a href=(anchor.href()) { (anchor.label()) } }
                }
            }
        }
    }
}

fn render_hero(profile: &Profile) -> Markup {
    let hero = &profile.hero;
    html! {
        header.hero id=(Anchor::Top.id()) {
            p.hero-label { (hero.label) }
            h1 { (hero.headline) }
            div.hero-description { (markdown(&hero.description)) }
            div.hero-actions {
                a.button.primary href=(hero.primary.target.href()) { (hero.primary.label) }
                a.button href=(hero.secondary.target.href()) { (hero.secondary.label) }
            }
        }
    }
}

/// Wraps section content in the shared header/body reveal regions.
fn render_section(anchor: Anchor, heading: &str, state: &RenderState, body: Markup) -> Markup {
    let header_name = format!("{}-header", anchor.id());
    let body_name = format!("{}-body", anchor.id());
    html! {
        section.section id=(anchor.id()) {
            div class={ "section-header " (state.reveal_class(&header_name)) } data-reveal=(header_name) {
                h2 { (heading) }
            }
            div class={ "section-body " (state.reveal_class(&body_name)) } data-reveal=(body_name) {
                (body)
            }
        }
    }
}

fn render_about(about: &About) -> Markup {
    html! {
        div.about-grid {
            div.about-text {
                @for paragraph in &about.paragraphs {
                    (markdown(paragraph))
                }
            }
            @if !about.details.is_empty() {
                dl.details {
                    @for detail in &about.details {
                        dt { (detail.label) }
                        dd { (detail.value) }
                    }
                }
            }
        }
    }
}

fn render_job(job: &Job) -> Markup {
    html! {
        li.timeline-item {
            p.timeline-dates { (job.dates) }
            h3 { (job.role) " · " span.company { (job.company) } }
            (markdown(&job.description))
            @if !job.tags.is_empty() {
                ul.tags {
                    @for tag in &job.tags {
                        li { (tag) }
                    }
                }
            }
        }
    }
}

fn render_experience(experience: &Experience) -> Markup {
    html! {
        ol.timeline {
            @for job in &experience.entries {
                (render_job(job))
            }
        }
    }
}

fn render_project(project: &Project) -> Markup {
    html! {
        article.project-card {
            (icon(project.icon))
            h3 { (project.name) }
            (markdown(&project.description))
            div.project-links {
                @if let Some(live) = &project.live {
                    a href=(live) target="_blank" rel="noopener" { "Live" }
                }
                @if let Some(source) = &project.source {
                    a href=(source) target="_blank" rel="noopener" { "Source" }
                }
            }
        }
    }
}

fn render_projects(projects: &Projects) -> Markup {
    html! {
        div.project-grid {
            @for project in &projects.cards {
                (render_project(project))
            }
        }
    }
}

fn render_contact_link(link: &ContactLink) -> Markup {
    let new_tab = link.kind.opens_new_tab();
    html! {
        li {
            a class={ "contact-" (link_kind_name(link.kind)) } href=(link.url)
                target=[new_tab.then_some("_blank")] rel=[new_tab.then_some("noopener")] {
                (link.label)
            }
        }
    }
}

fn render_contact(contact: &Contact) -> Markup {
    html! {
        (markdown(&contact.blurb))
        ul.contact-links {
            @for link in &contact.links {
                (render_contact_link(link))
            }
        }
    }
}

fn link_kind_name(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Email => "email",
        LinkKind::GitHub => "github",
        LinkKind::LinkedIn => "linkedin",
        LinkKind::Website => "website",
    }
}

fn icon(kind: ProjectIcon) -> Markup {
    let paths = match kind {
        ProjectIcon::Terminal => r#"<polyline points="4 17 10 11 4 5"/><line x1="12" y1="19" x2="20" y2="19"/>"#,
        ProjectIcon::Database => r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14c0 1.7 4 3 9 3s9-1.3 9-3V5"/><path d="M3 12c0 1.7 4 3 9 3s9-1.3 9-3"/>"#,
        ProjectIcon::Sparkles => r#"<path d="M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z"/>"#,
        ProjectIcon::Book => r#"<path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"/><path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"/>"#,
    };
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(paths))
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole profile page for one render pass.
pub fn render_page(profile: &Profile, site: &SiteConfig, state: RenderState) -> Markup {
    let title = if site.site.title.is_empty() {
        profile.name.as_str()
    } else {
        site.site.title.as_str()
    };

    let content = html! {
        (render_nav(&profile.logo, state.flags))
        main {
            (render_hero(profile))
            hr.divider;
            (render_section(Anchor::About, &profile.about.heading, &state, render_about(&profile.about)))
            hr.divider;
            (render_section(Anchor::Experience, &profile.experience.heading, &state, render_experience(&profile.experience)))
            hr.divider;
            (render_section(Anchor::Projects, &profile.projects.heading, &state, render_projects(&profile.projects)))
            hr.divider;
            (render_section(Anchor::Contact, &profile.contact.heading, &state, render_contact(&profile.contact)))
        }
        footer.site-footer {
            @for line in &profile.footer {
                p { (line) }
            }
        }
    };
    base_document(site, title, state.mounted, content)
}

// ============================================================================
// Tests
// ============================================================================
