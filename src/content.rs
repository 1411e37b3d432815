//! Profile content: the static text the page is rendered from.
//!
//! Content lives in `profile.toml` next to `config.toml`. Like the config, the
//! file is sparse and merged over a built-in sample profile, so a new site
//! renders immediately and each table can be replaced piecemeal. Arrays
//! (timeline entries, project cards, links) replace the sample wholesale.
//!
//! ```toml
//! name = "Sam Carter"
//!
//! [hero]
//! label = "Software Engineer"
//! headline = "Hi, I'm Sam"
//!
//! [[experience.entries]]
//! dates = "2023 — Present"
//! role = "Senior Software Engineer"
//! company = "Acme"
//! description = "Led the platform team."
//! tags = ["Rust", "Postgres"]
//! ```
//!
//! About paragraphs and descriptions are markdown.

use crate::config::{self, ConfigError, merge_toml};
use crate::types::Anchor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read profile.toml: {0}")]
    Load(#[from] ConfigError),
    #[error("profile.toml is invalid: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to encode sample profile: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("profile validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Full name, used for the footer and the default page title.
    pub name: String,
    /// Text of the home link in the nav bar.
    pub logo: String,
    pub hero: Hero,
    pub about: About,
    pub experience: Experience,
    pub projects: Projects,
    pub contact: Contact,
    /// Footer lines, rendered in order.
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub label: String,
    pub headline: String,
    pub description: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

/// A hero button that navigates in-page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub target: Anchor,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            label: "Get in touch".to_string(),
            target: Anchor::Contact,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub heading: String,
    /// Markdown paragraphs.
    pub paragraphs: Vec<String>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Experience {
    pub heading: String,
    pub entries: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub dates: String,
    pub role: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Projects {
    pub heading: String,
    pub cards: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: ProjectIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    #[default]
    Terminal,
    Database,
    Sparkles,
    Book,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    GitHub,
    LinkedIn,
    Website,
}

impl LinkKind {
    /// External links open in a new tab; mail links do not.
    pub fn opens_new_tab(self) -> bool {
        !matches!(self, LinkKind::Email)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::sample()
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::sample()
    }
}

impl Default for About {
    fn default() -> Self {
        Self::sample()
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::sample()
    }
}

impl Default for Projects {
    fn default() -> Self {
        Self::sample()
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::sample()
    }
}

impl Profile {
    /// The built-in profile a fresh site renders with.
    pub fn sample() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            logo: "scarter".to_string(),
            hero: Hero::sample(),
            about: About::sample(),
            experience: Experience::sample(),
            projects: Projects::sample(),
            contact: Contact::sample(),
            footer: vec![
                "© 2026 Sam Carter".to_string(),
                "Built with care".to_string(),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Validation("name must not be empty".into()));
        }
        if let Some(card) = self
            .projects
            .cards
            .iter()
            .find(|c| c.live.is_none() && c.source.is_none())
        {
            return Err(ContentError::Validation(format!(
                "project '{}' needs a live or source link",
                card.name
            )));
        }
        if let Some(link) = self.contact.links.iter().find(|l| l.url.trim().is_empty()) {
            return Err(ContentError::Validation(format!(
                "contact link '{}' has an empty url",
                link.label
            )));
        }
        Ok(())
    }
}

impl Hero {
    fn sample() -> Self {
        Self {
            label: "Software Engineer".to_string(),
            headline: "Hi, I'm Sam Carter".to_string(),
            description: "I build dependable software and the tools around it, \
                          with a soft spot for making hard problems feel small."
                .to_string(),
            primary: CallToAction::default(),
            secondary: CallToAction {
                label: "View resume".to_string(),
                target: Anchor::Experience,
            },
        }
    }
}

impl About {
    fn sample() -> Self {
        Self {
            heading: "A bit about me".to_string(),
            paragraphs: vec![
                "I care about **clear code** and products people enjoy using. \
                 Simplicity and steady shipping beat cleverness."
                    .to_string(),
                "Away from work I read source code for fun, contribute to open \
                 source, and keep learning the craft."
                    .to_string(),
            ],
            details: vec![
                Detail {
                    label: "Location".to_string(),
                    value: "Lisbon, PT".to_string(),
                },
                Detail {
                    label: "Focus".to_string(),
                    value: "Backend & tooling".to_string(),
                },
                Detail {
                    label: "Languages".to_string(),
                    value: "Rust, Go, TypeScript".to_string(),
                },
                Detail {
                    label: "Education".to_string(),
                    value: "B.S. Computer Science".to_string(),
                },
            ],
        }
    }
}

impl Experience {
    fn sample() -> Self {
        let job = |dates: &str, role: &str, company: &str, description: &str, tags: &[&str]| Job {
            dates: dates.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            heading: "Where I've worked".to_string(),
            entries: vec![
                job(
                    "2023 — Present",
                    "Senior Software Engineer",
                    "Northwind",
                    "Own the ingestion platform and mentor the backend team.",
                    &["Rust", "Kafka", "Postgres", "AWS"],
                ),
                job(
                    "2021 — 2023",
                    "Software Engineer",
                    "Contoso",
                    "Built internal services and cut release time with a new CI pipeline.",
                    &["Go", "gRPC", "Docker"],
                ),
                job(
                    "2019 — 2021",
                    "Junior Developer",
                    "Fabrikam",
                    "Shipped customer-facing features and internal tooling.",
                    &["TypeScript", "React"],
                ),
            ],
        }
    }
}

impl Projects {
    fn sample() -> Self {
        let card = |name: &str, description: &str, icon, live: bool, source: bool| Project {
            name: name.to_string(),
            description: description.to_string(),
            icon,
            live: live.then(|| "https://example.com".to_string()),
            source: source.then(|| "https://github.com/example".to_string()),
        };
        Self {
            heading: "Things I've built".to_string(),
            cards: vec![
                card(
                    "tail-spin",
                    "A log follower that groups related lines into spans.",
                    ProjectIcon::Terminal,
                    true,
                    true,
                ),
                card(
                    "ledgerlite",
                    "Embedded double-entry bookkeeping on top of SQLite.",
                    ProjectIcon::Database,
                    true,
                    true,
                ),
                card(
                    "glint",
                    "A tiny static analyzer for config drift.",
                    ProjectIcon::Sparkles,
                    false,
                    true,
                ),
                card(
                    "field-notes",
                    "Long-form notes on systems I've worked on.",
                    ProjectIcon::Book,
                    true,
                    false,
                ),
            ],
        }
    }
}

impl Contact {
    fn sample() -> Self {
        Self {
            heading: "Let's connect".to_string(),
            blurb: "Always happy to talk about interesting problems, \
                    collaborations, or new opportunities."
                .to_string(),
            links: vec![
                ContactLink {
                    kind: LinkKind::Email,
                    label: "Email".to_string(),
                    url: "mailto:hello@example.com".to_string(),
                },
                ContactLink {
                    kind: LinkKind::GitHub,
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                ContactLink {
                    kind: LinkKind::LinkedIn,
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/example".to_string(),
                },
            ],
        }
    }
}

/// Load `profile.toml` from the content directory, falling back to the sample.
pub fn load_profile(root: &Path) -> Result<Profile, ContentError> {
    let overlay = config::load_raw_toml(root, "profile.toml")?;
    let profile = resolve_profile(overlay)?;
    tracing::debug!(root = %root.display(), name = %profile.name, "profile loaded");
    Ok(profile)
}

/// Merge an optional overlay onto the sample profile, then validate.
pub fn resolve_profile(overlay: Option<toml::Value>) -> Result<Profile, ContentError> {
    let base = toml::Value::try_from(Profile::sample())?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let profile: Profile = merged.try_into()?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sample_profile_is_valid() {
        assert!(Profile::sample().validate().is_ok());
    }

    #[test]
    fn missing_file_uses_sample() {
        let tmp = TempDir::new().unwrap();
        let profile = load_profile(tmp.path()).unwrap();
        assert_eq!(profile.name, "Sam Carter");
        assert_eq!(profile.experience.entries.len(), 3);
    }

    #[test]
    fn overlay_replaces_scalars_and_keeps_the_rest() {
        let overlay: toml::Value = toml::from_str(
            r#"
            name = "Ada Example"
            [hero]
            headline = "Hello"
            "#,
        )
        .unwrap();
        let profile = resolve_profile(Some(overlay)).unwrap();

        assert_eq!(profile.name, "Ada Example");
        assert_eq!(profile.hero.headline, "Hello");
        assert_eq!(profile.hero.label, "Software Engineer");
        assert_eq!(profile.projects.cards.len(), 4);
    }

    #[test]
    fn overlay_arrays_replace_sample() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("profile.toml"),
            r#"
            [[experience.entries]]
            dates = "2020 — Now"
            role = "Founder"
            company = "Own Thing"
            description = "Everything."
            "#,
        )
        .unwrap();

        let profile = load_profile(tmp.path()).unwrap();
        assert_eq!(profile.experience.entries.len(), 1);
        assert_eq!(profile.experience.entries[0].role, "Founder");
        assert!(profile.experience.entries[0].tags.is_empty());
    }

    #[test]
    fn call_to_action_targets_parse_as_anchors() {
        let overlay: toml::Value = toml::from_str(
            r#"
            [hero.primary]
            label = "Projects"
            target = "projects"
            "#,
        )
        .unwrap();
        let profile = resolve_profile(Some(overlay)).unwrap();
        assert_eq!(profile.hero.primary.target, Anchor::Projects);
    }

    #[test]
    fn project_without_links_is_rejected() {
        let overlay: toml::Value = toml::from_str(
            r#"
            [[projects.cards]]
            name = "orphan"
            description = "No links."
            "#,
        )
        .unwrap();
        assert!(matches!(
            resolve_profile(Some(overlay)),
            Err(ContentError::Validation(_))
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        let overlay: toml::Value = toml::from_str("name = \"  \"").unwrap();
        assert!(matches!(
            resolve_profile(Some(overlay)),
            Err(ContentError::Validation(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let overlay: toml::Value = toml::from_str("[hero]\nsubtitle = \"x\"").unwrap();
        assert!(matches!(
            resolve_profile(Some(overlay)),
            Err(ContentError::Toml(_))
        ));
    }

    #[test]
    fn email_links_stay_in_tab() {
        assert!(!LinkKind::Email.opens_new_tab());
        assert!(LinkKind::GitHub.opens_new_tab());
    }
}
