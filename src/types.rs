//! Shared types used by the renderer, the view layer, and the simulated host.
//!
//! The renderer and the view layer never talk to each other directly. They
//! agree on three things only: element handles, the fixed set of in-page
//! anchors, and the flags a render pass reads to compute class membership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of one rendered element, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(pub u32);

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier the home/logo link navigates to.
pub const HOME_ANCHOR: &str = "top";

/// In-page navigation targets known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    About,
    Experience,
    Projects,
    Contact,
}

impl Anchor {
    /// Sections listed in the navigation menu, in page order.
    pub const SECTIONS: [Anchor; 4] = [
        Anchor::About,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Top => HOME_ANCHOR,
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    /// Menu label for the anchor.
    pub fn label(self) -> &'static str {
        match self {
            Anchor::Top => "Home",
            Anchor::About => "About",
            Anchor::Experience => "Experience",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Strip a leading `#` from an href-style identifier.
///
/// A bare `#` (or an empty string) is the conventional "back to top" link and
/// maps to [`HOME_ANCHOR`].
pub fn normalize_anchor_id(id: &str) -> &str {
    let trimmed = id.strip_prefix('#').unwrap_or(id);
    if trimmed.is_empty() {
        HOME_ANCHOR
    } else {
        trimmed
    }
}

/// The view state a render pass reads to decide class membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewFlags {
    /// Viewport is past the scrolled threshold.
    pub scrolled: bool,
    /// Mobile menu is expanded.
    pub menu_open: bool,
}

impl ViewFlags {
    /// Class attribute for the navigation chrome.
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "site-nav scrolled"
        } else {
            "site-nav"
        }
    }

    /// Class attribute for the menu list.
    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "nav-links open"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_normalize_back_to_ids() {
        for anchor in [Anchor::Top]
            .into_iter()
            .chain(Anchor::SECTIONS.into_iter())
        {
            assert_eq!(normalize_anchor_id(&anchor.href()), anchor.id());
        }
    }

    #[test]
    fn bare_hash_means_home() {
        assert_eq!(normalize_anchor_id("#"), HOME_ANCHOR);
        assert_eq!(normalize_anchor_id(""), HOME_ANCHOR);
        assert_eq!(normalize_anchor_id("missing-id"), "missing-id");
    }

    #[test]
    fn flags_map_to_classes() {
        let idle = ViewFlags::default();
        assert_eq!(idle.nav_class(), "site-nav");
        assert_eq!(idle.menu_class(), "nav-links");

        let busy = ViewFlags {
            scrolled: true,
            menu_open: true,
        };
        assert_eq!(busy.nav_class(), "site-nav scrolled");
        assert_eq!(busy.menu_class(), "nav-links open");
    }
}
