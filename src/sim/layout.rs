//! Vertical page geometry for the simulated host.
//!
//! A [`PageLayout`] is a flat list of positioned nodes: the anchor targets
//! (`top`, `about`, …) and the reveal regions inside them. Positions are
//! estimated from the profile content with fixed block metrics, which is
//! enough to reason about when a region crosses the viewport.
//!
//! ```text
//! y=0    ┌ top (hero) ───────────────┐
//!        │                           │
//! y=800  ├ about ────────────────────┤
//!        │   about-header  (reveal)  │
//!        │   about-body    (reveal)  │
//!        ├ experience ───────────────┤
//!        │   …                       │
//! ```

use crate::content::Profile;
use crate::types::{Anchor, ElementHandle};

/// Vertical padding above and below each section's content.
const SECTION_PADDING: f64 = 96.0;
const HEADER_HEIGHT: f64 = 110.0;
const HEADER_GAP: f64 = 48.0;
const HERO_MIN_HEIGHT: f64 = 560.0;
const PARAGRAPH_HEIGHT: f64 = 112.0;
const DETAIL_HEIGHT: f64 = 56.0;
const TIMELINE_ITEM_HEIGHT: f64 = 190.0;
const PROJECT_CARD_HEIGHT: f64 = 260.0;
const GRID_GAP: f64 = 24.0;
const CONTACT_HEIGHT: f64 = 220.0;
const FOOTER_HEIGHT: f64 = 120.0;
/// Narrower viewports stack project cards in one column.
const TWO_COLUMN_MIN_WIDTH: f64 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Anchor,
    Reveal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub handle: ElementHandle,
    pub name: String,
    pub kind: NodeKind,
    pub top: f64,
    pub height: f64,
}

impl LayoutNode {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    viewport: Viewport,
    nodes: Vec<LayoutNode>,
    document_height: f64,
}

impl PageLayout {
    pub fn builder(viewport: Viewport) -> LayoutBuilder {
        LayoutBuilder {
            viewport,
            nodes: Vec::new(),
            document_height: None,
        }
    }

    /// Estimate the rendered layout of `profile`.
    pub fn from_profile(profile: &Profile, viewport: Viewport) -> Self {
        let mut builder = Self::builder(viewport);
        let mut y = 0.0;

        let hero = viewport.height.max(HERO_MIN_HEIGHT);
        builder = builder.anchor(Anchor::Top.id(), y, hero);
        y += hero;

        let about_body = (profile.about.paragraphs.len() as f64 * PARAGRAPH_HEIGHT)
            .max(profile.about.details.len() as f64 * DETAIL_HEIGHT);
        let timeline = profile.experience.entries.len() as f64 * TIMELINE_ITEM_HEIGHT;
        let columns = if viewport.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let rows = profile.projects.cards.len().div_ceil(columns) as f64;
        let grid = rows * PROJECT_CARD_HEIGHT + (rows - 1.0).max(0.0) * GRID_GAP;

        for (anchor, body) in [
            (Anchor::About, about_body),
            (Anchor::Experience, timeline),
            (Anchor::Projects, grid),
            (Anchor::Contact, CONTACT_HEIGHT),
        ] {
            let id = anchor.id();
            let section_top = y;
            y += SECTION_PADDING;
            let header_top = y;
            y += HEADER_HEIGHT + HEADER_GAP;
            let body_top = y;
            y += body + SECTION_PADDING;

            builder = builder
                .anchor(id, section_top, y - section_top)
                .reveal(&format!("{id}-header"), header_top, HEADER_HEIGHT)
                .reveal(&format!("{id}-body"), body_top, body);
        }

        builder.document_height(y + FOOTER_HEIGHT).build()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn node(&self, handle: ElementHandle) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.handle == handle)
    }

    pub fn find(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Anchor node carrying the in-page identifier `id`.
    pub fn anchor(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes
            .iter()
            .find(|n| n.kind == NodeKind::Anchor && n.name == id)
    }

    pub fn reveal_regions(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Reveal)
    }
}

pub struct LayoutBuilder {
    viewport: Viewport,
    nodes: Vec<LayoutNode>,
    document_height: Option<f64>,
}

impl LayoutBuilder {
    pub fn anchor(self, id: &str, top: f64, height: f64) -> Self {
        self.node(id, NodeKind::Anchor, top, height)
    }

    pub fn reveal(self, name: &str, top: f64, height: f64) -> Self {
        self.node(name, NodeKind::Reveal, top, height)
    }

    /// Override the document height. Defaults to the lowest node bottom.
    pub fn document_height(mut self, height: f64) -> Self {
        self.document_height = Some(height);
        self
    }

    fn node(mut self, name: &str, kind: NodeKind, top: f64, height: f64) -> Self {
        let handle = ElementHandle(self.nodes.len() as u32 + 1);
        self.nodes.push(LayoutNode {
            handle,
            name: name.to_string(),
            kind,
            top,
            height: height.max(0.0),
        });
        self
    }

    pub fn build(self) -> PageLayout {
        let lowest = self
            .nodes
            .iter()
            .map(LayoutNode::bottom)
            .fold(0.0, f64::max);
        PageLayout {
            viewport: self.viewport,
            document_height: self.document_height.unwrap_or(lowest).max(lowest),
            nodes: self.nodes,
        }
    }
}

/// Fraction of a node that lies inside the viewport at `offset`, with the
/// bottom of the viewport contracted by `margin_bottom`.
pub fn intersection_ratio(
    node: &LayoutNode,
    offset: f64,
    viewport_height: f64,
    margin_bottom: f64,
) -> f64 {
    let root_top = offset;
    let root_bottom = offset + (viewport_height - margin_bottom).max(0.0);
    if node.height <= 0.0 {
        return if node.top >= root_top && node.top < root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = node.bottom().min(root_bottom) - node.top.max(root_top);
    (overlap / node.height).clamp(0.0, 1.0)
}
