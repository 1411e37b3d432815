//! Navigation controller: mobile-menu state and in-page anchor navigation.
//!
//! ```text
//!            toggle_menu()
//!   Closed ◀──────────────▶ Open
//!     ▲                      │
//!     └──── navigate_to() ───┘
//! ```
//!
//! Navigation always closes the menu, whether or not the anchor resolved.

use super::host::{ScrollBehavior, ViewHost};
use crate::types::{ElementHandle, normalize_anchor_id};
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavMenuState {
    pub open: bool,
}

/// The click event behind a navigation request.
#[derive(Debug, Default)]
pub struct NavEvent {
    default_prevented: bool,
}

impl NavEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A smooth scroll toward the target was requested.
    Scrolling(ElementHandle),
    /// No element carries the identifier. Nothing scrolled.
    TargetMissing,
}

pub struct NavController {
    state: NavMenuState,
    host: Rc<dyn ViewHost>,
}

impl NavController {
    pub fn new(host: &Rc<dyn ViewHost>) -> Self {
        Self {
            state: NavMenuState::default(),
            host: Rc::clone(host),
        }
    }

    pub fn state(&self) -> NavMenuState {
        self.state
    }

    pub fn toggle_menu(&mut self) -> NavMenuState {
        self.state.open = !self.state.open;
        tracing::debug!(open = self.state.open, "menu toggled");
        self.state
    }

    /// Navigate to the in-page anchor `anchor_id` (`about` or `#about`).
    pub fn navigate_to(&mut self, anchor_id: &str, event: &mut NavEvent) -> NavOutcome {
        event.prevent_default();

        let id = normalize_anchor_id(anchor_id);
        let outcome = match self.host.resolve_anchor(id) {
            Some(target) => {
                self.host.scroll_into_view(target, ScrollBehavior::Smooth);
                NavOutcome::Scrolling(target)
            }
            None => NavOutcome::TargetMissing,
        };
        tracing::debug!(anchor = id, ?outcome, "navigation");

        self.state.open = false;
        outcome
    }
}
