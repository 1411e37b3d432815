//! Client-side view state for the profile page.
//!
//! Three leaf-independent components share one host:
//!
//! | Component | Owns | Driven by |
//! |-----------|------|-----------|
//! | [`ScrollMonitor`] | [`ScrollState`] | host scroll signal |
//! | [`RevealEngine`] | [`RevealRegistry`](reveal::RevealRegistry) | host visibility observer |
//! | [`NavController`] | [`NavMenuState`] | menu toggle and link clicks |
//!
//! [`ProfileView`] is the view instance that holds them. Mounting acquires the
//! scroll subscription and the visibility observer; both are RAII guards, so
//! they are released when the view is dropped, on an explicit
//! [`ProfileView::unmount`], on unwinding, and when a later acquisition in
//! [`ProfileView::mount`] fails.
//!
//! Everything runs on the host's single event loop. Handlers never block and
//! never run concurrently; each component mutates only its own state.

pub mod host;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use host::{HostError, HostEvent, ViewHost};
pub use nav::{NavController, NavEvent, NavMenuState, NavOutcome};
pub use reveal::RevealEngine;
pub use scroll::{ScrollMonitor, ScrollState};

use crate::types::{ElementHandle, ViewFlags};
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("host runtime error: {0}")]
    Host(#[from] HostError),
}

/// What a dispatched host event did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Addressed to another listener or observer.
    Ignored,
    /// Handled without touching anything a render pass reads.
    Unchanged,
    /// The scrolled flag flipped or a region was revealed.
    Changed,
}

impl Dispatched {
    pub fn changed(self) -> bool {
        self == Dispatched::Changed
    }
}

impl From<bool> for Dispatched {
    fn from(changed: bool) -> Self {
        if changed {
            Dispatched::Changed
        } else {
            Dispatched::Unchanged
        }
    }
}

pub struct ProfileView {
    scroll: ScrollMonitor,
    reveal: RevealEngine,
    nav: NavController,
}

impl ProfileView {
    /// Mount the view against `host`.
    ///
    /// A host that cannot provide the scroll signal or a visibility observer
    /// violates a precondition; the error is returned to the caller and
    /// anything already acquired is released.
    pub fn mount(host: Rc<dyn ViewHost>) -> Result<Self, ViewError> {
        let scroll = ScrollMonitor::mount(&host)?;
        let reveal = RevealEngine::mount(&host)?;
        let nav = NavController::new(&host);
        tracing::debug!("profile view mounted");
        Ok(Self {
            scroll,
            reveal,
            nav,
        })
    }

    /// Register the reveal regions present in this render pass.
    ///
    /// Returns how many were new.
    pub fn render_pass<I>(&mut self, regions: I) -> usize
    where
        I: IntoIterator<Item = ElementHandle>,
    {
        regions
            .into_iter()
            .filter(|&handle| self.reveal.register(handle))
            .count()
    }

    /// Flags the render layer reads to compute class membership.
    pub fn flags(&self) -> ViewFlags {
        ViewFlags {
            scrolled: self.scroll.state().scrolled,
            menu_open: self.nav.state().open,
        }
    }

    /// Route one host event to the component that subscribed for it.
    ///
    /// The host only needs to re-render when this returns
    /// [`Dispatched::Changed`].
    pub fn dispatch(&mut self, event: &HostEvent) -> Dispatched {
        match event {
            HostEvent::Scroll { listener, offset } if *listener == self.scroll.listener() => {
                self.scroll.on_scroll(*offset).is_some().into()
            }
            HostEvent::Intersections { observer, entries }
                if *observer == self.reveal.observer() =>
            {
                (!self.reveal.on_intersections(entries).is_empty()).into()
            }
            _ => Dispatched::Ignored,
        }
    }

    pub fn toggle_menu(&mut self) -> NavMenuState {
        self.nav.toggle_menu()
    }

    pub fn navigate_to(&mut self, anchor_id: &str, event: &mut NavEvent) -> NavOutcome {
        self.nav.navigate_to(anchor_id, event)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn menu_state(&self) -> NavMenuState {
        self.nav.state()
    }

    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    /// Tear the view down, releasing the scroll subscription and the observer.
    pub fn unmount(self) {
        let Self { scroll, reveal, nav } = self;
        scroll.teardown();
        reveal.teardown();
        drop(nav);
        tracing::debug!("profile view unmounted");
    }
}
