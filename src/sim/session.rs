//! A mounted [`ProfileView`] running against a [`SimulatedPage`].
//!
//! The session plays the host runtime's role: it forwards user input to the
//! page or the view, runs a render pass after every state change, and pumps
//! queued host events into [`ProfileView::dispatch`] until the page is quiet.

use super::layout::{NodeKind, PageLayout};
use super::page::SimulatedPage;
use super::script::Step;
use crate::config::ScrollConfig;
use crate::generate::RenderState;
use crate::types::ViewFlags;
use crate::view::{NavEvent, NavOutcome, ProfileView, ViewError, ViewHost};
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;

/// Simulated frame length for animations.
pub const FRAME: Duration = Duration::from_millis(16);

/// Observable state after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub offset: f64,
    pub scrolled: bool,
    pub menu_open: bool,
    pub animating: bool,
    /// Reveal regions that have been revealed, in page order.
    pub revealed: Vec<String>,
    pub regions: usize,
}

impl Snapshot {
    /// Render pass input matching this state.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            flags: ViewFlags {
                scrolled: self.scrolled,
                menu_open: self.menu_open,
            },
            revealed: &self.revealed,
            mounted: true,
        }
    }
}

pub struct Session {
    view: ProfileView,
    page: Rc<SimulatedPage>,
}

impl Session {
    /// Mount a view on a fresh page and run the first render pass.
    pub fn start(layout: PageLayout, scroll: ScrollConfig) -> Result<Self, ViewError> {
        Self::with_page(Rc::new(SimulatedPage::new(layout, scroll)))
    }

    pub fn with_page(page: Rc<SimulatedPage>) -> Result<Self, ViewError> {
        let host: Rc<dyn ViewHost> = page.clone();
        let view = ProfileView::mount(host)?;
        let mut session = Self { view, page };
        session.render();
        Ok(session)
    }

    pub fn view(&self) -> &ProfileView {
        &self.view
    }

    pub fn page(&self) -> &SimulatedPage {
        &self.page
    }

    pub fn flags(&self) -> ViewFlags {
        self.view.flags()
    }

    /// Register every reveal region present on the page, then settle.
    pub fn render(&mut self) {
        let regions: Vec<_> = self
            .page
            .layout()
            .reveal_regions()
            .map(|node| node.handle)
            .collect();
        self.view.render_pass(regions);
        self.pump();
    }

    /// Dispatch queued host events until none remain.
    ///
    /// Returns whether any of them changed what a render pass would show.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        loop {
            let events = self.page.drain_events();
            if events.is_empty() {
                return changed;
            }
            for event in &events {
                changed |= self.view.dispatch(event).changed();
            }
        }
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.page.scroll_to(offset);
        self.pump();
    }

    pub fn toggle_menu(&mut self) {
        self.view.toggle_menu();
        self.render();
    }

    pub fn navigate(&mut self, anchor_id: &str) -> NavOutcome {
        let mut event = NavEvent::new();
        let outcome = self.view.navigate_to(anchor_id, &mut event);
        self.render();
        outcome
    }

    /// Run the clock for `duration` in whole frames, dispatching as it goes.
    ///
    /// Returns as soon as no smooth scroll is running, since an idle page has
    /// nothing left to advance.
    pub fn wait(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() && self.page.is_animating() {
            let dt = remaining.min(FRAME);
            self.page.advance(dt);
            self.pump();
            remaining -= dt;
        }
    }

    /// Keep advancing frames until no smooth scroll is running.
    pub fn settle(&mut self) {
        while self.page.is_animating() {
            self.wait(FRAME);
        }
    }

    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Scroll(offset) => self.scroll_to(*offset),
            Step::Toggle => self.toggle_menu(),
            Step::Navigate(id) => {
                self.navigate(id);
            }
            Step::Wait(duration) => self.wait(*duration),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let layout = self.page.layout();
        let revealed = layout
            .nodes()
            .iter()
            .filter(|n| n.kind == NodeKind::Reveal && self.view.reveal().is_revealed(n.handle))
            .map(|n| n.name.clone())
            .collect();
        let flags = self.view.flags();
        Snapshot {
            offset: self.page.offset(),
            scrolled: flags.scrolled,
            menu_open: flags.menu_open,
            animating: self.page.is_animating(),
            revealed,
            regions: layout.reveal_regions().count(),
        }
    }

    /// Unmount the view. The page stays inspectable through the returned handle.
    pub fn finish(self) -> Rc<SimulatedPage> {
        let Self { view, page } = self;
        view.unmount();
        page
    }
}

/// Run `steps` from a fresh session, returning the snapshot after each one.
pub fn run_script(
    layout: PageLayout,
    scroll: ScrollConfig,
    steps: &[Step],
) -> Result<Vec<(Step, Snapshot)>, ViewError> {
    let mut session = Session::start(layout, scroll)?;
    let mut trace = Vec::with_capacity(steps.len());
    for step in steps {
        session.apply(step);
        trace.push((step.clone(), session.snapshot()));
    }
    session.finish();
    Ok(trace)
}
