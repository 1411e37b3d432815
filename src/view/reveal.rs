//! Reveal-on-scroll engine.
//!
//! Content regions register once (re-registration is a no-op) and are watched
//! by a single visibility observer. The first time a region is reported as
//! intersecting, it gains the [`VISIBLE_CLASS`] and stays revealed for the
//! rest of the view's life: visibility is monotonic, so scrolling a region
//! back out never hides it again.
//!
//! ```text
//! hidden ──(intersecting ≥ 12%, clear of the bottom 40px)──▶ visible
//!   ▲                                                          │
//!   └──────────────────────── never ◀──────────────────────────┘
//! ```

use super::host::{
    HostError, IntersectionEntry, ObserverGuard, ObserverId, ObserverOptions, ViewHost,
};
use crate::types::ElementHandle;
use std::collections::HashMap;
use std::rc::Rc;

/// Fraction of a region that must be on screen before it counts.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Regions must clear this band at the bottom of the viewport.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 40.0;

/// Presentation class applied to revealed regions.
pub const VISIBLE_CLASS: &str = "visible";

pub fn reveal_options() -> ObserverOptions {
    ObserverOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin_bottom: REVEAL_BOTTOM_MARGIN_PX,
    }
}

#[derive(Debug, Clone, Copy)]
struct RevealEntry {
    handle: ElementHandle,
    visible: bool,
}

/// Insertion-ordered set of registered regions and their visibility flags.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    entries: Vec<RevealEntry>,
    index: HashMap<ElementHandle, usize>,
}

impl RevealRegistry {
    /// Add `handle`. Returns `false` if it was already present.
    pub fn insert(&mut self, handle: ElementHandle) -> bool {
        if self.index.contains_key(&handle) {
            return false;
        }
        self.index.insert(handle, self.entries.len());
        self.entries.push(RevealEntry {
            handle,
            visible: false,
        });
        true
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.index.contains_key(&handle)
    }

    pub fn is_visible(&self, handle: ElementHandle) -> bool {
        self.index
            .get(&handle)
            .is_some_and(|&i| self.entries[i].visible)
    }

    /// Flip `handle` to visible. Returns `true` only on the first flip.
    fn mark_visible(&mut self, handle: ElementHandle) -> bool {
        match self.index.get(&handle) {
            Some(&i) if !self.entries[i].visible => {
                self.entries[i].visible = true;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = ElementHandle> + '_ {
        self.entries.iter().map(|e| e.handle)
    }
}

pub struct RevealEngine {
    registry: RevealRegistry,
    observer: ObserverGuard,
    host: Rc<dyn ViewHost>,
}

impl RevealEngine {
    pub fn mount(host: &Rc<dyn ViewHost>) -> Result<Self, HostError> {
        let observer = ObserverGuard::attach(host, reveal_options())?;
        tracing::debug!(observer = observer.id().0, "reveal engine mounted");
        Ok(Self {
            registry: RevealRegistry::default(),
            observer,
            host: Rc::clone(host),
        })
    }

    /// Register a region for reveal. Safe to call on every render pass.
    ///
    /// Returns `true` if the handle was new and is now being observed.
    pub fn register(&mut self, handle: ElementHandle) -> bool {
        if !self.registry.insert(handle) {
            return false;
        }
        self.observer.observe(handle);
        tracing::trace!(%handle, "reveal region registered");
        true
    }

    /// Observer callback. Returns the regions revealed by this batch.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<ElementHandle> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if self.registry.mark_visible(entry.target) {
                self.host.add_class(entry.target, VISIBLE_CLASS);
                tracing::debug!(handle = %entry.target, ratio = entry.ratio, "region revealed");
                revealed.push(entry.target);
            }
        }
        revealed
    }

    pub fn is_revealed(&self, handle: ElementHandle) -> bool {
        self.registry.is_visible(handle)
    }

    pub fn registry(&self) -> &RevealRegistry {
        &self.registry
    }

    pub fn observer(&self) -> ObserverId {
        self.observer.id()
    }

    /// Disconnect the observer and drop the registry.
    pub fn teardown(self) {
        drop(self);
    }
}
