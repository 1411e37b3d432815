//! The seam between the view layer and the runtime that hosts it.
//!
//! The [`ViewHost`] trait bundles the collaborators the view consumes as
//! opaque interfaces: the viewport scroll signal, the element-visibility
//! observation primitive, the smooth-scroll primitive, anchor lookup, and
//! per-element class mutation.
//!
//! Hosts are single-threaded handles with interior mutability, so every method
//! takes `&self`. Events flow the other way as [`HostEvent`] values that the
//! runtime hands to [`ProfileView::dispatch`](super::ProfileView::dispatch).
//!
//! The production-style implementation is
//! [`SimulatedPage`](crate::sim::SimulatedPage).

use crate::types::ElementHandle;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("scroll signal unavailable: {0}")]
    ScrollSignalUnavailable(String),
    #[error("visibility observer unavailable: {0}")]
    ObserverUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Configuration for a visibility observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the target, in `[0, 1]`.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport before testing.
    pub root_margin_bottom: f64,
}

/// One target's state as reported by an observer callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementHandle,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Events the host dispatches into the view.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Scroll {
        listener: ListenerId,
        offset: f64,
    },
    Intersections {
        observer: ObserverId,
        entries: Vec<IntersectionEntry>,
    },
}

pub trait ViewHost {
    /// Subscribe to the viewport scroll signal.
    fn add_scroll_listener(&self) -> Result<ListenerId, HostError>;

    fn remove_scroll_listener(&self, listener: ListenerId);

    /// Create a visibility observer. It watches nothing until [`observe`](Self::observe).
    fn create_observer(&self, options: ObserverOptions) -> Result<ObserverId, HostError>;

    /// Start watching `target`. Observing an already-watched target is a no-op.
    fn observe(&self, observer: ObserverId, target: ElementHandle);

    /// Stop every observation held by `observer`.
    fn disconnect(&self, observer: ObserverId);

    fn add_class(&self, target: ElementHandle, class: &str);

    /// Find the element carrying the in-page identifier `id`.
    fn resolve_anchor(&self, id: &str) -> Option<ElementHandle>;

    /// Bring `target`'s top edge to the top of the viewport.
    fn scroll_into_view(&self, target: ElementHandle, behavior: ScrollBehavior);
}

/// A live scroll subscription. Dropping it unsubscribes.
pub struct ScrollSubscription {
    host: Rc<dyn ViewHost>,
    id: ListenerId,
}

impl ScrollSubscription {
    pub fn attach(host: &Rc<dyn ViewHost>) -> Result<Self, HostError> {
        let id = host.add_scroll_listener()?;
        Ok(Self {
            host: Rc::clone(host),
            id,
        })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.host.remove_scroll_listener(self.id);
        tracing::trace!(listener = self.id.0, "scroll listener removed");
    }
}

/// A live visibility observer. Dropping it disconnects every observation.
pub struct ObserverGuard {
    host: Rc<dyn ViewHost>,
    id: ObserverId,
}

impl ObserverGuard {
    pub fn attach(host: &Rc<dyn ViewHost>, options: ObserverOptions) -> Result<Self, HostError> {
        let id = host.create_observer(options)?;
        Ok(Self {
            host: Rc::clone(host),
            id,
        })
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn observe(&self, target: ElementHandle) {
        self.host.observe(self.id, target);
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.host.disconnect(self.id);
        tracing::trace!(observer = self.id.0, "visibility observer disconnected");
    }
}
