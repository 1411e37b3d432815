//! A [`ViewHost`] backed by a [`PageLayout`] instead of a browser.
//!
//! The page keeps the scroll offset, the listener and observer registries, and
//! the class list of every element. Anything that would make a browser fire a
//! callback queues a [`HostEvent`] instead; the runtime drains the queue with
//! [`SimulatedPage::drain_events`] and dispatches each event into the view.
//!
//! Observers follow threshold-crossing semantics: an entry is queued when a
//! target is first observed, and afterwards only when its intersecting state
//! flips.

use super::animation::ScrollAnimator;
use super::layout::{PageLayout, intersection_ratio};
use crate::config::ScrollConfig;
use crate::types::ElementHandle;
use crate::view::host::{
    HostError, HostEvent, IntersectionEntry, ListenerId, ObserverId, ObserverOptions,
    ScrollBehavior, ViewHost,
};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::time::Duration;

#[derive(Debug)]
struct ObserverRecord {
    options: ObserverOptions,
    /// Observed targets with their last reported intersecting state.
    targets: Vec<(ElementHandle, bool)>,
}

#[derive(Debug)]
struct PageState {
    animator: ScrollAnimator,
    next_id: u64,
    listeners: Vec<ListenerId>,
    observers: HashMap<ObserverId, ObserverRecord>,
    classes: HashMap<ElementHandle, BTreeSet<String>>,
    queue: VecDeque<HostEvent>,
    smooth_scrolls: usize,
    offline: bool,
}

pub struct SimulatedPage {
    layout: PageLayout,
    state: RefCell<PageState>,
}

impl SimulatedPage {
    pub fn new(layout: PageLayout, scroll: ScrollConfig) -> Self {
        Self {
            layout,
            state: RefCell::new(PageState {
                animator: ScrollAnimator::new(scroll),
                next_id: 0,
                listeners: Vec::new(),
                observers: HashMap::new(),
                classes: HashMap::new(),
                queue: VecDeque::new(),
                smooth_scrolls: 0,
                offline: false,
            }),
        }
    }

    /// A page whose runtime refuses every subscription.
    pub fn offline(layout: PageLayout) -> Self {
        let page = Self::new(layout, ScrollConfig::default());
        page.state.borrow_mut().offline = true;
        page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn offset(&self) -> f64 {
        self.state.borrow().animator.current()
    }

    /// User scroll: jumps to `offset`, interrupting any smooth scroll.
    pub fn scroll_to(&self, offset: f64) {
        let offset = offset.clamp(0.0, self.layout.max_scroll());
        let mut state = self.state.borrow_mut();
        state.animator.jump_to(offset);
        self.after_scroll(&mut state);
    }

    /// Advance the clock by `dt`, moving any running smooth scroll.
    pub fn advance(&self, dt: Duration) {
        let mut state = self.state.borrow_mut();
        if state.animator.advance(dt).is_some() {
            self.after_scroll(&mut state);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().animator.is_animating()
    }

    pub fn animation_target(&self) -> Option<f64> {
        self.state.borrow().animator.target()
    }

    /// How many smooth scrolls have been requested so far.
    pub fn smooth_scroll_count(&self) -> usize {
        self.state.borrow().smooth_scrolls
    }

    pub fn drain_events(&self) -> Vec<HostEvent> {
        self.state.borrow_mut().queue.drain(..).collect()
    }

    pub fn has_class(&self, target: ElementHandle, class: &str) -> bool {
        self.state
            .borrow()
            .classes
            .get(&target)
            .is_some_and(|set| set.contains(class))
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Total number of (observer, target) subscriptions.
    pub fn observation_count(&self) -> usize {
        self.state
            .borrow()
            .observers
            .values()
            .map(|o| o.targets.len())
            .sum()
    }

    fn entry_for(&self, target: ElementHandle, offset: f64, options: &ObserverOptions) -> IntersectionEntry {
        let ratio = self
            .layout
            .node(target)
            .map(|node| {
                intersection_ratio(
                    node,
                    offset,
                    self.layout.viewport().height,
                    options.root_margin_bottom,
                )
            })
            .unwrap_or(0.0);
        IntersectionEntry {
            target,
            is_intersecting: ratio > 0.0 && ratio >= options.threshold,
            ratio,
        }
    }

    /// Queue scroll events and any observer threshold crossings.
    fn after_scroll(&self, state: &mut PageState) {
        let offset = state.animator.current();
        let scroll_events: Vec<_> = state
            .listeners
            .iter()
            .map(|&listener| HostEvent::Scroll { listener, offset })
            .collect();
        state.queue.extend(scroll_events);

        let mut crossings = Vec::new();
        for (&observer, record) in state.observers.iter_mut() {
            let mut entries = Vec::new();
            for (target, last) in record.targets.iter_mut() {
                let entry = self.entry_for(*target, offset, &record.options);
                if entry.is_intersecting != *last {
                    *last = entry.is_intersecting;
                    entries.push(entry);
                }
            }
            if !entries.is_empty() {
                crossings.push(HostEvent::Intersections { observer, entries });
            }
        }
        state.queue.extend(crossings);
    }
}

impl ViewHost for SimulatedPage {
    fn add_scroll_listener(&self) -> Result<ListenerId, HostError> {
        let mut state = self.state.borrow_mut();
        if state.offline {
            return Err(HostError::ScrollSignalUnavailable(
                "page runtime is offline".to_string(),
            ));
        }
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.listeners.push(id);
        Ok(id)
    }

    fn remove_scroll_listener(&self, listener: ListenerId) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|&l| l != listener);
    }

    fn create_observer(&self, options: ObserverOptions) -> Result<ObserverId, HostError> {
        let mut state = self.state.borrow_mut();
        if state.offline {
            return Err(HostError::ObserverUnavailable(
                "page runtime is offline".to_string(),
            ));
        }
        state.next_id += 1;
        let id = ObserverId(state.next_id);
        state.observers.insert(
            id,
            ObserverRecord {
                options,
                targets: Vec::new(),
            },
        );
        Ok(id)
    }

    fn observe(&self, observer: ObserverId, target: ElementHandle) {
        let mut state = self.state.borrow_mut();
        let offset = state.animator.current();
        let Some(record) = state.observers.get_mut(&observer) else {
            return;
        };
        if record.targets.iter().any(|(t, _)| *t == target) {
            return;
        }
        let entry = self.entry_for(target, offset, &record.options);
        record.targets.push((target, entry.is_intersecting));
        state.queue.push_back(HostEvent::Intersections {
            observer,
            entries: vec![entry],
        });
    }

    fn disconnect(&self, observer: ObserverId) {
        self.state.borrow_mut().observers.remove(&observer);
    }

    fn add_class(&self, target: ElementHandle, class: &str) {
        self.state
            .borrow_mut()
            .classes
            .entry(target)
            .or_default()
            .insert(class.to_string());
    }

    fn resolve_anchor(&self, id: &str) -> Option<ElementHandle> {
        self.layout.anchor(id).map(|node| node.handle)
    }

    fn scroll_into_view(&self, target: ElementHandle, behavior: ScrollBehavior) {
        let Some(node) = self.layout.node(target) else {
            return;
        };
        let destination = node.top.clamp(0.0, self.layout.max_scroll());
        let mut state = self.state.borrow_mut();
        match behavior {
            ScrollBehavior::Smooth => {
                state.smooth_scrolls += 1;
                let before = state.animator.current();
                state.animator.animate_to(destination);
                tracing::trace!(%target, destination, "smooth scroll started");
                // Smoothing disabled in config: the animator jumped.
                if !state.animator.is_animating() && state.animator.current() != before {
                    self.after_scroll(&mut state);
                }
            }
            ScrollBehavior::Instant => {
                state.animator.jump_to(destination);
                self.after_scroll(&mut state);
            }
        }
    }
}
