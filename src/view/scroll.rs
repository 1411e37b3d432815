//! Scroll position monitor.
//!
//! Derives the `scrolled` flag the navigation chrome is styled from. The
//! monitor recomputes on every scroll signal (no throttling) and reports a new
//! [`ScrollState`] only when the flag actually flips.

use super::host::{HostError, ListenerId, ScrollSubscription, ViewHost};
use serde::Serialize;
use std::rc::Rc;

/// Offsets strictly greater than this count as scrolled.
pub const SCROLLED_THRESHOLD_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollState {
    pub scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > SCROLLED_THRESHOLD_PX,
        }
    }
}

pub struct ScrollMonitor {
    state: ScrollState,
    subscription: ScrollSubscription,
}

impl ScrollMonitor {
    /// Subscribe to the host's scroll signal. Starts unscrolled regardless of
    /// the current offset; the first scroll event brings it up to date.
    pub fn mount(host: &Rc<dyn ViewHost>) -> Result<Self, HostError> {
        let subscription = ScrollSubscription::attach(host)?;
        tracing::debug!(listener = subscription.id().0, "scroll monitor mounted");
        Ok(Self {
            state: ScrollState::default(),
            subscription,
        })
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn listener(&self) -> ListenerId {
        self.subscription.id()
    }

    /// Handle one scroll signal. Returns the new state if it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ScrollState> {
        let next = ScrollState::from_offset(offset);
        if next == self.state {
            return None;
        }
        self.state = next;
        tracing::debug!(offset, scrolled = next.scrolled, "scroll state changed");
        Some(next)
    }

    /// Unsubscribe from the scroll signal.
    pub fn teardown(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::host::tests::{MockHost, RecordedOp, as_host};
    use proptest::prelude::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!ScrollState::from_offset(40.0).scrolled);
        assert!(ScrollState::from_offset(41.0).scrolled);
        assert!(ScrollState::from_offset(40.5).scrolled);
        assert!(!ScrollState::from_offset(0.0).scrolled);
    }

    #[test]
    fn starts_unscrolled() {
        let mock = MockHost::new();
        let monitor = ScrollMonitor::mount(&as_host(&mock)).unwrap();
        assert_eq!(monitor.state(), ScrollState { scrolled: false });
    }

    #[test]
    fn publishes_only_on_change() {
        let mock = MockHost::new();
        let mut monitor = ScrollMonitor::mount(&as_host(&mock)).unwrap();

        assert_eq!(monitor.on_scroll(10.0), None);
        assert_eq!(
            monitor.on_scroll(100.0),
            Some(ScrollState { scrolled: true })
        );
        assert_eq!(monitor.on_scroll(250.0), None);
        assert_eq!(
            monitor.on_scroll(0.0),
            Some(ScrollState { scrolled: false })
        );
    }

    #[test]
    fn teardown_unsubscribes() {
        let mock = MockHost::new();
        let monitor = ScrollMonitor::mount(&as_host(&mock)).unwrap();
        let id = monitor.listener();
        monitor.teardown();

        assert_eq!(
            mock.count(|op| *op == RecordedOp::RemoveScrollListener(id)),
            1
        );
    }

    #[test]
    fn missing_scroll_signal_is_an_error() {
        let mock = MockHost::new();
        mock.fail_scroll.set(true);
        assert!(ScrollMonitor::mount(&as_host(&mock)).is_err());
    }

    proptest! {
        #[test]
        fn scrolled_iff_past_threshold(offset in 0.0f64..10_000.0) {
            prop_assert_eq!(ScrollState::from_offset(offset).scrolled, offset > 40.0);
        }

        #[test]
        fn monitor_tracks_last_offset(offsets in proptest::collection::vec(0u32..400, 1..40)) {
            let mock = MockHost::new();
            let mut monitor = ScrollMonitor::mount(&as_host(&mock)).unwrap();
            for offset in &offsets {
                monitor.on_scroll(*offset as f64);
            }
            let last = *offsets.last().unwrap();
            prop_assert_eq!(monitor.state().scrolled, last > 40);
        }
    }
}
