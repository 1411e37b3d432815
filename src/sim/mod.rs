//! Deterministic in-process host for the profile view.
//!
//! [`SimulatedPage`] implements [`ViewHost`](crate::view::ViewHost) over a
//! [`PageLayout`]: it tracks a scroll offset, animates smooth scrolls on an
//! explicit clock, computes visibility against the viewport, and queues the
//! resulting host events. [`Session`] wires a mounted view to it.
//!
//! Nothing here depends on wall-clock time, so `folio simulate` and the
//! integration tests are reproducible.

pub mod animation;
pub mod layout;
pub mod page;
pub mod script;
pub mod session;

pub use animation::{Easing, ScrollAnimator};
pub use layout::{LayoutNode, NodeKind, PageLayout, Viewport};
pub use page::SimulatedPage;
pub use script::{SimulateError, Step, parse_steps};
pub use session::{Session, Snapshot, run_script};
