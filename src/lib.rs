//! # Folio
//!
//! A single-page personal profile site: a static renderer for the page and
//! the client-side view state that makes it feel alive.
//!
//! # Architecture: Renderer + View Layer
//!
//! ```text
//! content/profile.toml ─┐
//! content/config.toml ──┼─ generate ─→ dist/index.html   (static render)
//! content/assets/ ──────┘
//!
//! host events ─→ view::ProfileView ─→ ViewFlags / "visible" classes
//!   (scroll, visibility,      │
//!    link clicks)             └─→ render pass (class membership)
//! ```
//!
//! The renderer never holds state. The view layer owns three small pieces of
//! it (scrolled flag, menu open flag, revealed regions) and talks to the page
//! only through the [`view::ViewHost`] trait: subscribe to scroll, observe
//! visibility, add a class, resolve an anchor, scroll an element into view.
//! [`sim::SimulatedPage`] implements that trait deterministically so the view
//! can be driven from the CLI and from tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | Scroll monitor, reveal engine, navigation controller, and the host trait they share |
//! | [`sim`] | Simulated host: page geometry, smooth-scroll animation, scripted sessions |
//! | [`generate`] | Renders the profile into `index.html` with Maud |
//! | [`content`] | `profile.toml` loading and validation |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Element handles, anchors, and view flags shared across modules |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Resources Are Guards
//!
//! The scroll subscription and the visibility observer are RAII guards owned
//! by the mounted view. Dropping the view, unmounting it, or failing halfway
//! through mounting all release them. There is no separate teardown list to
//! keep in sync.
//!
//! ## Monotonic Reveal
//!
//! A region that has been revealed stays revealed. The registry only ever
//! flips `visible` from false to true, and registration is idempotent per
//! element, so repeated render passes never observe an element twice.
//!
//! ## Explicit Clock
//!
//! Smooth scrolling is animated against time the caller advances. The same
//! script always yields the same trace.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error, interpolation is escaped by default, and there is no
//! template directory to ship.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod sim;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
