//! Shared test utilities for the folio test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_content();
//! let report = generate(&tmp.path().join("content"), &tmp.path().join("dist")).unwrap();
//!
//! let layout = desktop_layout();
//! let about = handle(&layout, "about-header");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Profile;
use crate::sim::{PageLayout, Viewport};
use crate::types::ElementHandle;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to `<tmp>/content` and return the temp root.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, &tmp.path().join("content")).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Layout lookups
// =========================================================================

pub const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// Layout of the sample profile at desktop size.
pub fn desktop_layout() -> PageLayout {
    PageLayout::from_profile(&Profile::sample(), DESKTOP)
}

/// Handle of the node named `name`. Panics with the known names if absent.
pub fn handle(layout: &PageLayout, name: &str) -> ElementHandle {
    match layout.find(name) {
        Some(node) => node.handle,
        None => {
            let names: Vec<_> = layout.nodes().iter().map(|n| n.name.as_str()).collect();
            panic!("no node named '{name}'. Known: {names:?}");
        }
    }
}

// =========================================================================
// Tests for the helpers themselves
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_content_copies_fixture_tree() {
        let tmp = setup_content();
        let content = tmp.path().join("content");
        assert!(content.join("profile.toml").exists());
        assert!(content.join("assets/fonts/body.woff2").exists());
    }

    #[test]
    #[should_panic(expected = "no node named 'nope'")]
    fn handle_panics_on_unknown_name() {
        handle(&desktop_layout(), "nope");
    }
}
