//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Sam Carter (scarter)
//!     001 About → #about (3 paragraphs, 4 details)
//!     002 Experience → #experience (3 entries)
//!     003 Projects → #projects (4 cards)
//!     004 Contact → #contact (3 links)
//!
//! Config
//!     scroll: cubic, 450ms
//!     viewport: 1280×800
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html (18342 bytes, 4 sections, 8 reveal regions)
//! Assets
//!     favicon.svg
//!     fonts/body.woff2
//! ```
//!
//! ## Simulate
//!
//! ```text
//! 001 scroll=300     offset    300  scrolled  menu closed  revealed 1/8
//! 002 nav=projects   offset    300  scrolled  menu closed  revealed 1/8  animating
//! ```

use crate::config::SiteConfig;
use crate::content::Profile;
use crate::generate::GenerateReport;
use crate::sim::{Snapshot, Step};
use crate::types::Anchor;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// One-line summary of what a section holds.
fn section_detail(profile: &Profile, anchor: Anchor) -> String {
    match anchor {
        Anchor::About => format!(
            "{}, {}",
            plural(profile.about.paragraphs.len(), "paragraph", "paragraphs"),
            plural(profile.about.details.len(), "detail", "details")
        ),
        Anchor::Experience => plural(profile.experience.entries.len(), "entry", "entries"),
        Anchor::Projects => plural(profile.projects.cards.len(), "card", "cards"),
        Anchor::Contact => plural(profile.contact.links.len(), "link", "links"),
        Anchor::Top => String::new(),
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the content inventory printed by `folio check`.
pub fn format_check_output(profile: &Profile, config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Profile".to_string()];
    lines.push(format!("{}{} ({})", indent(1), profile.name, profile.logo));
    for (i, anchor) in Anchor::SECTIONS.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {} ({})",
            indent(1),
            format_index(i + 1),
            anchor.label(),
            anchor.href(),
            section_detail(profile, *anchor)
        ));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    let easing = serde_json::to_value(config.scroll.easing)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    lines.push(format!(
        "{}scroll: {}, {}ms",
        indent(1),
        easing,
        config.scroll.duration_ms
    ));
    lines.push(format!(
        "{}viewport: {}×{}",
        indent(1),
        config.viewport.width,
        config.viewport.height
    ));
    lines
}

pub fn print_check_output(profile: &Profile, config: &SiteConfig) {
    for line in format_check_output(profile, config) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the summary of a generate run. Paths are shown relative to `output`.
pub fn format_build_output(report: &GenerateReport, output: &Path) -> Vec<String> {
    let index = report
        .index
        .strip_prefix(output)
        .unwrap_or(&report.index)
        .display()
        .to_string();
    let mut lines = vec![format!(
        "{} ({} bytes, {}, {})",
        index,
        report.bytes,
        plural(report.sections, "section", "sections"),
        plural(report.reveal_regions, "reveal region", "reveal regions")
    )];
    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }
    lines
}

pub fn print_build_output(report: &GenerateReport, output: &Path) {
    for line in format_build_output(report, output) {
        println!("{}", line);
    }
}

// ============================================================================
// simulate
// ============================================================================

/// Format one line of a simulated session trace.
pub fn format_snapshot_line(index: usize, step: &Step, snapshot: &Snapshot) -> String {
    let mut line = format!(
        "{} {:<14} offset {:>6.0}  {}  {}  revealed {}/{}",
        format_index(index),
        step.to_string(),
        snapshot.offset,
        if snapshot.scrolled { "scrolled" } else { "top     " },
        if snapshot.menu_open { "menu open  " } else { "menu closed" },
        snapshot.revealed.len(),
        snapshot.regions
    );
    if snapshot.animating {
        line.push_str("  animating");
    }
    line
}

pub fn format_simulate_output(trace: &[(Step, Snapshot)]) -> Vec<String> {
    trace
        .iter()
        .enumerate()
        .map(|(i, (step, snap))| format_snapshot_line(i + 1, step, snap))
        .collect()
}

pub fn print_simulate_output(trace: &[(Step, Snapshot)]) {
    for line in format_simulate_output(trace) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn snapshot(offset: f64, scrolled: bool, animating: bool) -> Snapshot {
        Snapshot {
            offset,
            scrolled,
            menu_open: false,
            animating,
            revealed: vec!["about-header".to_string()],
            regions: 8,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn plural_handles_one() {
        assert_eq!(plural(1, "entry", "entries"), "1 entry");
        assert_eq!(plural(4, "entry", "entries"), "4 entries");
    }

    #[test]
    fn check_lists_sections_in_page_order() {
        let lines = format_check_output(&Profile::sample(), &SiteConfig::default());
        assert_eq!(lines[0], "Profile");
        assert_eq!(lines[1], "    Sam Carter (scarter)");
        assert!(lines[2].starts_with("    001 About → #about"));
        assert!(lines[3].contains("(3 entries)"));
        assert!(lines[4].contains("(4 cards)"));
        assert!(lines[5].contains("(3 links)"));
        assert!(lines.contains(&"    scroll: cubic, 450ms".to_string()));
        assert!(lines.contains(&"    viewport: 1280×800".to_string()));
    }

    #[test]
    fn build_output_is_relative_to_output_dir() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            bytes: 1200,
            sections: 4,
            reveal_regions: 8,
            assets: vec![PathBuf::from("favicon.svg")],
        };
        let lines = format_build_output(&report, Path::new("dist"));
        assert_eq!(
            lines,
            vec![
                "index.html (1200 bytes, 4 sections, 8 reveal regions)".to_string(),
                "Assets".to_string(),
                "    favicon.svg".to_string(),
            ]
        );
    }

    #[test]
    fn build_output_without_assets_is_one_line() {
        let report = GenerateReport {
            index: PathBuf::from("out/index.html"),
            bytes: 10,
            sections: 4,
            reveal_regions: 8,
            assets: vec![],
        };
        assert_eq!(format_build_output(&report, Path::new("out")).len(), 1);
    }

    #[test]
    fn snapshot_line_shows_state() {
        let line = format_snapshot_line(1, &Step::Scroll(300.0), &snapshot(300.0, true, false));
        assert!(line.starts_with("001 scroll=300"));
        assert!(line.contains("offset    300"));
        assert!(line.contains("scrolled"));
        assert!(line.contains("menu closed"));
        assert!(line.ends_with("revealed 1/8"));
    }

    #[test]
    fn snapshot_line_flags_animation() {
        let step = Step::Navigate("projects".to_string());
        let line = format_snapshot_line(2, &step, &snapshot(12.4, false, true));
        assert!(line.contains("offset     12"));
        assert!(line.ends_with("animating"));
    }

    #[test]
    fn simulate_output_numbers_steps() {
        let trace = vec![
            (Step::Toggle, snapshot(0.0, false, false)),
            (Step::Toggle, snapshot(0.0, false, false)),
        ];
        let lines = format_simulate_output(&trace);
        assert!(lines[0].starts_with("001 toggle"));
        assert!(lines[1].starts_with("002 toggle"));
    }
}
