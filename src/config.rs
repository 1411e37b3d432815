//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` file found in
//! the content directory. User files are sparse: every key is optional and is
//! merged over the stock defaults before deserialization.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = ""                # <title>; empty = use the profile name
//! lang = "en"
//! description = ""          # <meta name="description">
//!
//! [scroll]
//! duration_ms = 450         # Smooth-scroll animation length (0 = instant)
//! easing = "cubic"          # linear | cubic | quintic | ease-out
//!
//! [viewport]
//! width = 1280              # Simulated viewport used by `folio simulate`
//! height = 800
//!
//! [colors.light]
//! background = "#fafaf9"
//! surface = "#ffffff"
//! text = "#1c1917"
//! text_muted = "#78716c"
//! border = "#e7e5e4"
//! accent = "#2563eb"
//!
//! [colors.dark]
//! background = "#0c0a09"
//! surface = "#1c1917"
//! text = "#f5f5f4"
//! text_muted = "#a8a29e"
//! border = "#292524"
//! accent = "#60a5fa"
//! ```
//!
//! The scrolled threshold, reveal threshold, and reveal margin are fixed
//! policy and deliberately not configurable.
//!
//! Unknown keys are rejected to catch typos early.

use crate::sim::animation::Easing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata.
    pub site: SiteMeta,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Smooth-scroll animation used for anchor navigation.
    pub scroll: ScrollConfig,
    /// Viewport size for simulated sessions.
    pub viewport: ViewportConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        if self.scroll.duration_ms > 10_000 {
            return Err(ConfigError::Validation(
                "scroll.duration_ms must be at most 10000".into(),
            ));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Validation(
                "viewport.width and viewport.height must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Page title. Empty means "use the profile name".
    pub title: String,
    /// `lang` attribute on `<html>`.
    pub lang: String,
    /// Meta description. Omitted from the page when empty.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: "en".to_string(),
            description: String::new(),
        }
    }
}

/// Smooth-scroll animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Animation length in milliseconds. Zero jumps instantly.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 450,
            easing: Easing::Cubic,
        }
    }
}

impl ScrollConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn is_smooth(&self) -> bool {
        self.duration_ms > 0 && self.easing != Easing::None
    }
}

/// Simulated viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Cards, the scrolled nav bar, and the open mobile menu.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Labels, dates, and secondary copy.
    pub text_muted: String,
    /// Dividers and card borders.
    pub border: String,
    /// Links, buttons, and tags.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fafaf9".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1c1917".to_string(),
            text_muted: "#78716c".to_string(),
            border: "#e7e5e4".to_string(),
            accent: "#2563eb".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0c0a09".to_string(),
            surface: "#1c1917".to_string(),
            text: "#f5f5f4".to_string(),
            text_muted: "#a8a29e".to_string(),
            border: "#292524".to_string(),
            accent: "#60a5fa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `dir/file_name` as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_toml(dir: &Path, file_name: &str) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(file_name);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from the content directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_toml(root, "config.toml")?;
    let config = resolve_config(overlay)?;
    tracing::debug!(root = %root.display(), "config loaded");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# <title> of the page. Leave empty to use the profile name.
title = ""

# lang attribute on <html>.
lang = "en"

# <meta name="description">. Omitted when empty.
description = ""

# ---------------------------------------------------------------------------
# Smooth scrolling for in-page navigation
# ---------------------------------------------------------------------------
[scroll]
# Animation length in milliseconds. 0 jumps straight to the target.
duration_ms = 450

# Easing curve: "none", "linear", "cubic", "quintic", or "ease-out".
easing = "cubic"

# ---------------------------------------------------------------------------
# Viewport used by `folio simulate`
# ---------------------------------------------------------------------------
[viewport]
width = 1280
height = 800

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fafaf9"
surface = "#ffffff"      # Cards, scrolled nav bar, open mobile menu
text = "#1c1917"
text_muted = "#78716c"   # Labels, dates, secondary copy
border = "#e7e5e4"
accent = "#2563eb"       # Links, buttons, tags

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0a09"
surface = "#1c1917"
text = "#f5f5f4"
text_muted = "#a8a29e"
border = "#292524"
accent = "#60a5fa"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_variables(&colors.light, "    "),
        dark = color_variables(&colors.dark, "        "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("bg", &scheme.background),
        ("surface", &scheme.surface),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_validates() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn default_scroll_is_smooth() {
        let config = SiteConfig::default();
        assert!(config.scroll.is_smooth());
        assert_eq!(config.scroll.duration(), Duration::from_millis(450));
    }

    #[test]
    fn zero_duration_is_not_smooth() {
        let scroll = ScrollConfig {
            duration_ms: 0,
            ..Default::default()
        };
        assert!(!scroll.is_smooth());
    }

    #[test]
    fn parse_partial_config() {
        let overlay: toml::Value = toml::from_str(
            r##"
            [colors.light]
            background = "#f0f0f0"
            "##,
        )
        .unwrap();
        let config = resolve_config(Some(overlay)).unwrap();

        assert_eq!(config.colors.light.background, "#f0f0f0");
        // Untouched keys keep stock values
        assert_eq!(config.colors.light.text, "#1c1917");
        assert_eq!(config.colors.dark.background, "#0c0a09");
        assert_eq!(config.viewport.height, 800);
    }

    #[test]
    fn parse_scroll_settings() {
        let overlay: toml::Value = toml::from_str(
            r#"
            [scroll]
            duration_ms = 200
            easing = "ease-out"
            "#,
        )
        .unwrap();
        let config = resolve_config(Some(overlay)).unwrap();

        assert_eq!(config.scroll.duration_ms, 200);
        assert_eq!(config.scroll.easing, Easing::EaseOut);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let overlay: toml::Value = toml::from_str(
            r#"
            [scroll]
            threshold = 80
            "#,
        )
        .unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_viewport_fails_validation() {
        let overlay: toml::Value = toml::from_str("[viewport]\nheight = 0").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\ntitle = \"Portfolio\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Portfolio");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site\ntitle = ").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(Some(value)).unwrap();
        let default = SiteConfig::default();

        assert_eq!(config.scroll, default.scroll);
        assert_eq!(config.viewport, default.viewport);
        assert_eq!(config.colors.dark.accent, default.colors.dark.accent);
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);

        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str("items = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("items = [9]").unwrap();
        let merged = merge_toml(base, overlay);

        assert_eq!(merged["items"].as_array().map(|a| a.len()), Some(1));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for name in ["bg", "surface", "text", "text-muted", "border", "accent"] {
            assert!(css.contains(&format!("--color-{name}:")), "missing {name}");
        }
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-accent: #60a5fa;"));
    }
}
