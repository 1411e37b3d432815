//! Runs the `folio` binary end to end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run folio")
}

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_writes_index_and_assets() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = folio(&[
        "build",
        "--source",
        fixtures().to_str().unwrap(),
        "--output",
        dist.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("Test Person"));
    assert!(html.contains(r#"data-reveal="projects-body""#));
    assert!(dist.join("favicon.svg").exists());
    assert!(stdout(&out).contains("8 reveal regions"));
}

#[test]
fn build_with_empty_source_uses_sample_profile() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = folio(&[
        "build",
        "--source",
        tmp.path().to_str().unwrap(),
        "--output",
        dist.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("Sam Carter"));
}

#[test]
fn check_rejects_unknown_config_keys() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[scroll]\nspeed = 3\n").unwrap();
    let out = folio(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("speed"));
}

#[test]
fn check_lists_sections() {
    let out = folio(&["check", "--source", fixtures().to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Test Person (tperson)"));
    assert!(text.contains("003 Projects → #projects (2 cards)"));
    assert!(text.contains("scroll: ease-out, 300ms"));
}

#[test]
fn gen_config_is_valid_toml() {
    let out = folio(&["gen-config"]);
    assert!(out.status.success());
    let value: toml::Value = toml::from_str(&stdout(&out)).unwrap();
    assert!(value.get("scroll").is_some());
}

#[test]
fn simulate_prints_one_line_per_step() {
    let out = folio(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "scroll=100",
        "toggle",
        "nav=about",
        "wait=1000",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("menu open"));
    assert!(lines[2].contains("menu closed"));
    assert!(lines[2].ends_with("animating"));
    assert!(!lines[3].ends_with("animating"));
}

#[test]
fn simulate_json_trace() {
    let out = folio(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "--json",
        "nav=missing-id",
    ]);
    assert!(out.status.success());
    let trace: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let first = &trace[0];
    assert_eq!(first["step"], "nav=missing-id");
    assert_eq!(first["state"]["menu_open"], false);
    assert_eq!(first["state"]["animating"], false);
    assert_eq!(first["state"]["offset"], 0.0);
}

#[test]
fn simulate_html_renders_final_state() {
    let tmp = TempDir::new().unwrap();
    let page = tmp.path().join("after.html");
    let out = folio(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "--html",
        page.to_str().unwrap(),
        "scroll=400",
        "toggle",
    ]);
    assert!(out.status.success());
    let html = fs::read_to_string(page).unwrap();
    assert!(html.contains(r#"class="site-nav scrolled""#));
    assert!(html.contains(r#"class="nav-links open""#));
    assert!(html.contains("reveal visible"));
}

#[test]
fn simulate_idle_wait_of_any_length_returns() {
    let out = folio(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "wait=18446744073709551615",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).lines().count(), 1);
}

#[test]
fn simulate_rejects_bad_steps() {
    let out = folio(&["simulate", "jump=3"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("jump=3"));
}
