use std::fs;
use std::path::Path;

use docsite::Site;
use docsite::config::{Config, ValidationError};

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project(root: &Path) {
    write(
        root,
        "docsite.yml",
        "include:
  - theme.yml
site:
  title: Kuve
  url: https://germainlefebvre4.github.io/
  base_url: kuve
presets:
  - name: classic
    options:
      docs:
        sidebar_path: nav/sidebars.yml
",
    );
    write(
        root,
        "theme.yml",
        "theme_config:
  navbar:
    items:
      - type: doc_sidebar
        sidebar_id: tutorial
        label: Documentation
",
    );
    write(
        root,
        "nav/sidebars.yml",
        "tutorial:
  - intro
  - type: category
    label: Getting Started
    items:
      - getting-started/installation
",
    );
    write(
        root,
        "features.yml",
        "- title: Auto-Detection
  icon: img/undraw_docusaurus_react.svg
  description: Works with *GKE*, EKS and AKS.
",
    );
    write(root, "docs/intro.md", "# Intro\n");
    write(root, "docs/getting-started/installation.mdx", "# Install\n");
}

#[test]
fn load_and_write() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let site = Site::load(&config).unwrap();
    assert_eq!(site.config.base_url, "/kuve/");
    assert_eq!(site.config.url, "https://germainlefebvre4.github.io");
    assert_eq!(site.sidebars.len(), 1);
    assert_eq!(site.features.len(), 1);
    site.check_docs(&config).unwrap();

    let dest = config.destination_path();
    site.write(&dest).unwrap();

    let descriptor: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("site.json")).unwrap()).unwrap();
    assert_eq!(descriptor["title"], "Kuve");
    assert_eq!(descriptor["on_broken_links"], "throw");
    assert_eq!(
        descriptor["options"]["docs"]["sidebar_path"],
        "nav/sidebars.yml"
    );

    let sidebars: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("sidebars.json")).unwrap()).unwrap();
    assert_eq!(sidebars["tutorial"][0]["id"], "intro");
    assert_eq!(sidebars["tutorial"][1]["key"], "getting-started");

    let features: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("features.json")).unwrap()).unwrap();
    assert_eq!(features[0]["heading"], "Auto-Detection");

    let html = fs::read_to_string(dest.join("features.html")).unwrap();
    assert!(html.contains("<em>GKE</em>"), "{html}");
    assert!(html.contains(r#"src="/kuve/img/undraw_docusaurus_react.svg""#));
}

#[test]
fn missing_doc_is_thrown() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());
    fs::remove_file(dir.path().join("docs/intro.md")).unwrap();

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let site = Site::load(&config).unwrap();
    let err = site.check_docs(&config).unwrap_err();
    assert!(err.to_string().contains("`intro`"), "{err}");
}

#[test]
fn navbar_needs_declared_sidebar() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());
    write(dir.path(), "nav/sidebars.yml", "api:\n  - intro\n");

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let err = Site::load(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::UnknownSidebar {
            label: "Documentation".to_owned(),
            sidebar_id: "tutorial".to_owned(),
        })
    );
}

#[test]
fn empty_category_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());
    write(
        dir.path(),
        "nav/sidebars.yml",
        "tutorial:
  - intro
  - type: category
    label: Guide
",
    );

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let err = Site::load(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyCategory {
            sidebar: "tutorial".to_owned(),
            label: "Guide".to_owned(),
        })
    );
}

#[test]
fn named_features_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());
    let main = fs::read_to_string(dir.path().join("docsite.yml")).unwrap();
    write(dir.path(), "docsite.yml", &format!("features: home.yml\n{main}"));

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let err = Site::load(&config).unwrap_err();
    assert!(err.to_string().contains("home.yml"), "{err}");
}

#[test]
fn default_features_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());
    fs::remove_file(dir.path().join("features.yml")).unwrap();

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let site = Site::load(&config).unwrap();
    assert!(site.features.is_empty());
}

#[test]
fn navigation_is_written() {
    let dir = tempfile::tempdir().unwrap();
    project(dir.path());

    let config = Config::from_file(dir.path().join("docsite.yml")).unwrap();
    let site = Site::load(&config).unwrap();
    let dest = config.destination_path();
    site.write(&dest).unwrap();

    let navigation: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("navigation.json")).unwrap()).unwrap();
    assert_eq!(navigation["intro"]["sidebar"], "tutorial");
    assert_eq!(navigation["intro"]["previous"], serde_json::Value::Null);
    assert_eq!(
        navigation["intro"]["next"]["id"],
        "getting-started/installation"
    );
    assert_eq!(
        navigation["getting-started/installation"]["previous"]["title"],
        "Intro"
    );
}
