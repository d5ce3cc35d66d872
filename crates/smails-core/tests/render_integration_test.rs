//! Integration tests for the complete mail rendering pipeline
//!
//! Tests use temporary directories with real file fixtures to verify:
//! - Project config loading
//! - Mail discovery and default props
//! - Template rendering with project vars
//! - Scoping class cleanup and MJML transpilation through mrml

use smails_core::{Component, Config, Props, Rendered, render};
use tempfile::TempDir;

/// Helper to create a temporary project with one mail.
///
/// Returns a `TempDir` that automatically cleans up when dropped.
fn setup_project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("smails.yaml"), config).unwrap();

    let mail = dir.path().join("mails/hello-world");
    std::fs::create_dir_all(&mail).unwrap();
    std::fs::write(
        mail.join("Mail.mjml"),
        r#"<mj-section class="s-h1x9"><mj-column><mj-text class="s-h1x9">Hello {{ name }} from {{ vars.company }}</mj-text></mj-column></mj-section>"#,
    )
    .unwrap();
    std::fs::write(mail.join("head.mjml"), "<mj-title>{{ title }}</mj-title>").unwrap();
    std::fs::write(mail.join("style.css"), ".greeting { color: #5662f6; }").unwrap();
    std::fs::write(mail.join("props.yaml"), "name: World\ntitle: Welcome\n").unwrap();
    dir
}

// =============================================================================
// Complete Pipeline Tests
// =============================================================================

#[test]
fn test_complete_pipeline() {
    let dir = setup_project(
        r#"
name: integration-test
vars:
  company: Acme
"#,
    );

    let config = Config::load(dir.path()).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["hello-world"]);

    let entry = catalog.get("hello-world").unwrap();
    let props = entry.default_props().unwrap();
    let mail = config.load_mail("hello-world").unwrap();

    let bridge = config.bridge().unwrap();
    let mjml = bridge.assemble(&mail, &props).unwrap();
    assert!(!mjml.contains("s-h1x9"));
    assert!(mjml.contains("<mj-style>.greeting { color: #5662f6; }</mj-style>"));
    assert!(mjml.contains("<mj-title>Welcome</mj-title>"));

    let html = bridge.render(&mail, &props).unwrap();
    assert!(html.contains("Hello World from Acme"));
    assert!(html.contains("Welcome"));
    assert!(!html.contains("s-h1x9"));
}

#[test]
fn test_props_override_defaults() {
    let dir = setup_project("name: override-test\nvars:\n  company: Acme\n");
    let config = Config::load(dir.path()).unwrap();
    let mail = config.load_mail("hello-world").unwrap();

    let mut props = config
        .catalog()
        .unwrap()
        .get("hello-world")
        .unwrap()
        .default_props()
        .unwrap();
    props.insert("name".to_string(), "Ann".into());

    let html = config.bridge().unwrap().render(&mail, &props).unwrap();
    assert!(html.contains("Hello Ann from Acme"));
}

#[test]
fn test_custom_scoping_prefix_from_config() {
    let dir = setup_project("name: prefix-test\nscoping_prefix: \"svelte-\"\n");
    let config = Config::load(dir.path()).unwrap();
    let mail = config.load_mail("hello-world").unwrap();

    // The default `s-` markers are left alone when another prefix is configured
    let mjml = config
        .bridge()
        .unwrap()
        .assemble(&mail, &Props::new())
        .unwrap();
    assert!(mjml.contains(r#"class="s-h1x9""#));
}

// =============================================================================
// Custom Component Tests
// =============================================================================

struct Greeting;

struct GreetingProps {
    name: String,
}

impl Component for Greeting {
    type Props = GreetingProps;
    type Error = smails_core::Error;

    fn render(&self, props: &GreetingProps) -> smails_core::Result<Rendered> {
        Ok(Rendered::new(
            format!(
                r#"<mj-section class="s-g1"><mj-column><mj-text>Hi {}</mj-text></mj-column></mj-section>"#,
                props.name
            ),
            "",
            "",
        ))
    }
}

#[test]
fn test_typed_props_component() {
    let html = render(
        &Greeting,
        &GreetingProps {
            name: "typed".to_string(),
        },
    )
    .unwrap();
    assert!(html.contains("Hi typed"));
}
