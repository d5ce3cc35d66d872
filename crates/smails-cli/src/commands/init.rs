//! Initialize a new smails project

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Run the init command
pub async fn run(path: &str, name: Option<&str>) -> Result<()> {
    let project_dir = Path::new(path);

    // Create directory if it doesn't exist
    if !project_dir.exists() {
        fs::create_dir_all(project_dir)?;
    }

    // Get absolute path for deriving name
    let abs_path = project_dir.canonicalize()?;

    // Derive project name from directory name if not provided
    let project_name = match name {
        Some(n) => n.to_string(),
        None => abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not determine project name from path"))?,
    };

    // Check if already initialized
    if project_dir.join("smails.yaml").exists() {
        anyhow::bail!(
            "Directory '{}' already contains a smails.yaml",
            project_dir.display()
        );
    }

    tracing::info!("Creating new smails project: {}", project_name);

    let mail_dir = project_dir.join("mails/hello-world");
    fs::create_dir_all(&mail_dir)?;

    // Create smails.yaml
    let config = format!(
        r#"# smails Project Configuration
name: {project_name}
version: "0.1.0"

mails_dir: mails
output_dir: build

# Class prefix injected by the component compiler to scope styles
scoping_prefix: "s-"

transpiler:
  disable_comments: false

# Global variables available in templates as `vars`
vars:
  company: {project_name}
"#
    );
    fs::write(project_dir.join("smails.yaml"), config)?;

    // Create example mail
    let body = r#"<mj-section>
  <mj-column>
    <mj-text css-class="greeting">Hello {{ name }}!</mj-text>
    {% for button in buttons %}
    <mj-button background-color="{{ button.color }}">{{ button.label }}</mj-button>
    {% endfor %}
    <mj-text>Sent by {{ vars.company }}</mj-text>
  </mj-column>
</mj-section>
"#;
    fs::write(mail_dir.join("Mail.mjml"), body)?;

    let head = "<mj-title>Hello {{ name }}</mj-title>\n";
    fs::write(mail_dir.join("head.mjml"), head)?;

    let style = ".greeting div { font-size: 20px !important; }\n";
    fs::write(mail_dir.join("style.css"), style)?;

    let props = r##"# Default props used by `smails build` and `smails render`
name: world
buttons:
  - label: Discord
    color: "#5662f6"
  - label: LinkedIn
    color: "#0a66c2"
  - label: GitHub
    color: "#333"
"##;
    fs::write(mail_dir.join("props.yaml"), props)?;

    // Create .gitignore
    let gitignore = r#"# Rendered mails
build/

# IDE
.idea/
.vscode/
*.swp
"#;
    fs::write(project_dir.join(".gitignore"), gitignore)?;

    tracing::info!(
        "✓ Created project '{}' at {}",
        project_name,
        abs_path.display()
    );
    tracing::info!("");
    tracing::info!("Next steps:");
    if path != "." {
        tracing::info!("  cd {}", project_dir.display());
    }
    tracing::info!("  smails validate           # Check configuration");
    tracing::info!("  smails build              # Render every mail");

    Ok(())
}
