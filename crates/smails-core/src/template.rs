//! File-based mail components
//!
//! A mail lives in its own directory:
//!
//! ```text
//! mails/hello-world/
//! ├── Mail.mjml    # body template (required)
//! ├── head.mjml    # head template (optional)
//! ├── style.css    # stylesheet (optional)
//! └── props.yaml   # default props (optional, see `catalog`)
//! ```
//!
//! Templates are rendered with minijinja. Props are available as top-level
//! variables and project vars under `vars`.

use std::path::Path;

use minijinja::{AutoEscape, Environment};
use serde_json::Value;

use crate::component::{Component, Props, Rendered};
use crate::error::{Error, Result};

/// File name of the body template inside a mail directory
pub const BODY_TEMPLATE: &str = "Mail.mjml";
/// File name of the optional head template
pub const HEAD_TEMPLATE: &str = "head.mjml";
/// File name of the optional stylesheet
pub const STYLESHEET: &str = "style.css";

/// A mail component backed by minijinja templates
pub struct TemplateComponent {
    name: String,
    env: Environment<'static>,
    has_head: bool,
    css: String,
    vars: Props,
}

impl TemplateComponent {
    /// Load a mail component from its directory.
    ///
    /// All templates are compiled here, so syntax errors surface before the
    /// first render.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let body_path = dir.join(BODY_TEMPLATE);
        if !body_path.is_file() {
            return Err(Error::MailNotFound {
                name,
                path: body_path.display().to_string(),
            });
        }

        let body = std::fs::read_to_string(&body_path)?;
        let head = read_optional(&dir.join(HEAD_TEMPLATE))?;
        let css = read_optional(&dir.join(STYLESHEET))?.unwrap_or_default();

        tracing::debug!("Loaded mail '{}' from {}", name, dir.display());
        Self::from_parts(name, body, head, css)
    }

    /// Build a component from in-memory sources
    pub fn from_parts(
        name: impl Into<String>,
        body: impl Into<String>,
        head: Option<String>,
        css: impl Into<String>,
    ) -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template_owned(BODY_TEMPLATE, body.into())?;

        let has_head = head.is_some();
        if let Some(head) = head {
            env.add_template_owned(HEAD_TEMPLATE, head)?;
        }

        Ok(Self {
            name: name.into(),
            env,
            has_head,
            css: css.into(),
            vars: Props::new(),
        })
    }

    /// Expose project variables to the templates as `vars`
    pub fn with_vars(mut self, vars: Props) -> Self {
        self.vars = vars;
        self
    }

    /// Mail name (the directory name when loaded from disk)
    pub fn name(&self) -> &str {
        &self.name
    }

    fn context(&self, props: &Props) -> Props {
        let mut ctx = props.clone();
        if !ctx.contains_key("vars") {
            ctx.insert("vars".to_string(), Value::Object(self.vars.clone()));
        }
        ctx
    }
}

impl Component for TemplateComponent {
    type Props = Props;
    type Error = Error;

    fn render(&self, props: &Props) -> Result<Rendered> {
        let ctx = self.context(props);

        let html = self.env.get_template(BODY_TEMPLATE)?.render(&ctx)?;
        let head = if self.has_head {
            self.env.get_template(HEAD_TEMPLATE)?.render(&ctx)?
        } else {
            String::new()
        };

        Ok(Rendered::new(html, self.css.clone(), head))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if path.is_file() {
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}
