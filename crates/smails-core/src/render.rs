//! Component to email HTML bridge
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Component  │────▶│   Strip     │────▶│  Assemble   │────▶│ Transpile   │
//! │  (SSR)      │     │  s-classes  │     │   MJML      │     │  to HTML    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```

use crate::component::{Component, Rendered};
use crate::error::Error;
use crate::scoping::ScopingClasses;
use crate::transpiler::{MrmlTranspiler, Transpiler};

/// Render a component as email-ready HTML using the default bridge.
///
/// Component failures are returned as-is. Transpiler problems that still
/// produce HTML are logged as warnings.
pub fn render<C>(component: &C, props: &C::Props) -> Result<String, C::Error>
where
    C: Component + ?Sized,
    C::Error: From<Error>,
{
    Bridge::<MrmlTranspiler>::default().render(component, props)
}

/// Wrap cleaned component output in an MJML document.
///
/// The head markup and the stylesheet go in `<mj-head>`, the body fragment
/// in `<mj-body>`.
pub fn assemble_document(head: &str, css: &str, body: &str) -> String {
    format!(
        "<mjml>
  <mj-head>
    {head}
    <mj-style>{css}</mj-style>
  </mj-head>
  <mj-body>{body}</mj-body>
</mjml>"
    )
}

/// Renders components through a transpiler.
///
/// Holds no per-call state, so one bridge can serve any number of renders.
#[derive(Debug, Clone, Default)]
pub struct Bridge<T = MrmlTranspiler> {
    transpiler: T,
    scoping: ScopingClasses,
}

impl<T: Transpiler> Bridge<T> {
    /// Create a bridge with the default `s-` scoping prefix
    pub fn new(transpiler: T) -> Self {
        Self {
            transpiler,
            scoping: ScopingClasses::default(),
        }
    }

    /// Use a different scoping class matcher
    pub fn with_scoping(mut self, scoping: ScopingClasses) -> Self {
        self.scoping = scoping;
        self
    }

    /// The transpiler in use
    pub fn transpiler(&self) -> &T {
        &self.transpiler
    }

    /// The scoping class matcher in use
    pub fn scoping(&self) -> &ScopingClasses {
        &self.scoping
    }

    /// Render the component and build the MJML document handed to the
    /// transpiler.
    pub fn assemble<C>(&self, component: &C, props: &C::Props) -> Result<String, C::Error>
    where
        C: Component + ?Sized,
    {
        let rendered = component.render(props)?;
        Ok(self.document(&rendered))
    }

    /// Build the MJML document for already rendered output
    pub fn document(&self, rendered: &Rendered) -> String {
        let head = self.scoping.strip(&rendered.head);
        let body = self.scoping.strip(&rendered.html);
        assemble_document(&head, &rendered.css.code, &body)
    }

    /// Render the component all the way to HTML
    pub fn render<C>(&self, component: &C, props: &C::Props) -> Result<String, C::Error>
    where
        C: Component + ?Sized,
        C::Error: From<Error>,
    {
        let mjml = self.assemble(component, props)?;
        tracing::debug!(bytes = mjml.len(), "Transpiling assembled MJML");

        let transpiled = self.transpiler.transpile(&mjml)?;
        if !transpiled.errors.is_empty() {
            let messages: Vec<&str> = transpiled
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect();
            tracing::warn!(
                count = transpiled.errors.len(),
                errors = ?messages,
                "Transpiler reported errors"
            );
        }

        Ok(transpiled.html)
    }
}
