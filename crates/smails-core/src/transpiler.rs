//! MJML to HTML transpilation
//!
//! The transpiler is treated as a black box behind the [`Transpiler`] trait.
//! [`MrmlTranspiler`] is the default implementation, backed by the `mrml`
//! crate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A non-fatal problem reported while transpiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileIssue {
    /// Human readable description
    pub message: String,
}

impl TranspileIssue {
    /// Create an issue from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TranspileIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a transpile call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transpiled {
    /// Produced HTML, possibly best-effort
    pub html: String,
    /// Advisory problems found along the way
    pub errors: Vec<TranspileIssue>,
}

/// Email markup to HTML transpiler
pub trait Transpiler {
    /// Transpile an MJML document.
    ///
    /// Problems that still allow HTML to be produced go in
    /// [`Transpiled::errors`]. `Err` is reserved for the case where no HTML
    /// can be produced at all.
    fn transpile(&self, mjml: &str) -> Result<Transpiled>;
}

impl<T: Transpiler + ?Sized> Transpiler for &T {
    fn transpile(&self, mjml: &str) -> Result<Transpiled> {
        (**self).transpile(mjml)
    }
}

/// Rendering options forwarded to the transpiler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspilerOptions {
    /// Drop HTML comments from the output
    #[serde(default)]
    pub disable_comments: bool,
}

/// Transpiler backed by `mrml`
#[derive(Debug, Clone, Default)]
pub struct MrmlTranspiler {
    options: TranspilerOptions,
}

impl MrmlTranspiler {
    /// Create a transpiler with the given options
    pub fn new(options: TranspilerOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &TranspilerOptions {
        &self.options
    }
}

impl Transpiler for MrmlTranspiler {
    fn transpile(&self, mjml: &str) -> Result<Transpiled> {
        let parsed = mrml::parse(mjml).map_err(|e| Error::Transpile {
            message: e.to_string(),
        })?;

        let errors = parsed
            .warnings
            .iter()
            .map(|w| TranspileIssue::new(w.to_string()))
            .collect();

        let opts = mrml::prelude::render::RenderOptions {
            disable_comments: self.options.disable_comments,
            ..Default::default()
        };
        let html = parsed
            .element
            .render(&opts)
            .map_err(|e| Error::Transpile {
                message: e.to_string(),
            })?;

        Ok(Transpiled { html, errors })
    }
}
