//! smails Core Library
//!
//! This crate turns server-side rendered components into email-ready HTML:
//! - Component capability trait and a minijinja-backed mail component
//! - Scoping class cleanup for markup the email dialect rejects
//! - MJML document assembly and transpilation through `mrml`
//! - Project configuration and mail discovery
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Component  │────▶│   Bridge    │────▶│ Transpiler  │
//! │   (SSR)     │     │ (clean+MJML)│     │   (HTML)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use smails_core::{Config, render};
//!
//! let config = Config::load("./smails.yaml")?;
//! let mail = config.load_mail("hello-world")?;
//! let html = config.bridge()?.render(&mail, &props)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod component;
pub mod config;
pub mod error;
pub mod render;
pub mod scoping;
pub mod template;
pub mod transpiler;

pub use catalog::{Catalog, MailEntry};
pub use component::{Component, Css, Props, Rendered};
pub use config::{Config, ProjectConfig};
pub use error::{Error, Result};
pub use render::{Bridge, render};
pub use scoping::{ScopingClasses, strip_scoping_classes};
pub use template::TemplateComponent;
pub use transpiler::{MrmlTranspiler, TranspileIssue, Transpiled, Transpiler, TranspilerOptions};
