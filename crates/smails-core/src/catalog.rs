//! Mail discovery
//!
//! Every immediate subdirectory of the mails directory that contains a
//! `Mail.mjml` is a mail, named after its directory.

use std::path::{Path, PathBuf};

use crate::component::Props;
use crate::error::{Error, Result};
use crate::template::{BODY_TEMPLATE, TemplateComponent};

/// File name of the default props for a mail
pub const PROPS_FILE: &str = "props.yaml";

/// A discovered mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailEntry {
    /// Mail name
    pub name: String,
    /// Directory holding the mail templates
    pub dir: PathBuf,
}

impl MailEntry {
    /// Load the mail as a renderable component
    pub fn load(&self) -> Result<TemplateComponent> {
        TemplateComponent::load(&self.dir)
    }

    /// Default props from `props.yaml`, or an empty set when absent
    pub fn default_props(&self) -> Result<Props> {
        let path = self.dir.join(PROPS_FILE);
        if !path.is_file() {
            return Ok(Props::new());
        }
        load_props(&path)
    }
}

/// Read a props file. YAML and JSON (a YAML subset) are both accepted.
pub fn load_props(path: &Path) -> Result<Props> {
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Props::new());
    }

    let value: serde_json::Value = serde_yaml::from_str(&contents)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(Props::new()),
        other => Err(Error::InvalidProps {
            path: path.display().to_string(),
            message: format!("expected a mapping, found {}", kind(&other)),
        }),
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

/// All mails of a project, sorted by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    mails: Vec<MailEntry>,
}

impl Catalog {
    /// Scan `mails_dir` for mails. A missing directory yields an empty catalog.
    pub fn discover<P: AsRef<Path>>(mails_dir: P) -> Result<Self> {
        let mails_dir = mails_dir.as_ref();
        if !mails_dir.exists() {
            tracing::debug!("Mails directory {} does not exist", mails_dir.display());
            return Ok(Self::default());
        }

        let mut mails: Vec<MailEntry> = std::fs::read_dir(mails_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.join(BODY_TEMPLATE).is_file())
            .filter_map(|dir| {
                let name = dir.file_name()?.to_str()?.to_string();
                Some(MailEntry { name, dir })
            })
            .collect();
        mails.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { mails })
    }

    /// Look a mail up by name
    pub fn get(&self, name: &str) -> Option<&MailEntry> {
        self.mails.iter().find(|m| m.name == name)
    }

    /// Mail names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.mails.iter().map(|m| m.name.as_str())
    }

    /// Discovered mails
    pub fn mails(&self) -> &[MailEntry] {
        &self.mails
    }

    /// Number of mails
    pub fn len(&self) -> usize {
        self.mails.len()
    }

    /// Whether no mail was found
    pub fn is_empty(&self) -> bool {
        self.mails.is_empty()
    }
}
