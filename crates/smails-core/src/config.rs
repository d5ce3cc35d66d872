//! Configuration parsing and validation
//!
//! This module handles loading and validating the `smails.yaml` project file.
//!
//! # Layout
//!
//! - `smails.yaml` - Project root configuration
//! - `mails/<name>/` - One directory per mail (see [`crate::template`])

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::component::Props;
use crate::error::{Error, Result};
use crate::render::Bridge;
use crate::scoping::{DEFAULT_PREFIX, ScopingClasses};
use crate::template::TemplateComponent;
use crate::transpiler::{MrmlTranspiler, TranspilerOptions};

/// File name looked up when a directory is given to [`Config::load`]
pub const CONFIG_FILE: &str = "smails.yaml";

/// Root project configuration from `smails.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory holding one subdirectory per mail
    #[serde(default = "default_mails_dir")]
    pub mails_dir: String,

    /// Directory rendered HTML is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Prefix of the scoping classes to strip
    #[serde(default = "default_scoping_prefix")]
    pub scoping_prefix: String,

    /// Transpiler settings
    #[serde(default)]
    pub transpiler: TranspilerOptions,

    /// Global variables available in templates as `vars`
    #[serde(default)]
    pub vars: Props,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_mails_dir() -> String {
    "mails".to_string()
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_scoping_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl ProjectConfig {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                message: "project name must not be empty".to_string(),
            });
        }
        if self.scoping_prefix.is_empty() {
            return Err(Error::ConfigInvalid {
                message: "scoping_prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Main configuration container
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Base path of the project
    pub base_path: PathBuf,
}

impl Config {
    /// Load configuration from a directory
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory or smails.yaml file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::load("./my-mails")?;
    /// println!("Project: {}", config.project.name);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let (config_path, base_path) = if path.is_dir() {
            (path.join(CONFIG_FILE), path.to_path_buf())
        } else {
            (
                path.to_path_buf(),
                path.parent().unwrap_or(Path::new(".")).to_path_buf(),
            )
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let project: ProjectConfig = serde_yaml::from_str(&contents)?;
        project.validate()?;

        Ok(Self { project, base_path })
    }

    /// Absolute-or-relative path of the mails directory
    pub fn mails_dir(&self) -> PathBuf {
        self.base_path.join(&self.project.mails_dir)
    }

    /// Path of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.base_path.join(&self.project.output_dir)
    }

    /// Discover the project's mails
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::discover(self.mails_dir())
    }

    /// Load a mail by name with the project vars attached
    pub fn load_mail(&self, name: &str) -> Result<TemplateComponent> {
        let dir = self.mails_dir().join(name);
        if !dir.is_dir() {
            return Err(Error::MailNotFound {
                name: name.to_string(),
                path: dir.display().to_string(),
            });
        }
        Ok(TemplateComponent::load(&dir)?.with_vars(self.project.vars.clone()))
    }

    /// Build a render bridge honouring the project settings
    pub fn bridge(&self) -> Result<Bridge<MrmlTranspiler>> {
        let scoping = ScopingClasses::new(&self.project.scoping_prefix)?;
        Ok(Bridge::new(MrmlTranspiler::new(self.project.transpiler.clone())).with_scoping(scoping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
name: test-project
"#;
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "test-project");
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.mails_dir, "mails");
        assert_eq!(config.output_dir, "build");
        assert_eq!(config.scoping_prefix, "s-");
        assert!(!config.transpiler.disable_comments);
        assert!(config.vars.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
name: test-project
version: "1.0.0"
mails_dir: src/mails
output_dir: dist
scoping_prefix: "svelte-"
transpiler:
  disable_comments: true
vars:
  company: Acme
"#;
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.mails_dir, "src/mails");
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.scoping_prefix, "svelte-");
        assert!(config.transpiler.disable_comments);
        assert_eq!(config.vars["company"], "Acme");
    }

    #[test]
    fn test_load_from_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "name: test\n").unwrap();

        let from_dir = Config::load(dir.path()).unwrap();
        assert_eq!(from_dir.project.name, "test");
        assert_eq!(from_dir.mails_dir(), dir.path().join("mails"));

        let from_file = Config::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(from_file.base_path, dir.path());
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path());
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_rejects_empty_prefix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "name: test\nscoping_prefix: \"\"\n",
        )
        .unwrap();
        let result = Config::load(dir.path());
        assert!(matches!(result, Err(Error::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_mail_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "name: test\n").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(matches!(
            config.load_mail("ghost"),
            Err(Error::MailNotFound { .. })
        ));
    }
}
