//! Scoping class cleanup
//!
//! Component frameworks scope styles by injecting generated class attributes
//! such as `class="s-x7f2a"`. MJML does not accept them, so they are removed
//! before the document reaches the transpiler.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Prefix of the scoping classes emitted by Svelte
pub const DEFAULT_PREFIX: &str = "s-";

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // The pattern is built from a constant and is always valid
    Regex::new(r#"\s*class="s-[A-Za-z0-9_-]+""#).expect("default scoping pattern is valid")
});

/// Remove every `class="s-…"` attribute, and the whitespace before it, using
/// the default prefix.
pub fn strip_scoping_classes(markup: &str) -> Cow<'_, str> {
    DEFAULT_PATTERN.replace_all(markup, "")
}

/// Compiled scoping class matcher for a given prefix
#[derive(Debug, Clone)]
pub struct ScopingClasses {
    prefix: String,
    pattern: Regex,
}

impl ScopingClasses {
    /// Compile a matcher for `class="<prefix><ASCII word-or-hyphen chars>"`.
    ///
    /// Whitespace in front of the attribute is removed along with it.
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(Error::ConfigInvalid {
                message: "scoping class prefix must not be empty".to_string(),
            });
        }
        let pattern = Regex::new(&format!(r#"\s*class="{}[A-Za-z0-9_-]+""#, regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// The prefix this matcher was built for
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Remove all scoping class attributes from `markup`.
    ///
    /// Returns the input unchanged (borrowed) when nothing matches.
    pub fn strip<'a>(&self, markup: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(markup, "")
    }

    /// Whether `markup` still carries a scoping class attribute
    pub fn is_present(&self, markup: &str) -> bool {
        self.pattern.is_match(markup)
    }
}

impl Default for ScopingClasses {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"<div class="s-abc123">Hi</div>"#, "<div>Hi</div>")]
    #[case(r#"<p class="s-Ab_9-x">a</p><p class="s-q">b</p>"#, "<p>a</p><p>b</p>")]
    #[case(r#"<mj-text class="s-1">x</mj-text>"#, "<mj-text>x</mj-text>")]
    fn test_strip_removes_markers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_scoping_classes(input), expected);
        assert!(!ScopingClasses::default().is_present(&strip_scoping_classes(input)));
    }

    #[rstest]
    #[case("<div>Hi</div>")]
    #[case(r#"<div class="header">Hi</div>"#)]
    #[case(r#"<div class="s-">empty identifier</div>"#)]
    #[case(r#"<div class='s-abc'>single quotes</div>"#)]
    #[case(r#"<div class="s-é1">non-ascii identifier</div>"#)]
    #[case(r#"<div class="s-abcé">trailing non-ascii</div>"#)]
    #[case("")]
    fn test_strip_is_noop_without_markers(#[case] input: &str) {
        let once = strip_scoping_classes(input);
        assert!(matches!(once, Cow::Borrowed(_)));
        assert_eq!(once, input);
        assert_eq!(strip_scoping_classes(&once), input);
    }

    #[test]
    fn test_strip_keeps_other_attributes() {
        assert_eq!(
            strip_scoping_classes(r#"<a href="/x" class="s-k9" target="_blank">x</a>"#),
            r#"<a href="/x" target="_blank">x</a>"#
        );
    }

    #[test]
    fn test_strip_is_idempotent() {
        let input = r#"<div class="s-a"><span class="s-b-c">x</span></div>"#;
        let once = strip_scoping_classes(input).into_owned();
        let twice = strip_scoping_classes(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_prefix() {
        let classes = ScopingClasses::new("svelte-").unwrap();
        assert_eq!(classes.prefix(), "svelte-");
        assert_eq!(
            classes.strip(r#"<b class="svelte-1xyz">x</b><i class="s-abc">y</i>"#),
            r#"<b>x</b><i class="s-abc">y</i>"#
        );
    }

    #[test]
    fn test_prefix_is_escaped() {
        let classes = ScopingClasses::new("a.").unwrap();
        assert!(classes.is_present(r#"<b class="a.x">"#));
        assert!(!classes.is_present(r#"<b class="abx">"#));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(
            ScopingClasses::new(""),
            Err(Error::ConfigInvalid { .. })
        ));
    }
}
