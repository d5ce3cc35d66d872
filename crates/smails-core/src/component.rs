//! Server-side renderable components
//!
//! A component is anything that can turn a property set into a markup
//! fragment, head markup and stylesheet text. The bridge in [`crate::render`]
//! only relies on this capability, so any rendering backend can be plugged in.

use serde::{Deserialize, Serialize};

/// Property set for components whose props are an untyped mapping.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Stylesheet produced by a component render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Css {
    /// Raw CSS text
    pub code: String,
}

impl Css {
    /// Wrap CSS text
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Output of a single server-side render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Body fragment
    pub html: String,
    /// Component stylesheet
    pub css: Css,
    /// Markup destined for the document head
    pub head: String,
}

impl Rendered {
    /// Build a render result from its three parts
    pub fn new(html: impl Into<String>, css: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: Css::new(css),
            head: head.into(),
        }
    }
}

/// The server-side render capability.
///
/// `Props` is chosen per component, which lets a component require a typed
/// property struct instead of a loose mapping.
///
/// # Example
///
/// ```rust
/// use smails_core::{Component, Rendered};
///
/// struct Greeting;
///
/// struct GreetingProps {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     type Props = GreetingProps;
///     type Error = smails_core::Error;
///
///     fn render(&self, props: &GreetingProps) -> Result<Rendered, Self::Error> {
///         Ok(Rendered::new(
///             format!("<mj-text>Hello {}</mj-text>", props.name),
///             "",
///             "",
///         ))
///     }
/// }
/// ```
pub trait Component {
    /// Properties accepted by the component
    type Props: ?Sized;

    /// Failure raised by the component itself
    type Error;

    /// Render the component with the given properties
    fn render(&self, props: &Self::Props) -> std::result::Result<Rendered, Self::Error>;
}

impl<C: Component + ?Sized> Component for &C {
    type Props = C::Props;
    type Error = C::Error;

    fn render(&self, props: &Self::Props) -> std::result::Result<Rendered, Self::Error> {
        (**self).render(props)
    }
}
