//! The component contract: render plus declared prop metadata.

use std::marker::PhantomData;

use crate::stylesheet::Stylesheet;

use super::props::Props;
use super::verify::PropSpec;

/// Trait for components that consume a resolved class map.
///
/// A component receives the merged stylesheet and its props and produces
/// output; what "output" means is up to the host (markup, a virtual node,
/// a test string). Rendering takes `&self`: components are re-rendered on
/// every composition cycle and may be invoked from multiple rendering
/// contexts without coordination.
///
/// The two metadata methods mirror the declared-input metadata of the host
/// component model. Wrappers pass them through unchanged so host-side
/// validation still applies to the inner component.
///
/// # Example
///
/// ```rust
/// use styleable::{Component, Props, PropSpec, Stylesheet};
///
/// struct Heading;
///
/// impl Component for Heading {
///     type Output = String;
///
///     fn render(&self, css: &Stylesheet, props: &Props) -> String {
///         format!(
///             r#"<h1 class="{}">{}</h1>"#,
///             css.class("heading").unwrap_or_default(),
///             props.get_str("text").unwrap_or_default(),
///         )
///     }
///
///     fn prop_specs(&self) -> Vec<PropSpec> {
///         vec![PropSpec::required("text")]
///     }
/// }
/// ```
pub trait Component {
    /// The rendered output type.
    type Output;

    /// Renders the component with the resolved class map and its props.
    fn render(&self, css: &Stylesheet, props: &Props) -> Self::Output;

    /// Declared prop metadata, for host-side validation.
    ///
    /// Components with no declared props return an empty list.
    fn prop_specs(&self) -> Vec<PropSpec> {
        Vec::new()
    }

    /// Declared default prop values, resolved under the caller's props
    /// before render.
    fn default_props(&self) -> Props {
        Props::new()
    }
}

/// A wrapper that implements [`Component`] for plain functions and
/// closures.
///
/// Function components carry their declared metadata as attached values,
/// via the [`spec`](FnComponent::spec) and
/// [`default_prop`](FnComponent::default_prop) builders.
///
/// # Example
///
/// ```rust
/// use styleable::{Component, FnComponent, Props, PropSpec, Stylesheet};
///
/// let subject = FnComponent::new(|css: &Stylesheet, props: &Props| {
///     format!(
///         r#"<div class="{}">{}</div>"#,
///         css.class("content").unwrap_or_default(),
///         props.get_str("aDefault").unwrap_or_default(),
///     )
/// })
/// .default_prop("aDefault", "still here");
///
/// let css = Stylesheet::new().add("content", "hash");
/// let props = Props::new().set("aDefault", "still here");
/// assert_eq!(subject.render(&css, &props), r#"<div class="hash">still here</div>"#);
/// ```
pub struct FnComponent<F, T> {
    f: F,
    specs: Vec<PropSpec>,
    defaults: Props,
    _phantom: PhantomData<fn() -> T>,
}

impl<F, T> FnComponent<F, T>
where
    F: Fn(&Stylesheet, &Props) -> T,
{
    /// Creates a function component from a render closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            specs: Vec::new(),
            defaults: Props::new(),
            _phantom: PhantomData,
        }
    }

    /// Attaches a declared prop spec. Returns self for chaining.
    pub fn spec(mut self, spec: PropSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Attaches a declared default prop value. Returns self for chaining.
    pub fn default_prop(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.defaults = self.defaults.set(name, value);
        self
    }
}

impl<F, T> Component for FnComponent<F, T>
where
    F: Fn(&Stylesheet, &Props) -> T,
{
    type Output = T;

    fn render(&self, css: &Stylesheet, props: &Props) -> T {
        (self.f)(css, props)
    }

    fn prop_specs(&self) -> Vec<PropSpec> {
        self.specs.clone()
    }

    fn default_props(&self) -> Props {
        self.defaults.clone()
    }
}
