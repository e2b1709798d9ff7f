//! The stylesheet-injecting decorator.

use crate::stylesheet::{Overrides, Stylesheet, StylesheetError};
use crate::warnings;

use super::core::Component;
use super::props::Props;
use super::verify::{verify_props, PropSpec};

/// Decorator factory holding a validated base stylesheet.
///
/// Build one per stylesheet and decorate any number of components with it.
/// Constructing from JSON runs the shape check up front, so a malformed
/// class map fails fast - before any component is wrapped.
///
/// # Example
///
/// ```rust
/// use styleable::{FnComponent, Props, Stylesheet, Styleable};
///
/// let styleable = Styleable::from_json(r#"{ "content": "hash" }"#).unwrap();
///
/// let subject = styleable.decorate(FnComponent::new(|css, _props| {
///     format!(r#"<div class="{}">Content</div>"#, css.class("content").unwrap_or_default())
/// }));
///
/// let output = subject.render(&Props::new()).unwrap();
/// assert_eq!(output, r#"<div class="hash">Content</div>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styleable {
    stylesheet: Stylesheet,
}

impl Styleable {
    /// Creates a factory from an already-built stylesheet.
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self { stylesheet }
    }

    /// Creates a factory from the JSON class map a CSS-modules build emits.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidShape`] if the JSON is not a plain
    /// object of string values.
    pub fn from_json(json: &str) -> Result<Self, StylesheetError> {
        Ok(Self::new(Stylesheet::from_json_str(json)?))
    }

    /// Returns the base stylesheet.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Wraps a component, producing a [`Styled`] adapter bound to this
    /// factory's stylesheet.
    pub fn decorate<C: Component>(&self, inner: C) -> Styled<C> {
        Styled {
            inner,
            stylesheet: self.stylesheet.clone(),
        }
    }
}

/// A component wrapped with a base stylesheet.
///
/// The wrapper is an explicit struct holding the inner component and the
/// stylesheet - nothing is detected or inspected at runtime. Its job on
/// every render:
///
/// - accept a css override object alongside the other props (defaulting to
///   the empty override set when the caller supplies none)
/// - merge the base stylesheet with the overrides, failing the render on
///   contract violations
/// - resolve the inner component's declared default props under the
///   caller's props
/// - delegate to the inner component with the merged class map substituted
///   for the css input
///
/// Declared metadata ([`prop_specs`](Styled::prop_specs),
/// [`default_props`](Styled::default_props)) passes through unchanged so
/// host-side validation still sees the inner component's declaration. As
/// the host model does, the wrapper reports a missing required prop as a
/// warning through the warning sink (see [`crate::set_warning_sink`]),
/// not a render failure.
///
/// # Example
///
/// ```rust
/// use styleable::{FnComponent, Overrides, Props, Stylesheet, Styleable};
///
/// let styleable = Styleable::new(Stylesheet::new().add("content", "hash"));
/// let subject = styleable.decorate(FnComponent::new(|css, _props| {
///     css.class("content").unwrap_or_default().to_string()
/// }));
///
/// // Override at composition time.
/// let css = Overrides::new().set("content", "anotherHash");
/// assert_eq!(subject.render_with_css(&css, &Props::new()).unwrap(), "anotherHash");
///
/// // Compose instead of replacing.
/// let css = Overrides::new().compose("content", "anotherHash");
/// assert_eq!(subject.render_with_css(&css, &Props::new()).unwrap(), "hash anotherHash");
/// ```
#[derive(Debug, Clone)]
pub struct Styled<C> {
    inner: C,
    stylesheet: Stylesheet,
}

impl<C: Component> Styled<C> {
    /// Renders with no css overrides supplied.
    ///
    /// Equivalent to [`render_with_css`](Styled::render_with_css) with the
    /// empty override set, under which the merged stylesheet equals the
    /// base.
    pub fn render(&self, props: &Props) -> Result<C::Output, StylesheetError> {
        self.render_with_css(&Overrides::new(), props)
    }

    /// Merges the base stylesheet with the caller's overrides and renders
    /// the inner component with the result.
    ///
    /// The merge happens on every call; there is no caching. A failed merge
    /// produces no output.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::UnknownSelectors`] if the overrides
    /// target selectors the base stylesheet does not define.
    pub fn render_with_css(
        &self,
        css: &Overrides,
        props: &Props,
    ) -> Result<C::Output, StylesheetError> {
        let merged = self.stylesheet.merge(css)?;

        for name in verify_props(&self.inner, props) {
            warnings::warn(&format!(
                "required prop \"{}\" was not supplied to the wrapped component",
                name
            ));
        }

        let resolved = props.resolve_defaults(&self.inner.default_props());
        Ok(self.inner.render(&merged, &resolved))
    }

    /// The inner component's declared prop metadata, unchanged.
    pub fn prop_specs(&self) -> Vec<PropSpec> {
        self.inner.prop_specs()
    }

    /// The inner component's declared default props, unchanged.
    pub fn default_props(&self) -> Props {
        self.inner.default_props()
    }

    /// Returns the base stylesheet this wrapper was bound to.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Returns the wrapped component.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}
