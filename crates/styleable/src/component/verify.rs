//! Declared-prop verification.

use super::core::Component;
use super::props::Props;

/// Declared metadata for a single component prop.
///
/// Components expose their specs through
/// [`Component::prop_specs`](super::Component::prop_specs) so that hosts
/// and wrappers can validate inputs without inspecting the component
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropSpec {
    /// The prop name.
    pub name: String,
    /// Whether the prop must be supplied (or defaulted) for a valid render.
    pub required: bool,
}

impl PropSpec {
    /// Declares a required prop.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    /// Declares an optional prop.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// Checks the supplied props against a component's declared metadata.
///
/// Returns the names of required props that are neither supplied nor
/// covered by the component's declared defaults. An empty result means the
/// props satisfy the declaration.
///
/// # Example
///
/// ```rust
/// use styleable::{verify_props, FnComponent, Props, PropSpec};
///
/// let component = FnComponent::new(|_css, props| props.len())
///     .spec(PropSpec::required("label"));
///
/// assert_eq!(verify_props(&component, &Props::new()), vec!["label"]);
/// assert!(verify_props(&component, &Props::new().set("label", "x")).is_empty());
/// ```
pub fn verify_props<C: Component>(component: &C, props: &Props) -> Vec<String> {
    let resolved = props.resolve_defaults(&component.default_props());
    component
        .prop_specs()
        .into_iter()
        .filter(|spec| spec.required && !resolved.contains(&spec.name))
        .map(|spec| spec.name)
        .collect()
}
