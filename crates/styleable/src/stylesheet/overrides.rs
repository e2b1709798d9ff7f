//! Caller-supplied override and compose mappings.

use std::collections::HashMap;

use serde_json::Value;

use super::error::{json_kind, StylesheetError};

/// Reserved key in the JSON form of [`Overrides`] holding the compose
/// mapping.
pub const COMPOSE_KEY: &str = "compose";

/// A caller-supplied set of stylesheet overrides.
///
/// An override either *replaces* a selector's class-name string outright
/// ([`set`](Overrides::set)) or *composes* onto it, appending a class name
/// space-joined after the existing value ([`compose`](Overrides::compose)).
/// Every targeted selector must already exist in the stylesheet being
/// merged; see [`Stylesheet::merge`](super::Stylesheet::merge).
///
/// # Example
///
/// ```rust
/// use styleable::Overrides;
///
/// let css = Overrides::new()
///     .set("title", "custom_title")       // replace
///     .compose("content", "theme_dark");  // append
/// assert!(!css.is_empty());
/// ```
///
/// # JSON form
///
/// Overrides also parse from the JSON shape callers pass at composition
/// time, where the reserved top-level key `compose` nests the compose
/// mapping:
///
/// ```rust
/// use styleable::Overrides;
///
/// let css = Overrides::from_json_str(
///     r#"{ "title": "custom_title", "compose": { "content": "theme_dark" } }"#,
/// ).unwrap();
///
/// assert_eq!(css, Overrides::new()
///     .set("title", "custom_title")
///     .compose("content", "theme_dark"));
/// ```
///
/// The key is only reserved in the JSON form. Through the builder API the
/// two mappings are separate fields, so `set("compose", ...)` targets a
/// selector literally named `compose`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    replace: HashMap<String, String>,
    compose: HashMap<String, String>,
}

impl Overrides {
    /// Creates an empty override set. Merging it is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the class-name string for a selector. Returns self for
    /// chaining.
    pub fn set(mut self, selector: &str, class: &str) -> Self {
        self.replace.insert(selector.to_string(), class.to_string());
        self
    }

    /// Appends a class name onto a selector, space-joined after the value
    /// the selector holds once replacements are applied. Returns self for
    /// chaining.
    pub fn compose(mut self, selector: &str, class: &str) -> Self {
        self.compose.insert(selector.to_string(), class.to_string());
        self
    }

    /// Parses overrides from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidShape`] if the input is not valid
    /// JSON or does not have the documented shape.
    pub fn from_json_str(json: &str) -> Result<Self, StylesheetError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| StylesheetError::InvalidShape {
                what: "overrides",
                found: format!("invalid JSON ({})", e),
            })?;
        Self::from_json_value(&value)
    }

    /// Builds overrides from an already-parsed JSON value.
    ///
    /// The value must be an object of string values, except for the
    /// reserved [`COMPOSE_KEY`] entry, which must itself be an object of
    /// string values.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidShape`] for any other shape.
    pub fn from_json_value(value: &Value) -> Result<Self, StylesheetError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(StylesheetError::InvalidShape {
                    what: "overrides",
                    found: json_kind(other).to_string(),
                })
            }
        };

        let mut overrides = Overrides::default();
        for (key, val) in map {
            if key == COMPOSE_KEY {
                let compose_map = match val {
                    Value::Object(m) => m,
                    other => {
                        return Err(StylesheetError::InvalidShape {
                            what: "compose",
                            found: json_kind(other).to_string(),
                        })
                    }
                };
                for (selector, class) in compose_map {
                    overrides.compose.insert(
                        selector.clone(),
                        expect_class_string("compose", selector, class)?,
                    );
                }
            } else {
                overrides
                    .replace
                    .insert(key.clone(), expect_class_string("overrides", key, val)?);
            }
        }
        Ok(overrides)
    }

    /// Returns true if neither replacements nor compose entries are present.
    pub fn is_empty(&self) -> bool {
        self.replace.is_empty() && self.compose.is_empty()
    }

    /// Iterates over every targeted selector name (replacements and compose,
    /// duplicates possible).
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.replace
            .keys()
            .chain(self.compose.keys())
            .map(String::as_str)
    }

    /// Iterates over `(selector, class)` replacement pairs.
    pub fn replacements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.replace
            .iter()
            .map(|(selector, class)| (selector.as_str(), class.as_str()))
    }

    /// Iterates over `(selector, class)` compose pairs.
    pub fn composed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.compose
            .iter()
            .map(|(selector, class)| (selector.as_str(), class.as_str()))
    }
}

fn expect_class_string(
    what: &'static str,
    selector: &str,
    value: &Value,
) -> Result<String, StylesheetError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(StylesheetError::InvalidShape {
            what,
            found: format!("{} for selector \"{}\"", json_kind(other), selector),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overrides_new_is_empty() {
        assert!(Overrides::new().is_empty());
    }

    #[test]
    fn test_overrides_set_and_compose_tracked_separately() {
        let css = Overrides::new().set("a", "1").compose("a", "2");

        let replacements: Vec<_> = css.replacements().collect();
        let composed: Vec<_> = css.composed().collect();
        assert_eq!(replacements, vec![("a", "1")]);
        assert_eq!(composed, vec![("a", "2")]);
    }

    #[test]
    fn test_overrides_selectors_covers_both_mappings() {
        let css = Overrides::new().set("a", "1").compose("b", "2");
        let mut selectors: Vec<_> = css.selectors().collect();
        selectors.sort_unstable();
        assert_eq!(selectors, vec!["a", "b"]);
    }

    #[test]
    fn test_from_json_flat_and_nested_compose() {
        let css = Overrides::from_json_value(&json!({
            "title": "custom",
            "compose": { "content": "extra" }
        }))
        .unwrap();

        assert_eq!(
            css,
            Overrides::new().set("title", "custom").compose("content", "extra")
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Overrides::from_json_value(&json!(["not", "overrides"])).unwrap_err();
        assert!(err.to_string().contains("overrides must be an object"));
    }

    #[test]
    fn test_from_json_rejects_non_object_compose() {
        let err = Overrides::from_json_value(&json!({ "compose": "oops" })).unwrap_err();
        assert!(err.to_string().contains("compose must be an object"));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = Overrides::from_json_value(&json!({ "title": 7 })).unwrap_err();
        assert!(err.to_string().contains("a number"));

        let err = Overrides::from_json_value(&json!({ "compose": { "title": null } }))
            .unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let css = Overrides::from_json_str("{}").unwrap();
        assert!(css.is_empty());
    }

    #[test]
    fn test_builder_compose_key_is_a_plain_selector() {
        // Reservation only applies to the JSON form.
        let css = Overrides::new().set(COMPOSE_KEY, "x");
        let replacements: Vec<_> = css.replacements().collect();
        assert_eq!(replacements, vec![("compose", "x")]);
    }
}
