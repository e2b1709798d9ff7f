//! The base stylesheet: an immutable selector to class-name mapping.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::error::{json_kind, StylesheetError};
use super::overrides::Overrides;

/// An immutable mapping from semantic selector names to generated class-name
/// strings, as produced by a CSS-modules-style build step.
///
/// Values are opaque string tokens: a single class name or a space-joined
/// list. The stylesheet never inspects them.
///
/// # Construction
///
/// Stylesheets can be built programmatically or parsed from the JSON class
/// map a CSS-modules build emits:
///
/// ```rust
/// use styleable::Stylesheet;
///
/// let built = Stylesheet::new()
///     .add("content", "content_1f3a9")
///     .add("title", "title_88c21");
///
/// let parsed = Stylesheet::from_json_str(
///     r#"{ "content": "content_1f3a9", "title": "title_88c21" }"#,
/// ).unwrap();
///
/// assert_eq!(built, parsed);
/// ```
///
/// The JSON constructors reject anything that is not a plain object of
/// string values:
///
/// ```rust
/// use styleable::Stylesheet;
///
/// let err = Stylesheet::from_json_str(r#""nonCssObj""#).unwrap_err();
/// assert!(err.to_string().contains("must be an object"));
/// ```
///
/// # Merging
///
/// [`merge`](Stylesheet::merge) reconciles the stylesheet with a
/// caller-supplied [`Overrides`] value. See the module docs for the
/// precedence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stylesheet {
    classes: HashMap<String, String>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selector with its class-name string. Returns self for chaining.
    ///
    /// If the selector already exists, its value is replaced.
    pub fn add(mut self, selector: &str, class: &str) -> Self {
        self.classes.insert(selector.to_string(), class.to_string());
        self
    }

    /// Parses a stylesheet from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidShape`] if the input is not valid
    /// JSON, not an object, or maps a selector to a non-string value.
    pub fn from_json_str(json: &str) -> Result<Self, StylesheetError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| StylesheetError::InvalidShape {
                what: "stylesheet",
                found: format!("invalid JSON ({})", e),
            })?;
        Self::from_json_value(&value)
    }

    /// Builds a stylesheet from an already-parsed JSON value.
    ///
    /// This is the shape check at the language boundary: only a plain object
    /// whose values are all strings is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::InvalidShape`] for any other JSON value
    /// (string, array, number, boolean, null) or for non-string selector
    /// values.
    pub fn from_json_value(value: &Value) -> Result<Self, StylesheetError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(StylesheetError::InvalidShape {
                    what: "stylesheet",
                    found: json_kind(other).to_string(),
                })
            }
        };

        let mut classes = HashMap::with_capacity(map.len());
        for (selector, class) in map {
            match class {
                Value::String(s) => {
                    classes.insert(selector.clone(), s.clone());
                }
                other => {
                    return Err(StylesheetError::InvalidShape {
                        what: "stylesheet",
                        found: format!("{} for selector \"{}\"", json_kind(other), selector),
                    })
                }
            }
        }
        Ok(Self { classes })
    }

    /// Returns the class-name string for a selector.
    pub fn class(&self, selector: &str) -> Option<&str> {
        self.classes.get(selector).map(String::as_str)
    }

    /// Returns true if the stylesheet defines the given selector.
    pub fn has(&self, selector: &str) -> bool {
        self.classes.contains_key(selector)
    }

    /// Returns the number of defined selectors.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no selectors are defined.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the defined selector names, sorted.
    pub fn selectors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(selector, class)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|(selector, class)| (selector.as_str(), class.as_str()))
    }

    /// Merges caller-supplied overrides onto this stylesheet, producing a
    /// fresh merged stylesheet.
    ///
    /// Precedence is base, then replacements, then compose: a replacement
    /// swaps the selector's value outright; a compose entry appends its
    /// value, space-joined, onto whatever the selector holds after the
    /// replacement pass. The merged result always has exactly this
    /// stylesheet's selector set.
    ///
    /// The merge is pure and re-validates on every call, since overrides
    /// vary per use.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::UnknownSelectors`] if any override or
    /// compose entry targets a selector this stylesheet does not define.
    ///
    /// # Example
    ///
    /// ```rust
    /// use styleable::{Overrides, Stylesheet};
    ///
    /// let base = Stylesheet::new()
    ///     .add("content", "hash")
    ///     .add("title", "title_hash");
    ///
    /// let merged = base.merge(
    ///     &Overrides::new()
    ///         .set("title", "custom")
    ///         .compose("content", "theme"),
    /// ).unwrap();
    ///
    /// assert_eq!(merged.class("title"), Some("custom"));
    /// assert_eq!(merged.class("content"), Some("hash theme"));
    /// ```
    pub fn merge(&self, overrides: &Overrides) -> Result<Stylesheet, StylesheetError> {
        let mut unknown: Vec<String> = overrides
            .selectors()
            .filter(|selector| !self.classes.contains_key(*selector))
            .map(str::to_string)
            .collect();

        if !unknown.is_empty() {
            unknown.sort_unstable();
            unknown.dedup();
            return Err(StylesheetError::UnknownSelectors {
                selectors: unknown,
                known: self.selectors().iter().map(|s| s.to_string()).collect(),
            });
        }

        let mut classes = self.classes.clone();
        for (selector, class) in overrides.replacements() {
            classes.insert(selector.to_string(), class.to_string());
        }
        for (selector, class) in overrides.composed() {
            if let Some(current) = classes.get_mut(selector) {
                *current = format!("{} {}", current, class);
            }
        }
        Ok(Stylesheet { classes })
    }
}

impl FromIterator<(String, String)> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}
