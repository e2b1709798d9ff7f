//! Name-keyed prop container.

use std::collections::HashMap;

use serde_json::Value;

/// Name-keyed container for component inputs.
///
/// Props carry arbitrary values as `serde_json::Value`, mirroring the
/// name-keyed inputs of the host component model. The `css` input is not
/// stored here - it travels separately through the render path, since the
/// wrapper and the wrapped component see it with different types (an
/// override object going in, a resolved class map coming out).
///
/// # Example
///
/// ```rust
/// use styleable::Props;
///
/// let props = Props::new()
///     .set("label", "still here")
///     .set("count", 3);
///
/// assert_eq!(props.get_str("label"), Some("still here"));
/// assert!(props.contains("count"));
/// assert!(props.get_required("label").is_ok());
/// assert!(props.get_required("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: HashMap<String, Value>,
}

impl Props {
    /// Creates an empty prop container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop value. Returns self for chaining.
    ///
    /// Accepts anything convertible into a `serde_json::Value` (strings,
    /// numbers, booleans, `json!` literals). An existing value for the
    /// same name is replaced.
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Returns the value for a prop name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the value for a prop name as a string slice, if it is one.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// Returns a required prop value.
    ///
    /// # Errors
    ///
    /// Returns an error if no value with this name is present.
    pub fn get_required(&self, name: &str) -> Result<&Value, anyhow::Error> {
        self.get(name)
            .ok_or_else(|| anyhow::anyhow!("Prop missing: \"{}\" not found in props", name))
    }

    /// Returns true if a value with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of props stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no props are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the stored prop names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Lays these props over a defaults map: every default is present in
    /// the result, and caller-supplied values win on collision.
    pub fn resolve_defaults(&self, defaults: &Props) -> Props {
        let mut values = defaults.values.clone();
        for (name, value) in &self.values {
            values.insert(name.clone(), value.clone());
        }
        Props { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_props_new_is_empty() {
        let props = Props::new();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_props_set_and_get() {
        let props = Props::new().set("label", "hi").set("count", 3);

        assert_eq!(props.get("label"), Some(&json!("hi")));
        assert_eq!(props.get_str("label"), Some("hi"));
        assert_eq!(props.get("count"), Some(&json!(3)));
        assert!(props.get("missing").is_none());
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_props_get_str_non_string() {
        let props = Props::new().set("count", 3);
        assert_eq!(props.get_str("count"), None);
    }

    #[test]
    fn test_props_set_replaces() {
        let props = Props::new().set("x", 1).set("x", 2);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("x"), Some(&json!(2)));
    }

    #[test]
    fn test_props_get_required() {
        let props = Props::new().set("present", true);

        assert!(props.get_required("present").is_ok());

        let err = props.get_required("absent").unwrap_err();
        assert!(err.to_string().contains("Prop missing"));
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_props_names_sorted() {
        let props = Props::new().set("b", 1).set("a", 2);
        assert_eq!(props.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_resolve_defaults_caller_wins() {
        let defaults = Props::new().set("a", "default").set("b", "default");
        let props = Props::new().set("a", "caller");

        let resolved = props.resolve_defaults(&defaults);
        assert_eq!(resolved.get_str("a"), Some("caller"));
        assert_eq!(resolved.get_str("b"), Some("default"));
    }

    #[test]
    fn test_resolve_defaults_empty_defaults() {
        let props = Props::new().set("a", 1);
        assert_eq!(props.resolve_defaults(&Props::new()), props);
    }
}
