//! End-to-end decorator behavior: wrapping, overriding, composing, and
//! metadata passthrough.

use serial_test::serial;
use styleable::{
    FnComponent, Overrides, Props, PropSpec, Styleable, Stylesheet, StylesheetError,
};
use styleable_test::{assert_no_warnings, assert_warned};

#[test]
fn test_creates_default_stylesheet_if_none_supplied() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(FnComponent::new(|css: &Stylesheet, _props: &Props| {
        css.len()
    }));

    assert_eq!(subject.stylesheet(), &Stylesheet::new());
    assert_eq!(subject.render(&Props::new()).unwrap(), 0);
}

#[test]
fn test_rejects_css_as_string() {
    let err = Styleable::from_json(r#""nonCssObj""#).unwrap_err();
    assert!(err.to_string().contains("must be an object"));
}

#[test]
fn test_rejects_css_as_array() {
    let err = Styleable::from_json(r#"["css", "stuff"]"#).unwrap_err();
    assert!(err.to_string().contains("must be an object"));
}

#[test]
fn test_rejects_overrides_that_wont_be_used() {
    // Superset override: a selector absent from the base stylesheet.
    let styleable = Styleable::new(Stylesheet::new().add("content", "hash"));
    let subject = styleable.decorate(FnComponent::new(|css: &Stylesheet, _props: &Props| {
        css.class("content").unwrap_or_default().to_string()
    }));

    let override_css = Overrides::new().set("unusedSelector", "anotherHash");
    let err = subject
        .render_with_css(&override_css, &Props::new())
        .unwrap_err();

    assert!(matches!(err, StylesheetError::UnknownSelectors { .. }));
    let message = err.to_string();
    assert!(message.contains("unusedSelector"));
    assert!(message.contains("content"));
}

#[test]
fn test_overrides_base_stylesheet() {
    let styleable = Styleable::new(Stylesheet::new().add("content", "hash"));
    let subject = styleable.decorate(FnComponent::new(|css: &Stylesheet, _props: &Props| {
        css.class("content").unwrap_or_default().to_string()
    }));

    let override_css = Overrides::new().set("content", "anotherHash");
    assert_eq!(
        subject.render_with_css(&override_css, &Props::new()).unwrap(),
        "anotherHash"
    );
}

#[test]
fn test_composes_onto_base_stylesheet() {
    let styleable = Styleable::new(Stylesheet::new().add("content", "hash"));
    let subject = styleable.decorate(FnComponent::new(|css: &Stylesheet, _props: &Props| {
        css.class("content").unwrap_or_default().to_string()
    }));

    let override_css = Overrides::new().compose("content", "anotherHash");
    assert_eq!(
        subject.render_with_css(&override_css, &Props::new()).unwrap(),
        "hash anotherHash"
    );
}

#[test]
fn test_lets_default_props_pass_through() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(
        FnComponent::new(|_css: &Stylesheet, props: &Props| {
            format!("Content {}", props.get_str("aDefault").unwrap_or_default())
        })
        .default_prop("aDefault", "still here"),
    );

    // Declared defaults are visible on the wrapper...
    assert_eq!(subject.default_props().get_str("aDefault"), Some("still here"));
    // ...and resolved into the render when the caller omits the prop.
    assert_eq!(subject.render(&Props::new()).unwrap(), "Content still here");
}

#[test]
fn test_lets_prop_specs_pass_through() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(
        FnComponent::new(|_css: &Stylesheet, _props: &Props| ())
            .spec(PropSpec::required("aReqProp")),
    );

    assert_eq!(subject.prop_specs(), vec![PropSpec::required("aReqProp")]);
}

#[test]
fn test_overrides_from_caller_supplied_json() {
    // The shape a caller passes at composition time, reserved key included.
    let styleable = Styleable::from_json(r#"{ "content": "hash", "title": "t" }"#).unwrap();
    let subject = styleable.decorate(FnComponent::new(|css: &Stylesheet, _props: &Props| {
        format!(
            "{}|{}",
            css.class("content").unwrap_or_default(),
            css.class("title").unwrap_or_default(),
        )
    }));

    let override_css = Overrides::from_json_str(
        r#"{ "title": "custom", "compose": { "content": "extra" } }"#,
    )
    .unwrap();

    assert_eq!(
        subject.render_with_css(&override_css, &Props::new()).unwrap(),
        "hash extra|custom"
    );
}

#[test]
#[serial]
fn test_warns_on_missing_required_prop() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(
        FnComponent::new(|_css: &Stylesheet, props: &Props| {
            format!("Req content {}", props.get_str("aReqProp").unwrap_or_default())
        })
        .spec(PropSpec::required("aReqProp")),
    );

    assert_warned("aReqProp", || {
        // Rendering proceeds; the problem is reported, not fatal.
        let output = subject.render(&Props::new()).unwrap();
        assert_eq!(output, "Req content ");
    });
}

#[test]
#[serial]
fn test_quiet_when_required_prop_supplied() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(
        FnComponent::new(|_css: &Stylesheet, props: &Props| {
            props.get_str("aReqProp").unwrap_or_default().to_string()
        })
        .spec(PropSpec::required("aReqProp")),
    );

    assert_no_warnings(|| {
        let props = Props::new().set("aReqProp", "present");
        assert_eq!(subject.render(&props).unwrap(), "present");
    });
}

#[test]
#[serial]
fn test_quiet_when_required_prop_defaulted() {
    let styleable = Styleable::default();
    let subject = styleable.decorate(
        FnComponent::new(|_css: &Stylesheet, _props: &Props| ())
            .spec(PropSpec::required("aReqProp"))
            .default_prop("aReqProp", "defaulted"),
    );

    assert_no_warnings(|| {
        subject.render(&Props::new()).unwrap();
    });
}
