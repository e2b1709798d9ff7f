//! # Styleable - Stylesheet Overrides for Components
//!
//! Styleable lets a component accept a base stylesheet - the class map a
//! CSS-modules-style build step emits - while callers override or compose
//! class names onto specific selectors at composition time. It provides:
//!
//! - **Validated merging** - overrides may only target selectors the base
//!   stylesheet defines; violations fail with an error naming the
//!   offenders and the valid set
//! - **Replace and compose** - an override swaps a selector's classes, a
//!   compose entry appends to them (space-joined)
//! - **A component decorator** - an explicit wrapper that injects the
//!   merged class map and passes declared prop metadata through unchanged
//! - **A JSON boundary** - class maps and override objects parse from the
//!   JSON shapes builds and callers produce, with fail-fast shape checks
//!
//! Class names are opaque tokens: nothing here parses CSS, computes
//! styles, or touches a render tree.
//!
//! ## Core Concepts
//!
//! - [`Stylesheet`]: immutable selector → class-name mapping
//! - [`Overrides`]: caller-supplied replacements plus a compose mapping
//! - [`Stylesheet::merge`]: validation and merging, fresh on every call
//! - [`Component`] / [`FnComponent`]: the render contract and its closure
//!   adapter
//! - [`Styleable`] / [`Styled`]: the decorator factory and the wrapper it
//!   produces
//!
//! ## Quick Start
//!
//! ```rust
//! use styleable::{Overrides, Stylesheet};
//!
//! let base = Stylesheet::new()
//!     .add("content", "content_1f3a9")
//!     .add("title", "title_88c21");
//!
//! let css = Overrides::new()
//!     .set("title", "custom_title")       // replace
//!     .compose("content", "theme_dark");  // append
//!
//! let merged = base.merge(&css).unwrap();
//! assert_eq!(merged.class("title"), Some("custom_title"));
//! assert_eq!(merged.class("content"), Some("content_1f3a9 theme_dark"));
//!
//! // Unknown selectors are contract violations, not silent no-ops.
//! let err = base.merge(&Overrides::new().set("banner", "x")).unwrap_err();
//! assert!(err.to_string().contains("banner"));
//! ```
//!
//! ## Decorating Components
//!
//! ```rust
//! use styleable::{FnComponent, Overrides, Props, Styleable};
//!
//! // The class map as emitted by the build step.
//! let styleable = Styleable::from_json(r#"{ "heading": "heading_f00" }"#).unwrap();
//!
//! let heading = styleable.decorate(FnComponent::new(|css, props| {
//!     format!(
//!         r#"<h1 class="{}">{}</h1>"#,
//!         css.class("heading").unwrap_or_default(),
//!         props.get_str("text").unwrap_or_default(),
//!     )
//! }));
//!
//! let props = Props::new().set("text", "Hello");
//! assert_eq!(
//!     heading.render(&props).unwrap(),
//!     r#"<h1 class="heading_f00">Hello</h1>"#,
//! );
//!
//! // Callers recompose without touching the component.
//! let css = Overrides::new().compose("heading", "theme_blue");
//! assert_eq!(
//!     heading.render_with_css(&css, &props).unwrap(),
//!     r#"<h1 class="heading_f00 theme_blue">Hello</h1>"#,
//! );
//! ```
//!
//! ## Warnings
//!
//! Host-model checks that should not fail a render (a missing required
//! prop) report through an injectable warning sink; see
//! [`set_warning_sink`]. The `styleable-test` crate turns captured
//! warnings into test failures.

pub mod component;
pub mod stylesheet;
mod warnings;

pub use component::{verify_props, Component, FnComponent, PropSpec, Props, Styleable, Styled};
pub use stylesheet::{Overrides, Stylesheet, StylesheetError, COMPOSE_KEY};
pub use warnings::{reset_warning_sink, set_warning_sink, warn, WarningSink};
