//! Stylesheet overriding and composition.
//!
//! This module holds the core of the crate: reconciling a base stylesheet
//! (the class map a CSS-modules build step emits) with a caller-supplied
//! override/compose object.
//!
//! # Design Overview
//!
//! Three pieces, cleanly separated:
//!
//! - [`Stylesheet`] is the immutable base mapping from semantic selector
//!   names to generated class-name strings
//! - [`Overrides`] is what a caller supplies at composition time: direct
//!   replacements plus an optional compose mapping that appends instead of
//!   replacing
//! - [`Stylesheet::merge`] validates and combines the two, producing a
//!   fresh merged stylesheet on every call
//!
//! Class names are opaque tokens throughout. Nothing here parses CSS,
//! computes styles, or touches a render tree.
//!
//! # Merge Precedence
//!
//! Merging applies three layers in order:
//!
//! 1. The base stylesheet is copied
//! 2. Replacements swap values for their selectors
//! 3. Compose entries append, space-joined, onto the current value - which
//!    is the replaced value when the same selector appears in both mappings
//!
//! The merged result always carries exactly the base's selector set.
//! Overrides that target selectors the base does not define are contract
//! violations and fail the merge with an error naming the offending
//! selectors and the valid set; they are never silently dropped.
//!
//! # JSON Schema
//!
//! Both sides of the merge have a JSON form. The base stylesheet is the
//! plain class map a build step emits:
//!
//! ```json
//! { "content": "content_1f3a9", "title": "title_88c21" }
//! ```
//!
//! Overrides use the same shape, with the reserved `compose` key nesting
//! the append mapping:
//!
//! ```json
//! { "title": "custom_title", "compose": { "content": "theme_dark" } }
//! ```
//!
//! Anything that is not a plain object of strings is rejected at the
//! boundary with a "must be an object" error, before any component is
//! wrapped.

mod error;
mod overrides;
mod sheet;

pub use error::StylesheetError;
pub use overrides::{Overrides, COMPOSE_KEY};
pub use sheet::Stylesheet;
