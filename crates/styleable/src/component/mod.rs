//! The component decorator: wrapping components with a base stylesheet.
//!
//! This module renders the host component model as plain Rust types:
//!
//! - [`Component`] is the contract a renderable thing satisfies: a render
//!   function plus declared prop metadata ([`PropSpec`] list and default
//!   [`Props`])
//! - [`FnComponent`] adapts closures, carrying their metadata as attached
//!   values
//! - [`Styleable`] is the decorator factory; [`Styled`] is the wrapper it
//!   produces, holding the inner component and the base stylesheet and
//!   injecting the merged class map on every render
//! - [`verify_props`] checks supplied props against a component's
//!   declaration
//!
//! The wrapper never inspects the component it holds - all state is
//! explicit struct fields, and metadata flows through untouched so a host
//! can validate the inner component exactly as it would undecorated.

mod core;
mod props;
mod styled;
mod verify;

pub use self::core::{Component, FnComponent};
pub use props::Props;
pub use styled::{Styleable, Styled};
pub use verify::{verify_props, PropSpec};
