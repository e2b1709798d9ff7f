//! In-process warning-capture harness for applications built with
//! styleable.
//!
//! The framework reports host-model problems (a missing required prop, for
//! example) through an injectable warning sink rather than failing the
//! render. In tests those warnings usually mean a broken fixture, so this
//! crate captures them and turns them into assertion failures - the sink
//! is swapped, never a global logger monkey-patched.
//!
//! The sink is process-global: tests using this harness must not run
//! concurrently with each other. Annotate them with `#[serial]` from the
//! `serial_test` crate.
//!
//! # Example
//!
//! ```rust
//! use styleable_test::{assert_no_warnings, assert_warned};
//!
//! assert_no_warnings(|| {
//!     // exercise code that must stay quiet
//! });
//!
//! assert_warned("required prop", || {
//!     styleable::warn("required prop \"aReqProp\" was not supplied to the wrapped component");
//! });
//! ```

use std::sync::Mutex;

use once_cell::sync::Lazy;

use styleable::{reset_warning_sink, set_warning_sink};

static CAPTURED: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn capturing_sink(message: &str) {
    CAPTURED.lock().unwrap().push(message.to_string());
}

/// Runs `f` with warnings captured and returns everything that was
/// emitted.
///
/// The default sink is restored afterwards, including when `f` panics.
pub fn capture_warnings<F: FnOnce()>(f: F) -> Vec<String> {
    struct Restore;
    impl Drop for Restore {
        fn drop(&mut self) {
            reset_warning_sink();
        }
    }

    CAPTURED.lock().unwrap().clear();
    set_warning_sink(capturing_sink);
    let _restore = Restore;
    f();
    std::mem::take(&mut *CAPTURED.lock().unwrap())
}

/// Fails the test if `f` emits any warning.
pub fn assert_no_warnings<F: FnOnce()>(f: F) {
    let warnings = capture_warnings(f);
    assert!(
        warnings.is_empty(),
        "expected no warnings, got: {:?}",
        warnings
    );
}

/// Fails the test unless `f` emits a warning containing `pattern`.
pub fn assert_warned<F: FnOnce()>(pattern: &str, f: F) {
    let warnings = capture_warnings(f);
    assert!(
        warnings.iter().any(|w| w.contains(pattern)),
        "expected a warning containing {:?}, got: {:?}",
        pattern,
        warnings
    );
}
