//! Injectable warning channel.
//!
//! Host-model checks that should not fail a render (a missing required
//! prop, for example) are reported here instead. The sink is a process
//! global so applications can route warnings wherever they want, and test
//! harnesses can capture them; the `styleable-test` crate provides such a
//! harness.

use std::sync::Mutex;

use console::Style;
use once_cell::sync::Lazy;

/// Signature for warning sinks: receives the warning message.
pub type WarningSink = fn(&str);

static WARNING_SINK: Lazy<Mutex<WarningSink>> = Lazy::new(|| Mutex::new(stderr_sink));

/// Overrides the sink that receives framework warnings. Useful for testing.
pub fn set_warning_sink(sink: WarningSink) {
    let mut guard = WARNING_SINK.lock().unwrap();
    *guard = sink;
}

/// Restores the default sink, which writes a styled line to stderr.
pub fn reset_warning_sink() {
    set_warning_sink(stderr_sink);
}

/// Emits a warning through the current sink.
pub fn warn(message: &str) {
    let sink = *WARNING_SINK.lock().unwrap();
    sink(message);
}

fn stderr_sink(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        message
    );
}
