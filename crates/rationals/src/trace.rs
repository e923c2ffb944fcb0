//! Opt-in diagnostics for rejected operations.
//!
//! With `RATIONALS_TRACE=1` every failed construction, division or parse
//! writes a single JSON line to stderr. Results are never affected.

use std::cell::Cell;

use serde::Serialize;

use crate::RationalError;

pub const TRACE_ENV: &str = "RATIONALS_TRACE";

thread_local! {
    static TRACE_OVERRIDE: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Forces tracing on or off for the current thread. `None` defers to
/// [`TRACE_ENV`] again.
pub fn set_override(enabled: Option<bool>) {
    TRACE_OVERRIDE.with(|cell| cell.set(enabled));
}

pub fn enabled() -> bool {
    TRACE_OVERRIDE.with(|cell| {
        cell.get().unwrap_or_else(|| {
            std::env::var(TRACE_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        })
    })
}

#[derive(Debug, Serialize)]
struct Rejection<'a> {
    event: &'a str,
    input: &'a str,
    reason: String,
}

fn render_rejection(event: &str, input: &str, err: &RationalError) -> Option<String> {
    let payload = Rejection {
        event,
        input,
        reason: err.to_string(),
    };
    serde_json::to_string(&payload).ok()
}

/// `input` is only built when tracing is on.
pub(crate) fn rejected(event: &str, input: impl FnOnce() -> String, err: &RationalError) {
    if !enabled() {
        return;
    }
    if let Some(line) = render_rejection(event, &input(), err) {
        eprintln!("{line}");
    }
}
