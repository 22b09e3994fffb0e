//! Fading-stroke lifecycle projection helpers.
//!
//! Strokes are transient: each carries a start timestamp and a duration,
//! and the renderer drops it once fully faded. The math here is pure so the
//! render loop owns all timing decisions.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use crate::types::FadingStroke;

/// Remaining opacity for `stroke` at `now_ms`, in `[0.0, 1.0]`.
///
/// 1.0 at the start timestamp, falling linearly to 0.0 once the duration
/// has elapsed. Timestamps before the start clamp to 1.0; non-positive
/// durations count as already faded.
#[must_use]
pub fn fade_alpha(stroke: &FadingStroke, now_ms: f64) -> f64 {
    if stroke.duration <= 0.0 {
        return 0.0;
    }
    let elapsed = now_ms - stroke.start_time;
    (1.0 - elapsed / stroke.duration).clamp(0.0, 1.0)
}

/// Whether `stroke` has fully faded at `now_ms`.
#[must_use]
pub fn is_expired(stroke: &FadingStroke, now_ms: f64) -> bool {
    fade_alpha(stroke, now_ms) <= 0.0
}

/// Drop fully faded strokes, keeping arrival order for the rest.
pub fn prune_expired(strokes: &mut Vec<FadingStroke>, now_ms: f64) {
    strokes.retain(|stroke| !is_expired(stroke, now_ms));
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Reads the browser clock under `hydrate`. Native builds get `0.0` and
/// are expected to pass explicit timestamps instead.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
