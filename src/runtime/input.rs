//! Range enforcement for the seek and volume controls.
//!
//! The player applies whatever value it is given; these helpers play the part
//! of the sliders, keeping values inside the control's declared range.

use std::time::Duration;

/// New seek target after moving `delta_secs` from `current`, limited to
/// `0..=duration`. `None` while the duration is unknown: the seek range is
/// empty until metadata arrives.
pub fn seek_target(current: Duration, duration: Duration, delta_secs: i64) -> Option<Duration> {
    if duration.is_zero() {
        return None;
    }
    let step = Duration::from_secs(delta_secs.unsigned_abs());
    let target = if delta_secs < 0 {
        current.saturating_sub(step)
    } else {
        current.saturating_add(step)
    };
    Some(target.min(duration))
}

/// Move the volume slider by `steps` notches of size `step`, snapping to the
/// slider grid within `0.0..=1.0`.
///
/// When `step` does not divide 1.0 the last notch is shorter: full volume is
/// always one notch above the highest grid point below it.
pub fn volume_notch(current: f32, step: f32, steps: i32) -> f32 {
    // Top notch index; the tolerance keeps 1.0 / 0.1 from rounding up to 11.
    let top = (1.0 / step - 1e-4).ceil();
    let position = if current >= 1.0 {
        top
    } else {
        (current / step).round().min(top)
    };
    let clamped = (position + steps as f32).clamp(0.0, top);
    (clamped * step).min(1.0)
}
