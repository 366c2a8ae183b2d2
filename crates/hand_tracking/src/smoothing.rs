use crate::landmarks::{HandObservation, INDEX_TIP, THUMB_TIP};

/// Share of the new target blended in per frame; the rest is kept from the previous position.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// One step of an exponential moving average over integer pixel positions.
///
/// Rounds half away from zero (`f64::round`), so `0.5 -> 1` and `-0.5 -> -1`.
#[must_use]
pub fn smooth(previous: i32, target: i32, alpha: f64) -> i32 {
	f64::from(previous).mul_add(1.0 - alpha, f64::from(target) * alpha).round() as i32
}

/// Pixel midpoint of the thumb and index fingertips, rounded half away from zero.
#[must_use]
pub fn target_x(observation: &HandObservation, frame_width: u32) -> i32 {
	let thumb = observation.landmark(THUMB_TIP);
	let index = observation.landmark(INDEX_TIP);
	(f64::midpoint(thumb.x, index.x) * f64::from(frame_width)).round() as i32
}
