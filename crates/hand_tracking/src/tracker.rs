use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::gesture::{Gesture, GestureClassifier, GestureThresholds};
use crate::landmarks::HandObservation;
use crate::smoothing::{DEFAULT_ALPHA, smooth, target_x};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
	pub frame_width: u32,
	pub alpha: f64,
	/// Keep the bucket inside `[0, frame_width]` when landmarks stray off-frame.
	pub clamp_to_frame: bool,
	#[serde(skip)]
	pub thresholds: GestureThresholds,
}

impl Default for TrackerConfig {
	fn default() -> Self {
		Self { frame_width: 640, alpha: DEFAULT_ALPHA, clamp_to_frame: false, thresholds: GestureThresholds::default() }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerPhase {
	/// No hand seen yet this session.
	Idle,
	Tracking,
}

/// What downstream consumers read: one frame's position and gesture, always from the same update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrackerSnapshot {
	#[serde(rename = "x")]
	pub bucket_x: i32,
	pub gesture: Gesture,
}

/// Per-session tracking state.
///
/// Frames without a hand leave the state untouched, so the bucket and gesture freeze at their
/// last observed values. Gestures are not debounced: every observed frame replaces the label.
#[derive(Clone, Debug)]
pub struct HandTracker {
	config: TrackerConfig,
	classifier: GestureClassifier,
	phase: TrackerPhase,
	bucket_x: i32,
	gesture: Gesture,
}

impl HandTracker {
	#[must_use]
	pub fn new(config: TrackerConfig) -> Self {
		Self {
			classifier: GestureClassifier::new(config.thresholds),
			phase: TrackerPhase::Idle,
			bucket_x: pixels(config.frame_width / 2),
			gesture: Gesture::None,
			config,
		}
	}

	pub fn update(&mut self, observation: Option<&HandObservation>) -> TrackerSnapshot {
		let Some(observation) = observation else {
			return self.snapshot();
		};

		let features = FeatureVector::extract(observation);
		let target = target_x(observation, self.config.frame_width);

		let mut bucket_x = smooth(self.bucket_x, target, self.config.alpha);
		if self.config.clamp_to_frame {
			bucket_x = bucket_x.clamp(0, pixels(self.config.frame_width));
		}

		self.bucket_x = bucket_x;
		self.gesture = self.classifier.classify(&features);
		self.phase = TrackerPhase::Tracking;

		self.snapshot()
	}

	#[must_use]
	pub const fn snapshot(&self) -> TrackerSnapshot {
		TrackerSnapshot { bucket_x: self.bucket_x, gesture: self.gesture }
	}

	#[must_use]
	pub const fn phase(&self) -> TrackerPhase {
		self.phase
	}
}

fn pixels(value: u32) -> i32 {
	i32::try_from(value).unwrap_or(i32::MAX)
}

impl Default for HandTracker {
	fn default() -> Self {
		Self::new(TrackerConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::landmarks::tests::hand_with;
	use crate::landmarks::{INDEX_MCP, INDEX_TIP, PINKY_MCP, PINKY_TIP, THUMB_TIP};

	/// Fingertips at `x`, knuckles close together, thumb and index well apart vertically.
	fn neutral_hand(x: f64) -> HandObservation {
		hand_with(&[
			(THUMB_TIP, x, 0.40),
			(INDEX_TIP, x, 0.55),
			(PINKY_TIP, x, 0.45),
			(INDEX_MCP, 0.45, 0.6),
			(PINKY_MCP, 0.55, 0.6),
		])
	}

	fn pinch_hand(x: f64) -> HandObservation {
		hand_with(&[(THUMB_TIP, x, 0.50), (INDEX_TIP, x, 0.53), (INDEX_MCP, 0.45, 0.6), (PINKY_MCP, 0.55, 0.6)])
	}

	#[test]
	fn starts_idle_at_frame_centre() {
		let tracker = HandTracker::default();
		assert_eq!(tracker.phase(), TrackerPhase::Idle);
		assert_eq!(tracker.snapshot(), TrackerSnapshot { bucket_x: 320, gesture: Gesture::None });

		let odd = HandTracker::new(TrackerConfig { frame_width: 641, ..Default::default() });
		assert_eq!(odd.snapshot().bucket_x, 320);
	}

	#[test]
	fn centred_hand_keeps_centre() {
		let mut tracker = HandTracker::default();
		let snapshot = tracker.update(Some(&neutral_hand(0.5)));

		assert_eq!(snapshot.bucket_x, 320);
		assert_eq!(snapshot.gesture, Gesture::None);
		assert_eq!(tracker.phase(), TrackerPhase::Tracking);
	}

	#[test]
	fn open_palm_overrides_pinch() {
		let hand = hand_with(&[
			(THUMB_TIP, 0.50, 0.50),
			(INDEX_TIP, 0.50, 0.55),
			(INDEX_MCP, 0.30, 0.60),
			(PINKY_MCP, 0.70, 0.60),
		]);
		let features = FeatureVector::extract(&hand);
		assert!((features.spread - 0.4).abs() < 1e-9);
		assert!((features.thumb_index - 0.05).abs() < 1e-9);

		let mut tracker = HandTracker::default();
		assert_eq!(tracker.update(Some(&hand)).gesture, Gesture::Start);
	}

	#[test]
	fn missing_hand_freezes_snapshot() {
		let mut tracker = HandTracker::default();
		let observed = tracker.update(Some(&pinch_hand(0.8)));
		assert_eq!(observed.gesture, Gesture::Pause);

		let frozen = tracker.update(None);
		assert_eq!(frozen, observed);
		assert_eq!(tracker.phase(), TrackerPhase::Tracking);
	}

	#[test]
	fn repeated_missing_frames_change_nothing() {
		let mut tracker = HandTracker::default();
		tracker.update(Some(&neutral_hand(0.9)));
		let committed = tracker.snapshot();

		for _ in 0..25 {
			assert_eq!(tracker.update(None), committed);
		}
	}

	#[test]
	fn missing_hand_while_idle_stays_idle() {
		let mut tracker = HandTracker::default();
		assert_eq!(tracker.update(None), TrackerSnapshot { bucket_x: 320, gesture: Gesture::None });
		assert_eq!(tracker.phase(), TrackerPhase::Idle);
	}

	#[test]
	fn bucket_follows_hand_gradually() {
		let mut tracker = HandTracker::default();
		let hand = neutral_hand(420.0 / 640.0);

		assert_eq!(tracker.update(Some(&hand)).bucket_x, 350);
		assert_eq!(tracker.update(Some(&hand)).bucket_x, 371);
	}

	#[test]
	fn gesture_flickers_without_debounce() {
		let mut tracker = HandTracker::default();
		assert_eq!(tracker.update(Some(&pinch_hand(0.5))).gesture, Gesture::Pause);
		assert_eq!(tracker.update(Some(&neutral_hand(0.5))).gesture, Gesture::None);
		assert_eq!(tracker.update(Some(&pinch_hand(0.5))).gesture, Gesture::Pause);
	}

	#[test]
	fn off_frame_landmarks_overflow_by_default() {
		let mut tracker = HandTracker::default();
		for _ in 0..40 {
			tracker.update(Some(&neutral_hand(1.5)));
		}
		assert!(tracker.snapshot().bucket_x > 640);
	}

	#[test]
	fn clamping_keeps_bucket_on_frame() {
		let mut tracker = HandTracker::new(TrackerConfig { clamp_to_frame: true, ..Default::default() });
		for _ in 0..40 {
			tracker.update(Some(&neutral_hand(1.5)));
		}
		assert_eq!(tracker.snapshot().bucket_x, 640);

		for _ in 0..40 {
			tracker.update(Some(&neutral_hand(-0.5)));
		}
		assert_eq!(tracker.snapshot().bucket_x, 0);
	}

	#[test]
	fn sessions_are_independent() {
		let mut left = HandTracker::default();
		let right = HandTracker::default();

		left.update(Some(&neutral_hand(0.0)));

		assert_ne!(left.snapshot(), right.snapshot());
		assert_eq!(right.phase(), TrackerPhase::Idle);
	}

	#[test]
	fn snapshot_serializes_with_short_keys() {
		let snapshot = TrackerSnapshot { bucket_x: 412, gesture: Gesture::Restart };
		assert_eq!(serde_json::to_string(&snapshot).unwrap(), r#"{"x":412,"gesture":"restart"}"#);
	}
}
