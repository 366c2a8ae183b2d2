use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
	#[default]
	None,
	/// Open palm.
	Start,
	/// Thumb and index pinched together.
	Pause,
	/// Shaka: thumb and pinky stretched away from each other.
	Restart,
}

impl Gesture {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Start => "start",
			Self::Pause => "pause",
			Self::Restart => "restart",
		}
	}
}

impl std::fmt::Display for Gesture {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classification thresholds in normalized coordinate units.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
	/// Start fires when the knuckle spread is strictly above this.
	pub open_palm_min_spread: f64,
	/// Pause fires when thumb and index are strictly closer than this.
	pub pinch_max_thumb_index: f64,
	pub shaka_min_thumb_index: f64,
	pub shaka_min_thumb_pinky: f64,
}

impl Default for GestureThresholds {
	fn default() -> Self {
		Self {
			open_palm_min_spread: 0.35,
			pinch_max_thumb_index: 0.07,
			shaka_min_thumb_index: 0.2,
			shaka_min_thumb_pinky: 0.25,
		}
	}
}

/// One entry of the classification table.
#[derive(Clone, Copy, Debug)]
pub struct GestureRule {
	pub gesture: Gesture,
	predicate: fn(&FeatureVector, &GestureThresholds) -> bool,
}

impl GestureRule {
	#[must_use]
	pub fn matches(&self, features: &FeatureVector, thresholds: &GestureThresholds) -> bool {
		(self.predicate)(features, thresholds)
	}
}

fn is_open_palm(features: &FeatureVector, thresholds: &GestureThresholds) -> bool {
	features.spread > thresholds.open_palm_min_spread
}

fn is_pinch(features: &FeatureVector, thresholds: &GestureThresholds) -> bool {
	features.thumb_index < thresholds.pinch_max_thumb_index
}

fn is_shaka(features: &FeatureVector, thresholds: &GestureThresholds) -> bool {
	features.thumb_index > thresholds.shaka_min_thumb_index && features.thumb_pinky > thresholds.shaka_min_thumb_pinky
}

/// Evaluated top to bottom; the first match wins. The conditions overlap, so order matters.
static RULES: [GestureRule; 3] = [
	GestureRule { gesture: Gesture::Start, predicate: is_open_palm },
	GestureRule { gesture: Gesture::Pause, predicate: is_pinch },
	GestureRule { gesture: Gesture::Restart, predicate: is_shaka },
];

#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
	thresholds: GestureThresholds,
}

impl GestureClassifier {
	#[must_use]
	pub const fn new(thresholds: GestureThresholds) -> Self {
		Self { thresholds }
	}

	#[must_use]
	pub fn rules(&self) -> &'static [GestureRule] {
		&RULES
	}

	/// Falls back to `Gesture::None` when no rule matches.
	#[must_use]
	pub fn classify(&self, features: &FeatureVector) -> Gesture {
		RULES.iter().find(|rule| rule.matches(features, &self.thresholds)).map_or(Gesture::None, |rule| rule.gesture)
	}
}
