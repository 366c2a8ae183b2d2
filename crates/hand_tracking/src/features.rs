use crate::landmarks::{HandObservation, INDEX_MCP, INDEX_TIP, PINKY_MCP, PINKY_TIP, THUMB_TIP};

/// Distances between fingertips and knuckles, in normalized units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureVector {
	pub thumb_index: f64,
	pub thumb_pinky: f64,
	/// Index MCP to pinky MCP; wide when the palm faces the camera.
	pub spread: f64,
}

impl FeatureVector {
	#[must_use]
	pub const fn new(thumb_index: f64, thumb_pinky: f64, spread: f64) -> Self {
		Self { thumb_index, thumb_pinky, spread }
	}

	#[must_use]
	pub fn extract(observation: &HandObservation) -> Self {
		Self {
			thumb_index: observation.distance(THUMB_TIP, INDEX_TIP),
			thumb_pinky: observation.distance(THUMB_TIP, PINKY_TIP),
			spread: observation.distance(INDEX_MCP, PINKY_MCP),
		}
	}
}
