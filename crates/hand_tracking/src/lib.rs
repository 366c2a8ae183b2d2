mod features;
mod gesture;
mod landmarks;
mod overlay;
mod smoothing;
mod source;
mod tracker;

pub use features::FeatureVector;
pub use gesture::{Gesture, GestureClassifier, GestureRule, GestureThresholds};
pub use landmarks::{
	HandObservation, INDEX_MCP, INDEX_TIP, InvalidObservation, LANDMARK_COUNT, Landmark, PINKY_MCP, PINKY_TIP,
	THUMB_TIP, distance,
};
pub use overlay::{HAND_CONNECTIONS, Overlay, PixelPoint};
pub use smoothing::{DEFAULT_ALPHA, smooth, target_x};
pub use source::{ConfidenceGate, Frame, FramePayload, LandmarkSource, ReplaySource};
pub use tracker::{HandTracker, TrackerConfig, TrackerPhase, TrackerSnapshot};
