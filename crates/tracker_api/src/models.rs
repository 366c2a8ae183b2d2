use chrono::{DateTime, Utc};
use hand_tracking::{TrackerPhase, TrackerSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketPosition {
	pub x: i32,
}

impl From<TrackerSnapshot> for BucketPosition {
	fn from(snapshot: TrackerSnapshot) -> Self {
		Self { x: snapshot.bucket_x }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInfo {
	pub x: i32,
	pub gesture: String,
}

impl From<TrackerSnapshot> for BucketInfo {
	fn from(snapshot: TrackerSnapshot) -> Self {
		Self { x: snapshot.bucket_x, gesture: snapshot.gesture.as_str().to_string() }
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
	pub phase: TrackerPhase,
	pub frames_processed: u64,
	pub last_observed_at: Option<DateTime<Utc>>,
}
