use std::sync::Arc;

use chrono::{DateTime, Utc};
use hand_tracking::{Frame, HandObservation, HandTracker, Overlay, TrackerConfig, TrackerSnapshot};
use tokio::sync::{RwLock, mpsc};

use crate::models::HealthResponse;

struct Session {
	tracker: HandTracker,
	overlay: Option<Overlay>,
	frames_processed: u64,
	last_observed_at: Option<DateTime<Utc>>,
}

/// Shared handle to one tracking session.
///
/// The frame processor commits through `apply_frame` under the write lock; HTTP handlers read
/// whole snapshots under the read lock, so position and gesture always come from the same frame.
#[derive(Clone)]
pub struct AppState {
	session: Arc<RwLock<Session>>,
	frames: mpsc::Sender<Frame>,
	frame_width: u32,
	frame_height: u32,
}

impl AppState {
	#[must_use]
	pub fn new(config: TrackerConfig, frame_height: u32, frames: mpsc::Sender<Frame>) -> Self {
		let session = Session {
			tracker: HandTracker::new(config),
			overlay: None,
			frames_processed: 0,
			last_observed_at: None,
		};

		Self { session: Arc::new(RwLock::new(session)), frames, frame_width: config.frame_width, frame_height }
	}

	pub async fn apply_frame(&self, observation: Option<&HandObservation>) -> TrackerSnapshot {
		let overlay = observation.map(|observation| Overlay::project(observation, self.frame_width, self.frame_height));

		let mut session = self.session.write().await;
		let snapshot = session.tracker.update(observation);
		session.frames_processed += 1;
		if overlay.is_some() {
			session.overlay = overlay;
			session.last_observed_at = Some(Utc::now());
		}
		drop(session);

		snapshot
	}

	pub async fn snapshot(&self) -> TrackerSnapshot {
		self.session.read().await.tracker.snapshot()
	}

	pub async fn overlay(&self) -> Option<Overlay> {
		self.session.read().await.overlay.clone()
	}

	pub async fn health(&self) -> HealthResponse {
		let session = self.session.read().await;
		HealthResponse {
			phase: session.tracker.phase(),
			frames_processed: session.frames_processed,
			last_observed_at: session.last_observed_at,
		}
	}

	/// Queues a frame for the processor, waiting while the pipeline is full.
	pub async fn submit_frame(&self, frame: Frame) -> anyhow::Result<()> {
		self.frames.send(frame).await.map_err(|_| anyhow::anyhow!("Frame pipeline is closed"))
	}

	pub fn frame_sender(&self) -> mpsc::Sender<Frame> {
		self.frames.clone()
	}
}
