use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use hand_tracking::{ConfidenceGate, Frame, Gesture, LandmarkSource, ReplaySource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::config::FeedConfig;
use crate::state::AppState;

/// Feeds every frame from the channel into the session, one at a time and in order.
pub fn spawn_frame_processor(state: AppState, frames: mpsc::Receiver<Frame>, gate: ConfidenceGate) -> JoinHandle<()> {
	tokio::spawn(run_frame_processor(state, frames, gate))
}

pub async fn run_frame_processor(state: AppState, mut frames: mpsc::Receiver<Frame>, mut gate: ConfidenceGate) {
	let mut last_gesture: Option<Gesture> = None;

	while let Some(frame) = frames.recv().await {
		let observation = gate.admit(frame);
		let snapshot = state.apply_frame(observation.as_ref()).await;

		if last_gesture != Some(snapshot.gesture) {
			info!(gesture = %snapshot.gesture, x = snapshot.bucket_x, "Gesture changed");
			last_gesture = Some(snapshot.gesture);
		} else {
			debug!(x = snapshot.bucket_x, observed = observation.is_some(), "Frame processed");
		}
	}

	info!("Frame channel closed, processor stopping");
}

pub fn spawn_replay_feed(path: PathBuf, config: FeedConfig, frames: mpsc::Sender<Frame>) -> JoinHandle<()> {
	tokio::spawn(async move {
		if let Err(err) = run_replay(&path, &config, &frames).await {
			error!(path = %path.display(), error = %err, "Replay feed failed");
		}
	})
}

async fn run_replay(path: &Path, config: &FeedConfig, frames: &mpsc::Sender<Frame>) -> anyhow::Result<()> {
	let pacing = Duration::from_millis(config.frame_interval_ms);

	loop {
		let mut source = ReplaySource::open(path).await.context("Failed to start replay")?;
		info!(path = %path.display(), "Replaying landmark recording");

		let sent = pump_frames(&mut source, frames, pacing).await?;
		info!(frames = sent, "Replay finished");

		if !config.loop_playback || sent == 0 || frames.is_closed() {
			return Ok(());
		}
	}
}

/// Pushes frames from `source` into the channel at most once per `pacing`.
///
/// `send` waits while the channel is full, so a slow processor holds the source back instead of
/// frames piling up. Returns the number of frames delivered.
pub async fn pump_frames<S>(source: &mut S, frames: &mpsc::Sender<Frame>, pacing: Duration) -> anyhow::Result<usize>
where
	S: LandmarkSource + ?Sized,
{
	let mut ticker = (!pacing.is_zero()).then(|| {
		let mut ticker = tokio::time::interval(pacing);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
		ticker
	});

	let mut sent = 0;
	while let Some(frame) = source.next_frame().await? {
		if let Some(ticker) = ticker.as_mut() {
			ticker.tick().await;
		}

		if frames.send(frame).await.is_err() {
			warn!("Frame channel closed, stopping feed");
			break;
		}
		sent += 1;
	}

	Ok(sent)
}
