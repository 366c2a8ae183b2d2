use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::warn;

use crate::landmarks::{HandObservation, InvalidObservation, Landmark};

/// Output of the landmark detector for a single video frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	pub observation: Option<HandObservation>,
	pub confidence: f64,
}

impl Frame {
	#[must_use]
	pub const fn observed(observation: HandObservation, confidence: f64) -> Self {
		Self { observation: Some(observation), confidence }
	}

	#[must_use]
	pub const fn empty() -> Self {
		Self { observation: None, confidence: 0.0 }
	}
}

/// Wire form of a frame, shared by replay files and the HTTP push endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct FramePayload {
	pub landmarks: Option<Vec<Landmark>>,
	#[serde(default = "full_confidence")]
	pub confidence: f64,
}

const fn full_confidence() -> f64 {
	1.0
}

impl TryFrom<FramePayload> for Frame {
	type Error = InvalidObservation;

	fn try_from(payload: FramePayload) -> Result<Self, Self::Error> {
		let observation = payload.landmarks.map(HandObservation::try_from).transpose()?;
		Ok(Self { observation, confidence: payload.confidence })
	}
}

/// Anything that yields detector frames in capture order.
#[async_trait::async_trait]
pub trait LandmarkSource: Send {
	/// Returns `Ok(None)` once the source is exhausted.
	async fn next_frame(&mut self) -> anyhow::Result<Option<Frame>>;
}

/// Drops low-confidence detections the way the upstream detector does in single-hand mode.
///
/// A hand that is not being tracked must clear `min_detection`; once tracked, frames only need
/// `min_tracking` to keep it.
#[derive(Clone, Debug)]
pub struct ConfidenceGate {
	min_detection: f64,
	min_tracking: f64,
	tracking: bool,
}

impl ConfidenceGate {
	#[must_use]
	pub const fn new(min_detection: f64, min_tracking: f64) -> Self {
		Self { min_detection, min_tracking, tracking: false }
	}

	pub fn admit(&mut self, frame: Frame) -> Option<HandObservation> {
		let threshold = if self.tracking { self.min_tracking } else { self.min_detection };

		match frame.observation {
			Some(observation) if frame.confidence >= threshold => {
				self.tracking = true;
				Some(observation)
			},
			_ => {
				self.tracking = false;
				None
			},
		}
	}
}

impl Default for ConfidenceGate {
	fn default() -> Self {
		Self::new(0.6, 0.6)
	}
}

/// Replays a JSON-lines landmark recording, one `FramePayload` per line.
pub struct ReplaySource<R> {
	lines: Lines<R>,
	line_number: usize,
}

impl<R: AsyncBufRead + Unpin> ReplaySource<R> {
	pub fn new(reader: R) -> Self {
		Self { lines: reader.lines(), line_number: 0 }
	}
}

impl ReplaySource<BufReader<File>> {
	pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
		let path = path.as_ref();
		let file =
			File::open(path).await.with_context(|| format!("Failed to open replay file: {}", path.display()))?;
		Ok(Self::new(BufReader::new(file)))
	}
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> LandmarkSource for ReplaySource<R> {
	async fn next_frame(&mut self) -> anyhow::Result<Option<Frame>> {
		while let Some(line) = self.lines.next_line().await.context("Failed to read replay line")? {
			self.line_number += 1;

			let line = line.trim();
			if line.is_empty() {
				continue;
			}

			match parse_frame(line) {
				Ok(frame) => return Ok(Some(frame)),
				Err(err) => warn!(line = self.line_number, error = %err, "Skipping unreadable replay frame"),
			}
		}

		Ok(None)
	}
}

fn parse_frame(line: &str) -> anyhow::Result<Frame> {
	let payload: FramePayload = serde_json::from_str(line).context("Invalid frame JSON")?;
	Ok(Frame::try_from(payload)?)
}
