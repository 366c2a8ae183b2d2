use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hand_tracking::{GestureThresholds, TrackerConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub server: ServerConfig,
	pub tracker: TrackerConfig,
	pub gesture: GestureThresholds,
	pub overlay: OverlayConfig,
	pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: String::from("0.0.0.0"),
			port: 5000,
			allowed_origins: vec![String::from("http://localhost:5000"), String::from("http://127.0.0.1:5000")],
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
	pub frame_height: u32,
}

impl Default for OverlayConfig {
	fn default() -> Self {
		Self { frame_height: 480 }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
	/// JSON-lines landmark recording to play back. Without it frames only arrive over HTTP.
	pub replay_path: Option<PathBuf>,
	pub frame_interval_ms: u64,
	pub channel_capacity: usize,
	pub loop_playback: bool,
	pub min_detection_confidence: f64,
	pub min_tracking_confidence: f64,
}

impl Default for FeedConfig {
	fn default() -> Self {
		Self {
			replay_path: None,
			frame_interval_ms: 33,
			channel_capacity: 4,
			loop_playback: false,
			min_detection_confidence: 0.6,
			min_tracking_confidence: 0.6,
		}
	}
}

impl Config {
	pub fn load(path: &str) -> Result<Self> {
		let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file: {path}"))?;
		Self::from_toml(&content)
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		let config: Self = toml::from_str(content).context("Failed to parse config file")?;

		config.validate()?;

		Ok(config)
	}

	#[must_use]
	pub fn tracker_config(&self) -> TrackerConfig {
		TrackerConfig { thresholds: self.gesture, ..self.tracker }
	}

	fn validate(&self) -> Result<()> {
		if self.tracker.frame_width == 0 {
			anyhow::bail!("tracker.frame_width must be greater than 0");
		}

		if !(self.tracker.alpha > 0.0 && self.tracker.alpha <= 1.0) {
			anyhow::bail!("tracker.alpha must be in (0, 1]");
		}

		let thresholds = [
			self.gesture.open_palm_min_spread,
			self.gesture.pinch_max_thumb_index,
			self.gesture.shaka_min_thumb_index,
			self.gesture.shaka_min_thumb_pinky,
		];
		if thresholds.iter().any(|value| !value.is_finite() || *value < 0.0) {
			anyhow::bail!("gesture thresholds must be non-negative");
		}

		if self.overlay.frame_height == 0 {
			anyhow::bail!("overlay.frame_height must be greater than 0");
		}

		if self.feed.channel_capacity == 0 {
			anyhow::bail!("feed.channel_capacity must be greater than 0");
		}

		for (name, value) in [
			("min_detection_confidence", self.feed.min_detection_confidence),
			("min_tracking_confidence", self.feed.min_tracking_confidence),
		] {
			if !(0.0..=1.0).contains(&value) {
				anyhow::bail!("feed.{name} must be between 0 and 1");
			}
		}

		Ok(())
	}
}
