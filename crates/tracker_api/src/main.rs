use actix_web::{App, HttpServer, web};
use anyhow::Context;
use hand_tracking::ConfidenceGate;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::routes;
use crate::config::Config;
use crate::cors::build_cors;
use crate::feed::{spawn_frame_processor, spawn_replay_feed};
use crate::state::AppState;

mod api;
mod config;
mod cors;
mod feed;
mod models;
mod state;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	info!("✅ Starting hand tracker");

	let config_path = std::env::var("TRACKER_CONFIG").unwrap_or_else(|_| String::from("config.toml"));
	let config = Config::load(&config_path).context("Failed to load configuration")?;
	info!(path = %config_path, "✅ Configuration loaded");

	let (frames_tx, frames_rx) = mpsc::channel(config.feed.channel_capacity);
	let state = AppState::new(config.tracker_config(), config.overlay.frame_height, frames_tx);

	let gate = ConfidenceGate::new(config.feed.min_detection_confidence, config.feed.min_tracking_confidence);
	spawn_frame_processor(state.clone(), frames_rx, gate);

	match config.feed.replay_path.clone() {
		Some(path) => {
			spawn_replay_feed(path, config.feed.clone(), state.frame_sender());
		},
		None => warn!("No replay_path configured, waiting for frames on POST /frames"),
	}

	let origins = config.server.allowed_origins.clone();
	info!(host = %config.server.host, port = config.server.port, "🔍 Serving bucket position");

	HttpServer::new(move || {
		App::new().wrap(build_cors(&origins)).app_data(web::Data::new(state.clone())).configure(routes)
	})
	.bind((config.server.host.as_str(), config.server.port))?
	.run()
	.await?;

	Ok(())
}
