use actix_web::{Error, HttpResponse, Responder, web};
use hand_tracking::{Frame, FramePayload};
use tracing::warn;

use crate::models::{BucketInfo, BucketPosition};
use crate::state::AppState;

pub async fn bucket_position(state: web::Data<AppState>) -> impl Responder {
	HttpResponse::Ok().json(BucketPosition::from(state.snapshot().await))
}

pub async fn bucket_info(state: web::Data<AppState>) -> impl Responder {
	HttpResponse::Ok().json(BucketInfo::from(state.snapshot().await))
}

pub async fn overlay(state: web::Data<AppState>) -> Result<impl Responder, Error> {
	match state.overlay().await {
		Some(overlay) => Ok(HttpResponse::Ok().json(overlay)),
		None => Err(actix_web::error::ErrorNotFound("No hand observed yet")),
	}
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
	HttpResponse::Ok().json(state.health().await)
}

pub async fn submit_frame(
	state: web::Data<AppState>,
	payload: web::Json<FramePayload>,
) -> Result<impl Responder, Error> {
	let frame =
		Frame::try_from(payload.into_inner()).map_err(|err| actix_web::error::ErrorBadRequest(err.to_string()))?;

	state.submit_frame(frame).await.map_err(|err| {
		warn!(error = %err, "Dropping pushed frame");
		actix_web::error::ErrorServiceUnavailable(err.to_string())
	})?;

	Ok(HttpResponse::Accepted().finish())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
	cfg.route("/bucket_position", web::get().to(bucket_position))
		.route("/bucket_info", web::get().to(bucket_info))
		.route("/overlay", web::get().to(overlay))
		.route("/health", web::get().to(health))
		.route("/frames", web::post().to(submit_frame));
}
