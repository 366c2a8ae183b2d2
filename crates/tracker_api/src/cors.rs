use actix_cors::Cors;
use actix_web::http::header;

pub fn build_cors(allowed_origins: &[String]) -> Cors {
	allowed_origins
		.iter()
		.fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
		.allowed_methods(vec!["GET", "POST"])
		.allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
		.max_age(3600)
}
