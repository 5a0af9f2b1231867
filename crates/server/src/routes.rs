use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Index;

use crate::startup::AppState;

pub mod file;

/// `GET /`: static service metadata, no storage access.
pub async fn index() -> Json<Index> {
    Json(Index::up())
}

/// Build the full application router.
///
/// `max_body_bytes` is enforced before any handler reads the body; larger
/// requests get `413 Payload Too Large`.
pub fn build_router(state: AppState, cors: CorsLayer, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route(
            "/api/file",
            get(file::read_file)
                .post(file::create_file)
                .put(file::replace_file)
                .delete(file::delete_file),
        )
        .route("/api/file/raw", get(file::read_raw))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
