use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::MAX_UPLOAD_BYTES;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, transcribe_handler};
use crate::presentation::state::AppState;

/// Room for multipart boundaries and small text fields on top of the
/// upload ceiling, so a file just over the ceiling still reaches the
/// validator and gets the proper rejection.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub const MAX_REQUEST_BODY_BYTES: usize = MAX_UPLOAD_BYTES as usize + MULTIPART_OVERHEAD_BYTES;

pub fn create_router<E>(state: AppState<E>) -> Router
where
    E: TranscriptionEngine + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/transcribe",
            post(transcribe_handler::<E>).layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
