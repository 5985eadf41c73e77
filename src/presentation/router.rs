use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, root_handler, summarize_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, L>(state: AppState<E, L>) -> Router
where
    E: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler::<E, L>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
