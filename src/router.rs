use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::ingestion::handlers::handle_counter;
use crate::ingestion::pipeline::IngestionPipeline;
use crate::query::handlers::handle_stats;
use crate::query::service::QueryService;

/// Ingestion endpoint: `POST` a `{ "type", "data" }` payload.
pub const ENDPOINT_COUNTER: &str = "/api/words/counter";
/// Query endpoint: `GET` with the word as the last path segment.
pub const ENDPOINT_STATS: &str = "/api/words/stats/:word";

/// Builds the HTTP router with the pipeline and query service injected as extensions.
pub fn create_router(pipeline: Arc<IngestionPipeline>, queries: Arc<QueryService>) -> Router {
    Router::new()
        .route(ENDPOINT_COUNTER, post(handle_counter))
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(pipeline))
        .layer(Extension(queries))
}
