use super::service::QueryService;
use super::types::WordStats;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_stats(
    Extension(service): Extension<Arc<QueryService>>,
    Path(word): Path<String>,
) -> (StatusCode, Json<WordStats>) {
    let counter = service.query(&word);

    (StatusCode::OK, Json(WordStats { word, counter }))
}
