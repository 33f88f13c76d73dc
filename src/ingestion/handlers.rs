use super::pipeline::IngestionPipeline;
use super::types::{CounterRequest, ErrorResponse, SourceKind};
use crate::error::WordCounterError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_counter(
    Extension(pipeline): Extension<Arc<IngestionPipeline>>,
    payload: Result<Json<CounterRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected counter payload: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match pipeline.ingest(&req.kind, &req.data).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            let status = error_status(&e);
            if status.is_server_error() {
                tracing::error!("Ingestion of {} source failed: {}", req.kind, e);
            } else {
                tracing::warn!("Ingestion of {} source rejected: {}", req.kind, e);
            }
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Maps a pipeline failure to the status code returned to the client.
pub fn error_status(err: &WordCounterError) -> StatusCode {
    match err {
        WordCounterError::SourceUnreachable {
            kind: SourceKind::Url,
            ..
        } => StatusCode::BAD_GATEWAY,
        WordCounterError::StoreIo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
