use crate::{
    models::{CreatePersonResponse, ErrorResponse},
    services::{handle_create_person, CreatePersonError, PersonIdSource},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::warn;

/// Create a new person
pub async fn create_person(
    State(ids): State<Arc<dyn PersonIdSource>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePersonResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected create-person body: {}", rejection.body_text());
        bad_request(rejection.body_text())
    })?;

    match handle_create_person(payload, ids.as_ref()) {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(e @ CreatePersonError::MalformedPayload(_)) => {
            warn!("{}", e);
            Err(bad_request(e.to_string()))
        }
    }
}

fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::BAD_REQUEST;
    (status, Json(ErrorResponse::new(status, error)))
}
