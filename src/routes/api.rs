use crate::{handlers::create_person, services::PersonIdSource};
use axum::{routing::post, Router};
use std::sync::Arc;

pub const OPERATION_CREATE_PERSON: &str = "create-person";

/// Create API routes
pub fn create_api_routes(ids: Arc<dyn PersonIdSource>) -> Router {
    Router::<Arc<dyn PersonIdSource>>::new()
        .route(&format!("/{}", OPERATION_CREATE_PERSON), post(create_person))
        .with_state(ids)
}
