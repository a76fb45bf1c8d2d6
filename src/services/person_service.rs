use crate::models::{CreatePersonRequest, CreatePersonResponse, Person};
use thiserror::Error;
use tracing::info;

/// Placeholder identifier handed out until persons are actually stored
pub const PLACEHOLDER_PERSON_ID: i64 = 1234;

#[derive(Debug, Error)]
pub enum CreatePersonError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Creates a person and returns the identifier assigned to it.
pub trait PersonIdSource: Send + Sync {
    fn create(&self, person: &Person) -> i64;
}

/// Hands out the same identifier for every person.
#[derive(Debug, Clone, Copy)]
pub struct FixedPersonId(pub i64);

impl Default for FixedPersonId {
    fn default() -> Self {
        Self(PLACEHOLDER_PERSON_ID)
    }
}

impl PersonIdSource for FixedPersonId {
    fn create(&self, _person: &Person) -> i64 {
        self.0
    }
}

/// Decode a create-person payload and build the response for it
pub fn handle_create_person(
    payload: serde_json::Value,
    ids: &dyn PersonIdSource,
) -> Result<CreatePersonResponse, CreatePersonError> {
    info!("Incoming payload for create-person: {}", payload);

    let request: CreatePersonRequest = serde_json::from_value(payload)
        .map_err(|e| CreatePersonError::MalformedPayload(e.to_string()))?;

    info!("Creating person {:?}", request.person);

    Ok(CreatePersonResponse {
        person_id: ids.create(&request.person),
    })
}
