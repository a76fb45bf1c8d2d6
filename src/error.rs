use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Control plane call '{operation}' failed: {message}")]
    ControlPlaneCallFailed { operation: String, message: String },

    #[error("No API with the name: {0}")]
    ApiNotFound(String),

    #[error("Too many APIs with the same name: {name} ({count} found)")]
    ApiNameAmbiguous { name: String, count: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Request and response schemas are both named '{0}'")]
    DuplicateSchemaName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PublishError {
    pub fn call_failed(operation: &str, message: impl ToString) -> Self {
        PublishError::ControlPlaneCallFailed {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }
}
