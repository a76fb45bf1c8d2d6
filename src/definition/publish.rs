use crate::{
    clients::ControlPlane,
    definition::{find_unique_api_id, Document},
    error::PublishError,
};
use tracing::info;

/// Whether the document creates a new API or is merged into an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    Create,
    Update,
}

impl PublishMode {
    pub fn from_update_flag(update: bool) -> Self {
        if update {
            PublishMode::Update
        } else {
            PublishMode::Create
        }
    }
}

/// Push `document` to the control plane, returning the id of the API it now lives in.
///
/// Creating fails on the control plane side when the name is taken. Updating
/// looks the API up by name first and refuses to guess between duplicates.
pub async fn publish(
    control_plane: &dyn ControlPlane,
    document: &Document,
    mode: PublishMode,
) -> Result<String, PublishError> {
    let body = serde_json::to_vec(document.as_json())?;

    match mode {
        PublishMode::Create => {
            info!("Creating API: {}", document.api_name());
            let api_id = control_plane.import_api(&body).await?;
            info!("Created API {} with id {}", document.api_name(), api_id);
            Ok(api_id)
        }
        PublishMode::Update => {
            info!("Updating API: {}", document.api_name());
            let apis = control_plane.list_apis().await?;
            let api_id = find_unique_api_id(&apis, document.api_name())?;
            control_plane.merge_api(&api_id, &body).await?;
            info!("Merged definition into API {} ({})", document.api_name(), api_id);
            Ok(api_id)
        }
    }
}
