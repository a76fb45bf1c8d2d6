pub mod api_gateway;
pub mod control_plane;
pub mod person_service_client;

pub use api_gateway::*;
pub use control_plane::*;
pub use person_service_client::*;
