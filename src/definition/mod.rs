//! Builds the OpenAPI definition of the person API and publishes it to the
//! API-management control plane.

pub mod document;
pub mod lookup;
pub mod publish;

pub use document::*;
pub use lookup::*;
pub use publish::*;
