pub mod clients;
pub mod config;
pub mod definition;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::PublishError;
pub use routes::create_api_routes;
