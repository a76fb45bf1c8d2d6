pub mod person_service;

pub use person_service::*;
