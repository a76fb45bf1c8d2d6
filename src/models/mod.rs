pub mod person;
pub mod error;

pub use person::*;
pub use error::*;
