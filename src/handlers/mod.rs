pub mod create_person;

pub use create_person::*;
