//! Common module - Types, errors and traits shared by the engine and its host

pub mod channels;
pub mod errors;
pub mod traits;
pub mod types;
