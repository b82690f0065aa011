//! Application layer - Commands, Queries, and Handlers.
//!
//! The assessment itself runs synchronously in the domain; this layer only
//! coordinates persisting and reading back its results through ports.

pub mod handlers;

pub use handlers::{ClearProfileHandler, LoadProfileHandler, SaveResultHandler};
