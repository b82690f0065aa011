//! Application handlers.
//!
//! Command and query handlers that sit between a host and the profile store.

pub mod profile;

pub use profile::{ClearProfileHandler, LoadProfileHandler, SaveResultHandler};
