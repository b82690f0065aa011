//! Adapters - Implementations of port interfaces.
//!
//! - `profile` - Player profile stores (in-memory, filesystem)

pub mod profile;

pub use profile::{FsProfileStore, InMemoryProfileStore};
