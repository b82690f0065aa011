//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlayerProfileStore` - Persistence for finalized assessment results

mod profile_store;

pub use profile_store::{PlayerProfileStore, ProfileStoreError, StoredProfile};
