//! Adaptive Assessment - a short adaptive quiz that places a chess player
//! into one of five playing-style archetypes.
//!
//! Each answer moves a running score along two dimensions (tactics and
//! temperament). After every answer the engine estimates how confident it
//! is in the current classification and stops early once confidence clears
//! a threshold, otherwise after a fixed number of questions.
//!
//! Layout follows a ports-and-adapters split:
//!
//! - `domain` - question bank, scoring and the assessment state machine
//! - `ports` - the `PlayerProfileStore` contract
//! - `adapters` - in-memory and filesystem profile stores
//! - `application` - handlers that persist and read back results
//! - `config` / `telemetry` - environment configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
