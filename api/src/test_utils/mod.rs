//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the in-memory repository behaves like a
//! real store (insertion order, generated ids) and is shared with the
//! router-level tests through `AppState`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
