//! Domain layer
//!
//! The pet model and the storage contract it depends on. No I/O lives here.
//! - `entities`: the `Pet` record and its identifier
//! - `ports`: trait definitions the adapters implement

pub mod entities;
pub mod ports;
