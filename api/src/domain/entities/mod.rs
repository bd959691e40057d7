//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the document shapes in the `adapters::mongo` module.

pub mod pet;

pub use pet::{NewPet, Pet, PetId};
