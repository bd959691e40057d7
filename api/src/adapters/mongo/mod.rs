//! MongoDB adapters
//!
//! Implementations of repository traits using the official MongoDB driver.

pub mod document;
pub mod pet_repo;


pub use pet_repo::MongoPetRepository;
