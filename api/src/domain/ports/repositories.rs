//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., MongoDB).

use async_trait::async_trait;

use crate::domain::entities::{NewPet, Pet, PetId};
use crate::error::DomainError;

/// Repository for Pet entities
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Insert a new pet; storage assigns and returns its id
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError>;

    /// All stored pets, in storage order
    async fn find_all(&self) -> Result<Vec<Pet>, DomainError>;

    /// Find a pet by ID
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError>;
}
