//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::domain::entities::{NewPet, Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Pet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<Vec<Pet>>>,
    fail: AtomicBool,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a pet for testing
    pub fn with_pet(self, pet: Pet) -> Self {
        self.pets.write().unwrap().push(pet);
        self
    }

    /// Every call fails as if the database were unreachable
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    pub fn len(&self) -> usize {
        self.pets.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

/// 24 hex characters, the same shape the document store hands out
fn generate_id() -> PetId {
    PetId(Uuid::new_v4().simple().to_string()[..24].to_string())
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, new_pet: &NewPet) -> Result<Pet, DomainError> {
        self.check_available()?;

        let pet = new_pet.clone().into_pet(generate_id());
        self.pets.write().unwrap().push(pet.clone());
        Ok(pet)
    }

    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        self.check_available()?;
        Ok(self.pets.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        self.check_available()?;
        let pets = self.pets.read().unwrap();
        Ok(pets.iter().find(|p| &p.id == id).cloned())
    }
}
