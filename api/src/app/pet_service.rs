//! Pet service
//!
//! Handles pet profile creation and lookup. Records are handed to the
//! repository unchanged; the storage layer owns id assignment.

use std::sync::Arc;

use crate::domain::entities::{NewPet, Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::AppError;

/// Service for managing pet profiles
pub struct PetService<PR>
where
    PR: PetRepository + ?Sized,
{
    pets: Arc<PR>,
}

impl<PR> PetService<PR>
where
    PR: PetRepository + ?Sized,
{
    pub fn new(pets: Arc<PR>) -> Self {
        Self { pets }
    }

    /// Persist a new pet profile and return it with its assigned id
    pub async fn create_pet(&self, new_pet: NewPet) -> Result<Pet, AppError> {
        let pet = self.pets.create(&new_pet).await?;
        tracing::info!(pet_id = %pet.id, "Created pet profile");
        Ok(pet)
    }

    /// Every stored pet, in storage order
    pub async fn list_pets(&self) -> Result<Vec<Pet>, AppError> {
        Ok(self.pets.find_all().await?)
    }

    pub async fn get_pet(&self, id: &PetId) -> Result<Option<Pet>, AppError> {
        Ok(self.pets.find_by_id(id).await?)
    }
}
