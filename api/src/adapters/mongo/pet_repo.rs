//! MongoDB adapter for PetRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::document::PetDocument;
use crate::domain::entities::{NewPet, Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// MongoDB implementation of PetRepository
pub struct MongoPetRepository {
    collection: Collection<PetDocument>,
}

impl MongoPetRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError> {
        let result = self
            .collection
            .insert_one(PetDocument::from(pet))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DomainError::Internal(format!(
                "Insert returned a non-ObjectId key: {}",
                result.inserted_id
            ))
        })?;

        Ok(pet.clone().into_pet(PetId(id.to_hex())))
    }

    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        let documents: Vec<PetDocument> = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        documents.into_iter().map(Pet::try_from).collect()
    }

    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        let oid = ObjectId::parse_str(id.as_str())
            .map_err(|_| DomainError::Validation("Invalid pet ID format".to_string()))?;

        let result = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Pet::try_from).transpose()
    }
}
