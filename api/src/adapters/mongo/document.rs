//! Stored document shape for pets
//!
//! Field names match what the previous backends wrote, so existing
//! collections read back without migration.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPet, Pet, PetId};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub breed_size: Option<String>,
    /// Written by older clients; may sit next to `breedSize`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub age_group: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
}

impl From<&NewPet> for PetDocument {
    fn from(pet: &NewPet) -> Self {
        Self {
            id: None,
            name: pet.name.clone(),
            breed_size: pet.breed_size.clone(),
            breed: None,
            age_group: pet.age_group.clone(),
            activity_level: pet.activity_level.clone(),
            weight_goal: pet.weight_goal.clone(),
            allergies: Some(pet.allergies.clone()),
        }
    }
}

impl TryFrom<PetDocument> for Pet {
    type Error = DomainError;

    fn try_from(doc: PetDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| DomainError::Internal("Pet document without _id".to_string()))?;

        Ok(Pet {
            id: PetId(id.to_hex()),
            name: doc.name,
            breed_size: doc.breed_size.or_else(|| doc.breed.clone()),
            breed: doc.breed,
            age_group: doc.age_group,
            activity_level: doc.activity_level,
            weight_goal: doc.weight_goal,
            allergies: doc.allergies.unwrap_or_default(),
        })
    }
}
