//! Pet domain entity
//!
//! A pet profile: identity plus dietary and activity attributes.
//! All descriptive fields are free text with no enforced vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Length of a storage-assigned id in its hex form
const PET_ID_LEN: usize = 24;

/// Unique identifier for a pet, assigned by the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub String);

impl PetId {
    /// Parse an id received from a client.
    ///
    /// Ids are 24 hex characters (the document store's primary key format).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.len() == PET_ID_LEN && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::Validation("Invalid pet ID format".to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted pet profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: PetId,
    pub name: Option<String>,
    /// Coarse size category (small, medium, large)
    pub breed_size: Option<String>,
    /// Breed label written by older clients, kept as stored
    pub breed: Option<String>,
    /// Informally puppy, adult or senior
    pub age_group: Option<String>,
    pub activity_level: Option<String>,
    /// Informally maintenance, weight-loss or muscle-gain
    pub weight_goal: Option<String>,
    pub allergies: Vec<String>,
}

/// Data for creating a new pet; the id comes from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPet {
    pub name: Option<String>,
    pub breed_size: Option<String>,
    pub age_group: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
    pub allergies: Vec<String>,
}

impl NewPet {
    /// Attach a storage-assigned id, producing the persisted record
    pub fn into_pet(self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name,
            breed_size: self.breed_size,
            breed: None,
            age_group: self.age_group,
            activity_level: self.activity_level,
            weight_goal: self.weight_goal,
            allergies: self.allergies,
        }
    }
}
