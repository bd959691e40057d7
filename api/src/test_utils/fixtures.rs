//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{NewPet, Pet, PetId};

/// A complete submission with the given name
pub fn test_new_pet(name: &str) -> NewPet {
    NewPet {
        name: Some(name.to_string()),
        breed_size: Some("medium".to_string()),
        age_group: Some("adult".to_string()),
        activity_level: Some("high".to_string()),
        weight_goal: Some("maintenance".to_string()),
        allergies: vec!["chicken".to_string()],
    }
}

/// A stored pet with a fixed id
pub fn test_pet() -> Pet {
    test_new_pet("Buddy").into_pet(PetId("507f1f77bcf86cd799439011".to_string()))
}
