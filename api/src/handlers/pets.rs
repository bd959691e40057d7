//! Pet handlers
//!
//! Endpoints for creating and reading pet profiles.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPet, Pet, PetId};
use crate::error::AppError;
use crate::AppState;

/// Request to create a pet profile
///
/// Any `id` in the payload is ignored. Missing fields are stored as null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub breed_size: Option<String>,
    /// Legacy name for `breedSize`
    pub breed: Option<String>,
    pub age_group: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
    pub allergies: Option<Vec<String>>,
}

impl From<CreatePetRequest> for NewPet {
    fn from(request: CreatePetRequest) -> Self {
        NewPet {
            name: request.name,
            breed_size: request.breed_size.or(request.breed),
            age_group: request.age_group,
            activity_level: request.activity_level,
            weight_goal: request.weight_goal,
            allergies: request.allergies.unwrap_or_default(),
        }
    }
}

/// A stored pet profile
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub id: String,
    pub name: Option<String>,
    pub breed_size: Option<String>,
    /// Stored legacy `breed`, else a mirror of `breedSize`, for older clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub age_group: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
    pub allergies: Vec<String>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        PetResponse {
            id: pet.id.to_string(),
            name: pet.name,
            breed: pet.breed.or_else(|| pet.breed_size.clone()),
            breed_size: pet.breed_size,
            age_group: pet.age_group,
            activity_level: pet.activity_level,
            weight_goal: pet.weight_goal,
            allergies: pet.allergies,
        }
    }
}

/// POST /api/pets
///
/// Store a new pet profile. Duplicate submissions create duplicate records.
pub async fn create_pet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PetResponse>), AppError> {
    let Json(request) = payload?;

    let pet = state.pet_service.create_pet(request.into()).await?;

    Ok((StatusCode::CREATED, Json(pet.into())))
}

/// GET /api/pets
///
/// List every stored pet. No filtering, sorting or pagination.
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<PetResponse>>, AppError> {
    let pets = state.pet_service.list_pets().await?;

    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

/// GET /api/pets/:id
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PetResponse>, AppError> {
    let pet_id = PetId::parse(&id)?;

    let pet = state
        .pet_service
        .get_pet(&pet_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", id)))?;

    Ok(Json(pet.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_request_full() {
        let json = r#"{
            "name": "Rex",
            "breedSize": "medium",
            "ageGroup": "adult",
            "activityLevel": "high",
            "weightGoal": "maintenance",
            "allergies": ["chicken"]
        }"#;
        let request: CreatePetRequest = serde_json::from_str(json).unwrap();
        let new_pet = NewPet::from(request);

        assert_eq!(new_pet.name.as_deref(), Some("Rex"));
        assert_eq!(new_pet.breed_size.as_deref(), Some("medium"));
        assert_eq!(new_pet.weight_goal.as_deref(), Some("maintenance"));
        assert_eq!(new_pet.allergies, vec!["chicken".to_string()]);
    }

    #[test]
    fn parse_create_request_ignores_id() {
        let json = r#"{"id": "507f1f77bcf86cd799439011", "name": "Rex"}"#;
        let request: CreatePetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Rex"));
    }

    #[test]
    fn parse_create_request_legacy_breed() {
        let json = r#"{"name": "Rex", "breed": "large"}"#;
        let request: CreatePetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(NewPet::from(request).breed_size.as_deref(), Some("large"));
    }

    #[test]
    fn breed_size_wins_over_legacy_breed() {
        let json = r#"{"breedSize": "small", "breed": "large"}"#;
        let request: CreatePetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(NewPet::from(request).breed_size.as_deref(), Some("small"));
    }

    #[test]
    fn parse_create_request_missing_and_null_fields() {
        let json = r#"{"name": null, "allergies": null}"#;
        let request: CreatePetRequest = serde_json::from_str(json).unwrap();
        let new_pet = NewPet::from(request);

        assert!(new_pet.name.is_none());
        assert!(new_pet.age_group.is_none());
        assert!(new_pet.allergies.is_empty());
    }

    #[test]
    fn parse_create_request_wrong_type() {
        let json = r#"{"name": 5}"#;
        let result: Result<CreatePetRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_pet_response() {
        let pet = crate::test_utils::test_pet();
        let json = serde_json::to_value(PetResponse::from(pet)).unwrap();

        assert_eq!(json["id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["breedSize"], "medium");
        assert_eq!(json["breed"], "medium");
        assert_eq!(json["ageGroup"], "adult");
        assert_eq!(json["activityLevel"], "high");
        assert_eq!(json["allergies"][0], "chicken");
    }

    #[test]
    fn serialize_pet_response_keeps_stored_legacy_breed() {
        let mut pet = crate::test_utils::test_pet();
        pet.breed_size = Some("large".to_string());
        pet.breed = Some("labrador".to_string());
        let json = serde_json::to_value(PetResponse::from(pet)).unwrap();

        assert_eq!(json["breedSize"], "large");
        assert_eq!(json["breed"], "labrador");
    }

    #[test]
    fn serialize_pet_response_without_breed_size() {
        let mut pet = crate::test_utils::test_pet();
        pet.breed_size = None;
        let json = serde_json::to_value(PetResponse::from(pet)).unwrap();

        assert!(json["breedSize"].is_null());
        assert!(json.get("breed").is_none());
    }
}
