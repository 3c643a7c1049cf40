// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adoption request models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdoptionPet {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdoptionRequestor {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Adoption request as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetAdoption {
    pub id: u64,
    pub pet: AdoptionPet,
    pub requestor: AdoptionRequestor,
    #[serde(default)]
    pub message: Option<String>,
    pub status: AdoptionStatus,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

/// New adoption request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PetAdoptionRequest {
    pub pet_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: AdoptionStatus,
}

impl PetAdoptionRequest {
    /// A pending request for `pet_id`.
    pub fn pending(pet_id: u64, message: Option<String>) -> Self {
        Self {
            pet_id,
            message,
            status: AdoptionStatus::Pending,
        }
    }
}

/// Partial update of an adoption request.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PetAdoptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AdoptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adoption_decodes_null_message() {
        let adoption: PetAdoption = serde_json::from_value(serde_json::json!({
            "id": 5,
            "pet": {"id": 2, "name": "Bruno"},
            "requestor": {"id": 9, "username": "ravi", "email": "ravi@example.org"},
            "message": null,
            "status": "Approved",
            "created_by": null,
            "modified_by": "admin"
        }))
        .unwrap();
        assert_eq!(adoption.status, AdoptionStatus::Approved);
        assert!(adoption.message.is_none());
        assert_eq!(adoption.modified_by.as_deref(), Some("admin"));
    }

    #[test]
    fn test_pending_request_body() {
        let req = PetAdoptionRequest::pending(2, None);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"pet_id": 2, "status": "Pending"})
        );
    }
}
