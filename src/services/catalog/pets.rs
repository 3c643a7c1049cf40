// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pets, pet types and medical history.

use super::text_form;
use crate::error::Result;
use crate::models::{
    ImageUpload, Pet, PetDraft, PetMedicalHistory, PetMedicalHistoryDraft, PetType,
};
use crate::services::http::ApiClient;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// `/pets/recent/` wraps its list; older deployments return it bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecentPets {
    Wrapped { recent_pets: Vec<Pet> },
    Plain(Vec<Pet>),
}

#[derive(Serialize)]
struct PetTypeCreate<'a> {
    #[serde(rename = "type")]
    name: &'a str,
}

impl ApiClient {
    pub async fn get_pets(&self) -> Result<Vec<Pet>> {
        self.get("/pets/").await
    }

    pub async fn get_pet(&self, id: u64) -> Result<Pet> {
        self.get(&format!("/pets/{}/", id)).await
    }

    pub async fn create_pet(&self, pet: &PetDraft) -> Result<Pet> {
        self.post_json("/pets/", pet).await
    }

    /// Create a pet with a photo, as one multipart body.
    pub async fn create_pet_with_image(&self, pet: &PetDraft, image: ImageUpload) -> Result<Pet> {
        let form = text_form(pet.form_fields()).part("image", image.into_part()?);
        self.send_multipart(Method::POST, "/pets/", form).await
    }

    pub async fn update_pet(&self, id: u64, pet: &PetDraft) -> Result<Pet> {
        self.patch_json(&format!("/pets/{}/", id), pet).await
    }

    pub async fn delete_pet(&self, id: u64) -> Result<()> {
        self.delete(&format!("/pets/{}/", id)).await
    }

    /// The most recently added pets.
    pub async fn get_recent_pets(&self) -> Result<Vec<Pet>> {
        let recent: RecentPets = self.get("/pets/recent/").await?;
        Ok(match recent {
            RecentPets::Wrapped { recent_pets } => recent_pets,
            RecentPets::Plain(pets) => pets,
        })
    }

    pub async fn get_adoption_pets(&self) -> Result<Vec<Pet>> {
        self.get("/adoption-pets/").await
    }

    pub async fn get_pet_types(&self) -> Result<Vec<PetType>> {
        self.get("/pet-types/").await
    }

    pub async fn create_pet_type(&self, name: &str) -> Result<PetType> {
        self.post_json("/pet-types/", &PetTypeCreate { name }).await
    }

    pub async fn get_pet_medical_history(&self) -> Result<Vec<PetMedicalHistory>> {
        self.get("/pet-medical-history/").await
    }

    pub async fn create_medical_history(
        &self,
        history: &PetMedicalHistoryDraft,
    ) -> Result<PetMedicalHistory> {
        self.post_json("/pet-medical-history/", history).await
    }

    pub async fn update_medical_history(
        &self,
        id: u64,
        history: &PetMedicalHistoryDraft,
    ) -> Result<PetMedicalHistory> {
        self.patch_json(&format!("/pet-medical-history/{}/", id), history)
            .await
    }

    /// Medical history of one pet, if it has any.
    pub async fn get_medical_history_for_pet(
        &self,
        pet_id: u64,
    ) -> Result<Option<PetMedicalHistory>> {
        let histories: Vec<PetMedicalHistory> = self
            .get(&format!("/pet-medical-history/?pet={}", pet_id))
            .await?;
        Ok(histories.into_iter().next())
    }
}
