// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adoption requests.

use crate::error::Result;
use crate::models::report::AdoptablePetsEnvelope;
use crate::models::{AdoptablePet, PetAdoption, PetAdoptionRequest, PetAdoptionUpdate};
use crate::services::http::ApiClient;

impl ApiClient {
    pub async fn get_pet_adoptions(&self) -> Result<Vec<PetAdoption>> {
        self.get("/pet-adoptions/").await
    }

    /// Adoption requests made by the logged-in user.
    pub async fn get_my_pet_adoptions(&self) -> Result<Vec<PetAdoption>> {
        self.get("/my-pet-adoptions/").await
    }

    pub async fn create_pet_adoption(&self, request: &PetAdoptionRequest) -> Result<PetAdoption> {
        self.post_json("/pet-adoptions/", request).await
    }

    pub async fn update_pet_adoption(
        &self,
        id: u64,
        update: &PetAdoptionUpdate,
    ) -> Result<PetAdoption> {
        self.patch_json(&format!("/pet-adoptions/{}/", id), update)
            .await
    }

    pub async fn delete_pet_adoption(&self, id: u64) -> Result<()> {
        self.delete(&format!("/pet-adoptions/{}/", id)).await
    }

    /// Found pets that are open for adoption.
    pub async fn get_adoptable_pets(&self) -> Result<Vec<AdoptablePet>> {
        let envelope: AdoptablePetsEnvelope = self.get("/adoptable-pets/").await?;
        Ok(envelope.adoptable_pets)
    }
}
