// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lost/found reports and the public pets list.

use super::json_text;
use crate::error::Result;
use crate::models::report::{
    FoundPetsEnvelope, LostPetsEnvelope, MyFoundPetsEnvelope, MyLostPetsEnvelope,
    TabResultsEnvelope,
};
use crate::models::{
    LostPetRequestCreate, LostPetRequestCreated, MyPetReport, PetListing, PetReport, PetTab,
    ReportDraft, TabResults,
};
use crate::services::http::ApiClient;
use reqwest::multipart::Form;
use reqwest::Method;

impl ApiClient {
    /// Submit a lost or found report with its pet (and optionally medical
    /// history and a photo) in one multipart request.
    ///
    /// `pet`, `report` and `medical_history` travel as JSON-encoded text
    /// fields; the photo as the `pet_image` file part.
    pub async fn create_lost_pet_request(
        &self,
        request: LostPetRequestCreate,
    ) -> Result<LostPetRequestCreated> {
        let mut form = Form::new()
            .text("pet", json_text(&request.pet)?)
            .text("report", json_text(&request.report)?);
        if let Some(history) = &request.medical_history {
            form = form.text("medical_history", json_text(history)?);
        }
        if let Some(image) = request.pet_image {
            form = form.part("pet_image", image.into_part()?);
        }

        let created: LostPetRequestCreated = self
            .send_multipart(Method::POST, "/lost-pet-request/", form)
            .await?;
        tracing::info!(
            pet_id = created.pet_id,
            report_id = created.report_id,
            "Pet report submitted"
        );
        Ok(created)
    }

    pub async fn get_lost_pets(&self) -> Result<Vec<PetListing>> {
        let envelope: LostPetsEnvelope = self.get("/lost-pet-request/").await?;
        Ok(envelope.lost_pets)
    }

    pub async fn get_found_pets(&self) -> Result<Vec<PetListing>> {
        let envelope: FoundPetsEnvelope = self.get("/found-pet-request/").await?;
        Ok(envelope.found_pets)
    }

    /// Lost reports filed by the logged-in user.
    pub async fn get_my_lost_pets(&self) -> Result<Vec<MyPetReport>> {
        let envelope: MyLostPetsEnvelope = self.get("/my-lost-pets/").await?;
        Ok(envelope.lost_pets)
    }

    /// Found reports filed by the logged-in user.
    pub async fn get_my_found_pets(&self) -> Result<Vec<MyPetReport>> {
        let envelope: MyFoundPetsEnvelope = self.get("/my-found-pets/").await?;
        Ok(envelope.found_pets)
    }

    pub async fn get_pet_reports(&self) -> Result<Vec<PetReport>> {
        self.get("/pet-reports/").await
    }

    pub async fn create_pet_report(&self, report: &ReportDraft) -> Result<PetReport> {
        self.post_json("/pet-reports/", report).await
    }

    pub async fn update_pet_report(&self, id: u64, report: &ReportDraft) -> Result<PetReport> {
        self.patch_json(&format!("/pet-reports/{}/", id), report)
            .await
    }

    pub async fn delete_pet_report(&self, id: u64) -> Result<()> {
        self.delete(&format!("/pet-reports/{}/", id)).await
    }

    /// One tab of the public pets list.
    pub async fn get_pets_by_tab(&self, tab: PetTab) -> Result<TabResults> {
        let envelope: TabResultsEnvelope = self
            .get(&format!("/pets-list/?tab={}", tab.as_str()))
            .await?;
        Ok(envelope.results)
    }
}
