// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lost/found pet reports, listings and moderation payloads.

use super::adoption::PetAdoption;
use super::pet::{MedicalHistory, MedicalHistoryDraft, Pet, PetDraft, PetTypeRef};
use super::user::{User, UserProfile};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PetStatus {
    Lost,
    Found,
    Adopted,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    Accepted,
    Rejected,
    Resolved,
    Reunited,
}

/// Pet report as returned by `/pet-reports/` and embedded in notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetReport {
    pub id: u64,
    pub pet: Pet,
    pub user: User,
    pub pet_status: PetStatus,
    pub report_status: ReportStatus,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Pet report in the admin listings; `user` is the reporter's username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPetReport {
    pub id: u64,
    pub pet: Pet,
    pub user: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub pet_status: PetStatus,
    pub report_status: ReportStatus,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Report fields for create/update requests.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ReportDraft {
    /// Pet id, for stand-alone report creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_status: Option<PetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_resolved: Option<bool>,
}

/// An image to upload as a multipart file part.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Load from disk, guessing the MIME type from the extension.
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ApiError::Validation(format!("Cannot read image {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        };
        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, ApiError> {
        reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::Validation(format!("Invalid image MIME type: {}", e)))
    }
}

/// Lost/found report submission, sent as one multipart body.
#[derive(Debug, Clone, Default)]
pub struct LostPetRequestCreate {
    pub pet: PetDraft,
    pub report: ReportDraft,
    pub medical_history: Option<MedicalHistoryDraft>,
    pub pet_image: Option<ImageUpload>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LostPetRequestCreated {
    #[serde(default)]
    pub message: String,
    pub pet_id: u64,
    pub report_id: u64,
    #[serde(default)]
    pub notification_id: Option<u64>,
}

/// Pet summary inside the public listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingPet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub pet_type: Option<PetTypeRef>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_diseased: bool,
    #[serde(default)]
    pub is_vaccinated: bool,
    #[serde(default)]
    pub medical_history: Option<MedicalHistory>,
}

/// Entry of the lost, found and adoptable listings.
///
/// Lost listings historically carried the location and health fields next to
/// `pet` rather than inside it; both placements decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetListing {
    pub report_id: u64,
    pub report_status: String,
    pub pet_status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    pub pet: ListingPet,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_diseased: Option<bool>,
    #[serde(default)]
    pub is_vaccinated: Option<bool>,
    #[serde(default)]
    pub medical_history: Option<MedicalHistory>,
}

impl PetListing {
    /// Medical history wherever the backend put it.
    pub fn medical_history(&self) -> Option<&MedicalHistory> {
        self.medical_history
            .as_ref()
            .or(self.pet.medical_history.as_ref())
    }
}

/// Adoptable pets share the listing shape.
pub type AdoptablePet = PetListing;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LostPetsEnvelope {
    pub lost_pets: Vec<PetListing>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FoundPetsEnvelope {
    pub found_pets: Vec<PetListing>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AdoptablePetsEnvelope {
    pub adoptable_pets: Vec<AdoptablePet>,
}

/// One of the current user's own lost/found reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MyPetReport {
    pub report_id: u64,
    pub report_status: String,
    pub pet_status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    pub pet: Pet,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MyLostPetsEnvelope {
    pub lost_pets: Vec<MyPetReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MyFoundPetsEnvelope {
    pub found_pets: Vec<MyPetReport>,
}

/// Tab of the public pets list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetTab {
    Lost,
    Found,
    Adopt,
}

impl PetTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetTab::Lost => "lost",
            PetTab::Found => "found",
            PetTab::Adopt => "adopt",
        }
    }
}

/// Results of `/pets-list/`: reports for lost/found, adoptions for adopt.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TabResults {
    Reports(Vec<PetReport>),
    Adoptions(Vec<PetAdoption>),
}

impl TabResults {
    pub fn len(&self) -> usize {
        match self {
            TabResults::Reports(r) => r.len(),
            TabResults::Adoptions(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TabResultsEnvelope {
    pub results: TabResults,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalRequestType {
    Lost,
    Found,
    Adopt,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdminApprovalRequest {
    pub request_type: ApprovalRequestType,
    pub pet_id: u64,
    pub action: ApprovalAction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserReportType {
    Sighting,
    Reclaim,
    Adoption,
}

/// A user's report against someone else's pet report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserReportPayload {
    pub pet_report_id: u64,
    pub report_type: UserReportType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUserReport {
    pub id: u64,
    pub pet_report: AdminPetReport,
    pub pet_report_creator: UserProfile,
    pub report_type: UserReportType,
    pub message: String,
    pub report_status: ReportStatus,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<UserProfile>,
    #[serde(default)]
    pub modified_by: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_enums_use_backend_spelling() {
        assert_eq!(
            serde_json::to_value(ReportStatus::Reunited).unwrap(),
            "Reunited"
        );
        assert_eq!(
            serde_json::to_value(ApprovalRequestType::Adopt).unwrap(),
            "adopt"
        );
        assert_eq!(serde_json::to_value(ApprovalAction::Reject).unwrap(), "reject");
        assert!(serde_json::from_value::<ReportStatus>(serde_json::json!("Closed")).is_err());
    }

    #[test]
    fn test_listing_medical_history_either_place() {
        let lost: PetListing = serde_json::from_value(serde_json::json!({
            "report_id": 1, "report_status": "Accepted", "pet_status": "Lost",
            "pet": {"id": 2, "name": "Bruno", "medical_history": {"stage": 2}}
        }))
        .unwrap();
        assert_eq!(
            lost.medical_history().unwrap().stage.as_deref(),
            Some("2")
        );

        let found: PetListing = serde_json::from_value(serde_json::json!({
            "report_id": 1, "report_status": "Accepted", "pet_status": "Found",
            "pet": {"id": 2, "name": "Bruno"},
            "medical_history": {"disease_name": "Mange"}
        }))
        .unwrap();
        assert_eq!(
            found.medical_history().unwrap().disease_name.as_deref(),
            Some("Mange")
        );
    }

    #[test]
    fn test_report_draft_skips_unset() {
        let draft = ReportDraft {
            pet_status: Some(PetStatus::Found),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"pet_status": "Found"})
        );
    }
}
