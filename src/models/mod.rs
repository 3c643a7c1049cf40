// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed request and response shapes of the pet-rescue API.
//!
//! Decoding a response into these types is the runtime shape check: a body
//! that does not fit becomes `ApiError::MalformedResponse`.

pub mod adoption;
pub mod notification;
pub mod pet;
pub mod report;
pub mod reward;
pub mod user;

pub use adoption::{
    AdoptionPet, AdoptionRequestor, AdoptionStatus, PetAdoption, PetAdoptionRequest,
    PetAdoptionUpdate,
};
pub use notification::{
    Notification, UnreadCount, UserRequestAdoption, UserRequestReport, UserRequests,
};
pub use pet::{
    MedicalHistory, MedicalHistoryDraft, Pet, PetDraft, PetMedicalHistory,
    PetMedicalHistoryDraft, PetType, PetTypeRef,
};
pub use report::{
    AdminApprovalRequest, AdminPetReport, AdminUserReport, AdoptablePet, ApprovalAction,
    ApprovalRequestType, ImageUpload, ListingPet, LostPetRequestCreate, LostPetRequestCreated,
    MyPetReport, PetListing, PetReport, PetStatus, PetTab, ReportDraft, ReportStatus, TabResults,
    UserReportPayload, UserReportType,
};
pub use reward::{FeedbackStory, FeedbackStoryCreate, Reward};
pub use user::{
    AccountProfilePatch, AdminUser, AdminUserList, AdminUserQuery, AdminUserUpdate,
    ChangePasswordData, CurrentUser, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest,
    RegisterResponse, StoredAccount, User, UserProfile,
};

use serde::Deserialize;

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Serde helpers for fields the backend sends as either strings or numbers.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    /// `"6"`, `6` and `null` all decode; numbers become their decimal text.
    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
                StringOrNumber::String(s) => s,
                StringOrNumber::Int(i) => i.to_string(),
                StringOrNumber::Float(f) => f.to_string(),
            }),
        )
    }
}
