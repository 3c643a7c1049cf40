// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pet, pet type and medical history models.

use super::lenient;
use super::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetType {
    pub id: u64,
    #[serde(rename = "type")]
    pub name: String,
}

/// The backend sends a pet's type either as its name or as the full record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PetTypeRef {
    Name(String),
    Detailed(PetType),
}

impl PetTypeRef {
    pub fn name(&self) -> &str {
        match self {
            PetTypeRef::Name(name) => name,
            PetTypeRef::Detailed(t) => &t.name,
        }
    }
}

/// Medical history as embedded in pet and listing responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistory {
    #[serde(default)]
    pub last_vaccinated_date: Option<String>,
    #[serde(default)]
    pub vaccination_name: Option<String>,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub no_of_years: Option<String>,
}

/// Pet record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub pet_type: Option<PetTypeRef>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_diseased: bool,
    #[serde(default)]
    pub is_vaccinated: bool,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub modified_by: Option<User>,
    #[serde(default)]
    pub report_id: Option<u64>,
    #[serde(default)]
    pub medical_history: Option<MedicalHistory>,
}

/// Pet fields for create/update requests. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PetDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pet type name (e.g. "Dog")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_diseased: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vaccinated: Option<bool>,
}

impl PetDraft {
    /// Non-empty fields as `(name, value)` pairs, for multipart bodies.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let value = match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return Vec::new(),
        };

        const NAMES: [&str; 14] = [
            "name",
            "pet_type",
            "gender",
            "breed",
            "color",
            "age",
            "weight",
            "description",
            "address",
            "state",
            "city",
            "pincode",
            "is_diseased",
            "is_vaccinated",
        ];

        NAMES
            .iter()
            .filter_map(|name| {
                value.get(*name).map(|v| {
                    let text = match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (*name, text)
                })
            })
            .collect()
    }
}

/// Medical history fields sent alongside a lost/found report.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MedicalHistoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_vaccinated_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_years: Option<u32>,
}

/// Stand-alone medical history record (`/pet-medical-history/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetMedicalHistory {
    pub id: u64,
    /// Pet id
    pub pet: u64,
    #[serde(default)]
    pub last_vaccinated_date: Option<String>,
    #[serde(default)]
    pub vaccination_name: Option<String>,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub no_of_years: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Create/update body for a medical history record.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PetMedicalHistoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<u64>,
    #[serde(flatten)]
    pub history: MedicalHistoryDraft,
}
