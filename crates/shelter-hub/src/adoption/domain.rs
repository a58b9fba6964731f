use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for shelters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShelterId(pub String);

/// Identifier wrapper for adoptable pets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub String);

/// Identifier wrapper for adoption applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ShelterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An organization listing pets for adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: ShelterId,
    pub name: String,
    pub city: String,
    pub rank: Option<u32>,
    pub foster_program: Option<bool>,
}

/// Payload for registering a shelter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShelter {
    pub name: String,
    pub city: String,
    pub rank: Option<u32>,
    pub foster_program: Option<bool>,
}

/// An adoptable animal. The owning shelter is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub shelter_id: ShelterId,
    pub name: String,
    pub age: u8,
}

/// Payload for listing a pet under a shelter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub shelter_id: ShelterId,
    pub name: String,
    pub age: u8,
}

/// A prospective adopter's request, accumulating candidate pets until it is
/// submitted for review. Pets from any shelter may appear on it, and one pet
/// may appear on several applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    /// The shelter whose page the applicant started from.
    pub shelter_id: ShelterId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub description: String,
    pub status: ApplicationStatus,
    pub pet_ids: Vec<PetId>,
    pub opened_on: NaiveDate,
    pub submitted_on: Option<NaiveDate>,
}

impl Application {
    /// Whether the application still accepts edits.
    pub fn is_open(&self) -> bool {
        self.status == ApplicationStatus::InProgress
    }

    /// Whether the pet is already on the application.
    pub fn wants(&self, pet_id: &PetId) -> bool {
        self.pet_ids.iter().any(|id| id == pet_id)
    }
}

/// Application lifecycle marker: editable until submitted, read-only after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    InProgress,
    Pending,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::Pending => "Pending",
        }
    }
}
