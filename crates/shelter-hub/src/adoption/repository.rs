use serde::{Deserialize, Serialize};

use super::domain::{Application, ApplicationId, Pet, PetId, Shelter, ShelterId};

/// Storage abstraction so the service layer can be exercised in isolation.
///
/// Insertions fail with [`RepositoryError::Conflict`] on duplicate ids;
/// updates fail with [`RepositoryError::NotFound`] for unknown ids.
pub trait AdoptionStore: Send + Sync {
    fn insert_shelter(&self, shelter: Shelter) -> Result<Shelter, RepositoryError>;
    fn fetch_shelter(&self, id: &ShelterId) -> Result<Option<Shelter>, RepositoryError>;
    fn shelters(&self) -> Result<Vec<Shelter>, RepositoryError>;

    fn insert_pet(&self, pet: Pet) -> Result<Pet, RepositoryError>;
    fn fetch_pet(&self, id: &PetId) -> Result<Option<Pet>, RepositoryError>;
    fn pets(&self) -> Result<Vec<Pet>, RepositoryError>;

    fn insert_application(&self, application: Application)
        -> Result<Application, RepositoryError>;
    fn update_application(&self, application: Application) -> Result<(), RepositoryError>;
    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook telling a shelter that a submitted application awaits its
/// review (e.g., an e-mail or case-management adapter).
pub trait ReviewNotifier: Send + Sync {
    fn notify(&self, notice: SubmissionNotice) -> Result<(), NotifyError>;
}

/// Per-shelter payload raised when an application is submitted. One notice is
/// dispatched to each shelter owning at least one requested pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionNotice {
    pub shelter_id: ShelterId,
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub pet_names: Vec<String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
