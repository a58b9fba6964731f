//! Pet adoption workflows: shelter listings, application intake, pet search,
//! and submission for shelter review.

pub mod domain;
pub mod intake;
pub(crate) mod pages;
pub mod repository;
pub mod roster;
pub mod router;
pub(crate) mod search;
pub mod seed;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, NewPet, NewShelter, Pet, PetId, Shelter,
    ShelterId,
};
pub use intake::{ApplicationForm, IntakeError};
pub use repository::{
    AdoptionStore, NotifyError, RepositoryError, ReviewNotifier, SubmissionNotice,
};
pub use roster::{PetRosterImporter, RosterEntry, RosterImportError};
pub use router::adoption_router;
pub use seed::{load_sample_data, SeedSummary};
pub use service::{AdoptionService, AdoptionServiceError};
pub use views::{ApplicationPageView, PetWithShelter, SearchResults, ShelterPageView};
