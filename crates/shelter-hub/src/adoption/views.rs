use serde::Serialize;

use super::domain::{Application, Pet, Shelter};

/// A pet joined with the name of the shelter listing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetWithShelter {
    pub pet: Pet,
    pub shelter_name: String,
}

/// Data backing the shelter show page: the shelter plus its pets by name.
#[derive(Debug, Clone, Serialize)]
pub struct ShelterPageView {
    pub shelter: Shelter,
    pub pets: Vec<Pet>,
}

/// Search box state and its matches, rendered on the application page when a
/// search was performed.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub matches: Vec<PetWithShelter>,
}

/// Data backing the application show page.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPageView {
    pub application: Application,
    /// Pets attached to the application, in attachment order.
    pub pets_wanted: Vec<PetWithShelter>,
    pub search: Option<SearchResults>,
}

impl ApplicationPageView {
    /// Whether the page offers the add-a-pet search box.
    pub fn accepts_pets(&self) -> bool {
        self.application.is_open()
    }

    /// Submission is offered only while open and once a pet is attached.
    pub fn offers_submission(&self) -> bool {
        self.application.is_open() && !self.pets_wanted.is_empty()
    }
}
