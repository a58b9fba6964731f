use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, NewPet, NewShelter, Pet, PetId, Shelter,
    ShelterId,
};
use super::intake::{screen_form, ApplicationForm, IntakeError};
use super::repository::{
    AdoptionStore, NotifyError, RepositoryError, ReviewNotifier, SubmissionNotice,
};
use super::roster::RosterEntry;
use super::search::name_matches;
use super::views::{ApplicationPageView, PetWithShelter, SearchResults, ShelterPageView};

/// Service composing the store and the review notifier behind the adopter
/// flow: shelter listings, application intake, pet search, and submission.
pub struct AdoptionService<S, N> {
    store: Arc<S>,
    notifier: Arc<N>,
}

static SHELTER_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PET_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_shelter_id() -> ShelterId {
    let id = SHELTER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ShelterId(format!("shelter-{id:06}"))
}

fn next_pet_id() -> PetId {
    let id = PET_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PetId(format!("pet-{id:06}"))
}

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<S, N> AdoptionService<S, N>
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self { store, notifier }
    }

    /// Register a shelter and return the stored record.
    pub fn register_shelter(&self, shelter: NewShelter) -> Result<Shelter, AdoptionServiceError> {
        let record = Shelter {
            id: next_shelter_id(),
            name: shelter.name,
            city: shelter.city,
            rank: shelter.rank,
            foster_program: shelter.foster_program,
        };

        let stored = self.store.insert_shelter(record)?;
        Ok(stored)
    }

    /// List a pet under its shelter.
    pub fn add_pet(&self, pet: NewPet) -> Result<Pet, AdoptionServiceError> {
        self.store
            .fetch_shelter(&pet.shelter_id)?
            .ok_or_else(|| AdoptionServiceError::UnknownShelter(pet.shelter_id.clone()))?;

        let record = Pet {
            id: next_pet_id(),
            shelter_id: pet.shelter_id,
            name: pet.name,
            age: pet.age,
        };

        let stored = self.store.insert_pet(record)?;
        Ok(stored)
    }

    /// Bulk-list roster entries under one shelter, in file order.
    pub fn import_roster(
        &self,
        shelter_id: &ShelterId,
        entries: Vec<RosterEntry>,
    ) -> Result<Vec<Pet>, AdoptionServiceError> {
        self.store
            .fetch_shelter(shelter_id)?
            .ok_or_else(|| AdoptionServiceError::UnknownShelter(shelter_id.clone()))?;

        let mut listed = Vec::with_capacity(entries.len());
        for entry in entries {
            listed.push(self.add_pet(NewPet {
                shelter_id: shelter_id.clone(),
                name: entry.name,
                age: entry.age,
            })?);
        }

        Ok(listed)
    }

    /// Shelters for the index page: ranked shelters first, then by name.
    pub fn shelters_overview(&self) -> Result<Vec<Shelter>, AdoptionServiceError> {
        let mut shelters = self.store.shelters()?;
        shelters.sort_by(|a, b| match (a.rank, b.rank) {
            (Some(left), Some(right)) => left.cmp(&right).then_with(|| a.name.cmp(&b.name)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        });
        Ok(shelters)
    }

    /// Fetch a shelter or fail with [`AdoptionServiceError::UnknownShelter`].
    pub fn find_shelter(&self, id: &ShelterId) -> Result<Shelter, AdoptionServiceError> {
        self.store
            .fetch_shelter(id)?
            .ok_or_else(|| AdoptionServiceError::UnknownShelter(id.clone()))
    }

    /// Assemble the shelter show page: details plus the shelter's pets.
    pub fn shelter_page(&self, id: &ShelterId) -> Result<ShelterPageView, AdoptionServiceError> {
        let shelter = self.find_shelter(id)?;

        let mut pets: Vec<Pet> = self
            .store
            .pets()?
            .into_iter()
            .filter(|pet| pet.shelter_id == *id)
            .collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(ShelterPageView { shelter, pets })
    }

    /// Fetch a pet joined with its shelter's name.
    pub fn pet_page(&self, id: &PetId) -> Result<PetWithShelter, AdoptionServiceError> {
        let pet = self
            .store
            .fetch_pet(id)?
            .ok_or_else(|| AdoptionServiceError::UnknownPet(id.clone()))?;
        let shelter = self.find_shelter(&pet.shelter_id)?;

        Ok(PetWithShelter {
            pet,
            shelter_name: shelter.name,
        })
    }

    /// Open an application against a shelter from the posted form. The new
    /// application starts in progress with no pets attached.
    pub fn open_application(
        &self,
        shelter_id: &ShelterId,
        form: ApplicationForm,
    ) -> Result<Application, AdoptionServiceError> {
        let shelter = self.find_shelter(shelter_id)?;
        let form = screen_form(form)?;

        let record = Application {
            id: next_application_id(),
            shelter_id: shelter.id,
            name: form.name,
            address: form.address,
            city: form.city,
            state: form.state,
            zip_code: form.zip_code,
            description: form.description,
            status: ApplicationStatus::InProgress,
            pet_ids: Vec::new(),
            opened_on: Local::now().date_naive(),
            submitted_on: None,
        };

        let stored = self.store.insert_application(record)?;
        Ok(stored)
    }

    /// Search every shelter's pets by name, case-insensitively, ordered by
    /// pet name. The originating shelter's pets are eligible like any other.
    pub fn search_pets(&self, query: &str) -> Result<Vec<PetWithShelter>, AdoptionServiceError> {
        let shelter_names = self.shelter_names()?;

        let mut matches = Vec::new();
        for pet in self.store.pets()? {
            if name_matches(&pet.name, query) {
                matches.push(join_shelter(pet, &shelter_names)?);
            }
        }
        matches.sort_by(|a, b| a.pet.name.cmp(&b.pet.name));

        Ok(matches)
    }

    /// Assemble the application show page, running the pet search when a
    /// query was supplied and the application still accepts pets.
    pub fn application_page(
        &self,
        id: &ApplicationId,
        query: Option<&str>,
    ) -> Result<ApplicationPageView, AdoptionServiceError> {
        let application = self
            .store
            .fetch_application(id)?
            .ok_or_else(|| AdoptionServiceError::UnknownApplication(id.clone()))?;

        let shelter_names = self.shelter_names()?;
        let mut pets_wanted = Vec::with_capacity(application.pet_ids.len());
        for pet_id in &application.pet_ids {
            let pet = self
                .store
                .fetch_pet(pet_id)?
                .ok_or_else(|| AdoptionServiceError::UnknownPet(pet_id.clone()))?;
            pets_wanted.push(join_shelter(pet, &shelter_names)?);
        }

        let search = match query {
            Some(query) if application.is_open() => Some(SearchResults {
                query: query.to_string(),
                matches: self.search_pets(query)?,
            }),
            _ => None,
        };

        Ok(ApplicationPageView {
            application,
            pets_wanted,
            search,
        })
    }

    /// Attach a pet to an open application. Attaching a pet that is already
    /// on the application leaves it unchanged.
    pub fn attach_pet(
        &self,
        application_id: &ApplicationId,
        pet_id: &PetId,
    ) -> Result<Application, AdoptionServiceError> {
        let mut application = self.fetch_open(application_id)?;
        let pet = self
            .store
            .fetch_pet(pet_id)?
            .ok_or_else(|| AdoptionServiceError::UnknownPet(pet_id.clone()))?;

        if !application.wants(&pet.id) {
            application.pet_ids.push(pet.id);
            self.store.update_application(application.clone())?;
        }

        Ok(application)
    }

    /// Submit an open application for review with its final description.
    ///
    /// Fails unless at least one pet is attached. On success the status moves
    /// to `Pending`, the submission date is recorded, and each shelter owning
    /// a requested pet receives one review notice.
    pub fn submit_application(
        &self,
        application_id: &ApplicationId,
        description: &str,
    ) -> Result<Application, AdoptionServiceError> {
        let mut application = self.fetch_open(application_id)?;
        if application.pet_ids.is_empty() {
            return Err(AdoptionServiceError::NoPetsSelected(application_id.clone()));
        }

        application.description = description.trim().to_string();
        application.status = ApplicationStatus::Pending;
        application.submitted_on = Some(Local::now().date_naive());
        self.store.update_application(application.clone())?;

        self.dispatch_review_notices(&application)?;

        Ok(application)
    }

    fn fetch_open(&self, id: &ApplicationId) -> Result<Application, AdoptionServiceError> {
        let application = self
            .store
            .fetch_application(id)?
            .ok_or_else(|| AdoptionServiceError::UnknownApplication(id.clone()))?;

        if !application.is_open() {
            return Err(AdoptionServiceError::AlreadySubmitted(id.clone()));
        }

        Ok(application)
    }

    fn shelter_names(&self) -> Result<HashMap<ShelterId, String>, AdoptionServiceError> {
        Ok(self
            .store
            .shelters()?
            .into_iter()
            .map(|shelter| (shelter.id, shelter.name))
            .collect())
    }

    fn dispatch_review_notices(
        &self,
        application: &Application,
    ) -> Result<(), AdoptionServiceError> {
        // Group requested pets by owning shelter, preserving attachment order.
        let mut by_shelter: Vec<(ShelterId, Vec<String>)> = Vec::new();
        for pet_id in &application.pet_ids {
            let pet = self
                .store
                .fetch_pet(pet_id)?
                .ok_or_else(|| AdoptionServiceError::UnknownPet(pet_id.clone()))?;
            match by_shelter.iter_mut().find(|(id, _)| *id == pet.shelter_id) {
                Some((_, names)) => names.push(pet.name),
                None => by_shelter.push((pet.shelter_id, vec![pet.name])),
            }
        }

        for (shelter_id, pet_names) in by_shelter {
            self.notifier.notify(SubmissionNotice {
                shelter_id,
                application_id: application.id.clone(),
                applicant_name: application.name.clone(),
                pet_names,
            })?;
        }

        Ok(())
    }
}

fn join_shelter(
    pet: Pet,
    shelter_names: &HashMap<ShelterId, String>,
) -> Result<PetWithShelter, AdoptionServiceError> {
    let shelter_name = shelter_names
        .get(&pet.shelter_id)
        .cloned()
        .ok_or_else(|| AdoptionServiceError::UnknownShelter(pet.shelter_id.clone()))?;

    Ok(PetWithShelter { pet, shelter_name })
}

/// Error raised by the adoption service.
#[derive(Debug, thiserror::Error)]
pub enum AdoptionServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("no shelter with id {0}")]
    UnknownShelter(ShelterId),
    #[error("no pet with id {0}")]
    UnknownPet(PetId),
    #[error("no application with id {0}")]
    UnknownApplication(ApplicationId),
    #[error("application {0} has already been submitted")]
    AlreadySubmitted(ApplicationId),
    #[error("application {0} has no pets selected")]
    NoPetsSelected(ApplicationId),
}
