use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;

use crate::adoption::domain::{
    Application, ApplicationId, NewPet, NewShelter, Pet, PetId, Shelter, ShelterId,
};
use crate::adoption::intake::ApplicationForm;
use crate::adoption::repository::{
    AdoptionStore, NotifyError, RepositoryError, ReviewNotifier, SubmissionNotice,
};
use crate::adoption::{adoption_router, AdoptionService};

pub(super) fn build_service() -> (
    AdoptionService<MemoryStore, MemoryNotifier>,
    Arc<MemoryStore>,
    Arc<MemoryNotifier>,
) {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AdoptionService::new(store.clone(), notifier.clone());
    (service, store, notifier)
}

pub(super) fn raccoon_emporium(
    service: &AdoptionService<MemoryStore, MemoryNotifier>,
) -> Shelter {
    service
        .register_shelter(NewShelter {
            name: "Craig's Raccoon Emporium".to_string(),
            city: "Omaha".to_string(),
            rank: Some(1),
            foster_program: None,
        })
        .expect("register shelter")
}

pub(super) fn aurora_shelter(service: &AdoptionService<MemoryStore, MemoryNotifier>) -> Shelter {
    service
        .register_shelter(NewShelter {
            name: "Aurora shelter".to_string(),
            city: "Aurora, CO".to_string(),
            rank: Some(9),
            foster_program: Some(false),
        })
        .expect("register shelter")
}

pub(super) fn list_pet(
    service: &AdoptionService<MemoryStore, MemoryNotifier>,
    shelter: &Shelter,
    name: &str,
    age: u8,
) -> Pet {
    service
        .add_pet(NewPet {
            shelter_id: shelter.id.clone(),
            name: name.to_string(),
            age,
        })
        .expect("list pet")
}

pub(super) fn applicant_form() -> ApplicationForm {
    ApplicationForm {
        name: "Gob Beldof".to_string(),
        address: "152 Animal Ave.".to_string(),
        city: "Omaha".to_string(),
        state: "NE".to_string(),
        zip_code: "19593".to_string(),
        description: String::new(),
    }
}

pub(super) fn open_application(
    service: &AdoptionService<MemoryStore, MemoryNotifier>,
    shelter: &Shelter,
) -> Application {
    service
        .open_application(&shelter.id, applicant_form())
        .expect("open application")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    shelters: Arc<Mutex<HashMap<ShelterId, Shelter>>>,
    pets: Arc<Mutex<HashMap<PetId, Pet>>>,
    applications: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl AdoptionStore for MemoryStore {
    fn insert_shelter(&self, shelter: Shelter) -> Result<Shelter, RepositoryError> {
        let mut guard = self.shelters.lock().expect("shelter mutex poisoned");
        if guard.contains_key(&shelter.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(shelter.id.clone(), shelter.clone());
        Ok(shelter)
    }

    fn fetch_shelter(&self, id: &ShelterId) -> Result<Option<Shelter>, RepositoryError> {
        let guard = self.shelters.lock().expect("shelter mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn shelters(&self) -> Result<Vec<Shelter>, RepositoryError> {
        let guard = self.shelters.lock().expect("shelter mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn insert_pet(&self, pet: Pet) -> Result<Pet, RepositoryError> {
        let mut guard = self.pets.lock().expect("pet mutex poisoned");
        if guard.contains_key(&pet.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(pet.id.clone(), pet.clone());
        Ok(pet)
    }

    fn fetch_pet(&self, id: &PetId) -> Result<Option<Pet>, RepositoryError> {
        let guard = self.pets.lock().expect("pet mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pets(&self) -> Result<Vec<Pet>, RepositoryError> {
        let guard = self.pets.lock().expect("pet mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn insert_application(
        &self,
        application: Application,
    ) -> Result<Application, RepositoryError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update_application(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        if !guard.contains_key(&application.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(application.id.clone(), application);
        Ok(())
    }

    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    notices: Arc<Mutex<Vec<SubmissionNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<SubmissionNotice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }
}

impl ReviewNotifier for MemoryNotifier {
    fn notify(&self, notice: SubmissionNotice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl ReviewNotifier for FailingNotifier {
    fn notify(&self, _notice: SubmissionNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("review desk offline".to_string()))
    }
}

pub(super) struct UnavailableStore;

impl AdoptionStore for UnavailableStore {
    fn insert_shelter(&self, _shelter: Shelter) -> Result<Shelter, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_shelter(&self, _id: &ShelterId) -> Result<Option<Shelter>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn shelters(&self) -> Result<Vec<Shelter>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_pet(&self, _pet: Pet) -> Result<Pet, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_pet(&self, _id: &PetId) -> Result<Option<Pet>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pets(&self) -> Result<Vec<Pet>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_application(
        &self,
        _application: Application,
    ) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_application(&self, _application: Application) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_application(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_html_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

pub(super) fn adoption_router_with_service(
    service: AdoptionService<MemoryStore, MemoryNotifier>,
) -> axum::Router {
    adoption_router(Arc::new(service))
}
