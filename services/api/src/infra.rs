use metrics_exporter_prometheus::PrometheusHandle;
use shelter_hub::adoption::{
    AdoptionStore, Application, ApplicationId, NotifyError, Pet, PetId, RepositoryError,
    ReviewNotifier, Shelter, ShelterId, SubmissionNotice,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAdoptionStore {
    shelters: Arc<Mutex<HashMap<ShelterId, Shelter>>>,
    pets: Arc<Mutex<HashMap<PetId, Pet>>>,
    applications: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl AdoptionStore for InMemoryAdoptionStore {
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
        let mut guard = self
            .applications
            .lock()
            .expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update_application(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self
            .applications
            .lock()
            .expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            guard.insert(application.id.clone(), application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        let guard = self
            .applications
            .lock()
            .expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReviewNotifier {
    notices: Arc<Mutex<Vec<SubmissionNotice>>>,
}

impl ReviewNotifier for InMemoryReviewNotifier {
    fn notify(&self, notice: SubmissionNotice) -> Result<(), NotifyError> {
        let mut guard = self.notices.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryReviewNotifier {
    pub(crate) fn notices(&self) -> Vec<SubmissionNotice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }
}
