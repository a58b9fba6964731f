use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::domain::{ApplicationId, PetId, ShelterId};
use super::intake::ApplicationForm;
use super::pages;
use super::repository::{AdoptionStore, ReviewNotifier};
use super::service::{AdoptionService, AdoptionServiceError};

/// Router builder exposing the adopter-facing pages and form endpoints.
pub fn adoption_router<S, N>(service: Arc<AdoptionService<S, N>>) -> Router
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    Router::new()
        .route("/shelters", get(shelter_index_handler::<S, N>))
        .route("/shelters/:shelter_id", get(shelter_page_handler::<S, N>))
        .route(
            "/shelters/:shelter_id/apps/new",
            get(new_application_handler::<S, N>),
        )
        .route(
            "/shelters/:shelter_id/apps",
            post(create_application_handler::<S, N>),
        )
        .route("/apps/:application_id", get(application_page_handler::<S, N>))
        .route(
            "/apps/:application_id/pets/:pet_id",
            post(attach_pet_handler::<S, N>),
        )
        .route(
            "/apps/:application_id/submit",
            post(submit_application_handler::<S, N>),
        )
        .route("/pets/:pet_id", get(pet_page_handler::<S, N>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitForm {
    #[serde(default)]
    description: String,
}

pub(crate) async fn shelter_index_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    match service.shelters_overview() {
        Ok(shelters) => Html(pages::render_shelter_index(&shelters)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn shelter_page_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(shelter_id): Path<String>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    match service.shelter_page(&ShelterId(shelter_id)) {
        Ok(view) => Html(pages::render_shelter_page(&view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn new_application_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(shelter_id): Path<String>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    match service.find_shelter(&ShelterId(shelter_id)) {
        Ok(shelter) => Html(pages::render_new_application_page(
            &shelter,
            &ApplicationForm::default(),
            &[],
        ))
        .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_application_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(shelter_id): Path<String>,
    Form(form): Form<ApplicationForm>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    let shelter_id = ShelterId(shelter_id);
    match service.open_application(&shelter_id, form.clone()) {
        Ok(application) => Redirect::to(&format!("/apps/{}", application.id)).into_response(),
        Err(AdoptionServiceError::Intake(error)) => {
            // Re-render the form with what the adopter typed and the screen
            // failure listed above it.
            match service.find_shelter(&shelter_id) {
                Ok(shelter) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(pages::render_new_application_page(
                        &shelter,
                        &form,
                        &[error.to_string()],
                    )),
                )
                    .into_response(),
                Err(other) => error_response(other),
            }
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn application_page_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(application_id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.application_page(&id, params.search.as_deref()) {
        Ok(view) => Html(pages::render_application_page(&view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn attach_pet_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path((application_id, pet_id)): Path<(String, String)>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.attach_pet(&id, &PetId(pet_id)) {
        Ok(application) => Redirect::to(&format!("/apps/{}", application.id)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_application_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(application_id): Path<String>,
    Form(form): Form<SubmitForm>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.submit_application(&id, &form.description) {
        Ok(application) => Redirect::to(&format!("/apps/{}", application.id)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn pet_page_handler<S, N>(
    State(service): State<Arc<AdoptionService<S, N>>>,
    Path(pet_id): Path<String>,
) -> Response
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    match service.pet_page(&PetId(pet_id)) {
        Ok(view) => Html(pages::render_pet_page(&view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AdoptionServiceError) -> Response {
    let (status, title) = match &error {
        AdoptionServiceError::UnknownShelter(_)
        | AdoptionServiceError::UnknownPet(_)
        | AdoptionServiceError::UnknownApplication(_) => (StatusCode::NOT_FOUND, "Not Found"),
        AdoptionServiceError::AlreadySubmitted(_) => (StatusCode::CONFLICT, "Already Submitted"),
        AdoptionServiceError::NoPetsSelected(_) | AdoptionServiceError::Intake(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Unable to Submit")
        }
        AdoptionServiceError::Repository(_) | AdoptionServiceError::Notify(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Something Went Wrong")
        }
    };

    (
        status,
        Html(pages::render_error_page(title, &error.to_string())),
    )
        .into_response()
}
