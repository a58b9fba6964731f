use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shelter_hub::adoption::{
    adoption_router, AdoptionService, AdoptionStore, PetRosterImporter, ReviewNotifier,
    RosterEntry,
};
use shelter_hub::error::AppError;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct RosterPreviewRequest {
    pub(crate) roster_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterPreviewResponse {
    pub(crate) count: usize,
    pub(crate) entries: Vec<RosterEntryView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterEntryView {
    pub(crate) name: String,
    pub(crate) age: u8,
}

pub(crate) fn with_adoption_routes<S, N>(service: Arc<AdoptionService<S, N>>) -> axum::Router
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    adoption_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/roster/preview",
            axum::routing::post(roster_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roster_preview_endpoint(
    Json(payload): Json<RosterPreviewRequest>,
) -> Result<Json<RosterPreviewResponse>, AppError> {
    let reader = Cursor::new(payload.roster_csv.into_bytes());
    let entries = PetRosterImporter::from_reader(reader)?;

    let entries: Vec<RosterEntryView> = entries
        .into_iter()
        .map(|RosterEntry { name, age }| RosterEntryView { name, age })
        .collect();

    Ok(Json(RosterPreviewResponse {
        count: entries.len(),
        entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use shelter_hub::adoption::RosterImportError;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let state = app_state(false);

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Relaxed);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_prometheus_text() {
        let response = metrics_endpoint(Extension(app_state(true)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set");
        assert_eq!(content_type, "text/plain; version=0.0.4");
    }

    #[tokio::test]
    async fn roster_preview_lists_parsed_entries() {
        let request = RosterPreviewRequest {
            roster_csv: "name,age\nKing Trash Mouth,14\nEggs Sinclair,10\n".to_string(),
        };

        let Json(body) = roster_preview_endpoint(Json(request))
            .await
            .expect("roster parses");

        assert_eq!(body.count, 2);
        assert_eq!(body.entries[0].name, "King Trash Mouth");
        assert_eq!(body.entries[1].age, 10);
    }

    #[tokio::test]
    async fn roster_preview_rejects_blank_names_with_the_row() {
        let request = RosterPreviewRequest {
            roster_csv: "name,age\n,14\n".to_string(),
        };

        let error = roster_preview_endpoint(Json(request))
            .await
            .expect_err("blank name rejected");

        assert!(matches!(
            error,
            AppError::Roster(RosterImportError::BlankName { row: 2 })
        ));
    }
}
