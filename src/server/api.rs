use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::model::{ModelDescriptor, Scorer};
use crate::risk::{assess, mock_assessment, MockAssessment, PatientFeatures, RiskAssessment};
use crate::server::error::ApiError;
use crate::triage::{triage, Appointment, TriageReport};

pub const SERVICE_NAME: &str = "No-Show Risk Service";

/// Router state: the trained scorer, shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    pub scorer: &'static dyn Scorer,
}

impl AppState {
    pub fn new(scorer: &'static dyn Scorer) -> Self {
        Self { scorer }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub model_loaded: bool,
}

pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: SERVICE_NAME,
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        model_loaded: state.scorer.describe().trained,
    })
}

pub async fn predict(
    State(state): State<AppState>,
    Json(patient): Json<PatientFeatures>,
) -> Result<Json<RiskAssessment>, ApiError> {
    assess(state.scorer, &patient).map(Json).map_err(|err| {
        tracing::error!(error = %err, "error making prediction");
        ApiError::from(err)
    })
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelDescriptor> {
    Json(state.scorer.describe())
}

pub async fn predict_no_show() -> Json<MockAssessment> {
    Json(mock_assessment(&mut rand::thread_rng()))
}

pub async fn triage_appointments(
    Json(appointments): Json<Vec<Appointment>>,
) -> Json<TriageReport> {
    Json(triage(appointments, &mut rand::thread_rng()))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
