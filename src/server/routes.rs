use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::server::api::{self, AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/predict", post(api::predict))
        .route("/predict/no-show", post(api::predict_no_show))
        .route("/model/info", get(api::model_info))
        .route("/appointments/triage", post(api::triage_appointments))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
