pub mod api;
pub mod error;
pub mod routes;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::ServeError;
use crate::model::shared_forest;

pub use api::AppState;
pub use error::ApiError;
pub use routes::build_router;

/// Trains the shared model, then serves until the process is stopped.
pub async fn run_server(config: &ServiceConfig) -> Result<(), ServeError> {
    let app = build_router(AppState::new(shared_forest()));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "no-show service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
