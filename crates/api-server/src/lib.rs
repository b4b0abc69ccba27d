//! REST API server for student marks report generation
//!
//! Single report endpoint: two uploads decoded client-side into JSON rows
//! go in, a classroom-grouped right-to-left PDF comes back.

mod handlers;
mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use report_pdf_render::ReportFont;

pub use handlers::*;
pub use types::*;

/// API server state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    /// Report font, loaded once at startup and reused for every request
    pub font: Arc<dyn ReportFont + Send + Sync>,
}

impl ApiState {
    /// Create new API state around a loaded font
    pub fn new(font: impl ReportFont + Send + Sync + 'static) -> Self {
        Self {
            font: Arc::new(font),
        }
    }
}

/// Build the API router with all endpoints
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/reports/students", post(generate_student_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server
pub async fn start_server(addr: &str, state: ApiState) -> Result<(), std::io::Error> {
    tracing::info!("Starting report API server on {}", addr);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await
}
