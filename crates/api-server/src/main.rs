//! Report API server binary entry point

use report_api_server::{start_server, ApiState};
use report_pdf_render::EmbeddedFont;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_api_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("REPORT_SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let font_path = std::env::var("REPORT_FONT_PATH")
        .unwrap_or_else(|_| "assets/Tajawal-Regular.ttf".to_string());

    // The font is the only startup resource; fail fast if it is unusable.
    let font = EmbeddedFont::from_file(Path::new(&font_path))?;
    tracing::info!("Loaded report font from {}", font_path);

    let state = ApiState::new(font);
    tracing::info!("Starting Student Marks Report API Server");
    start_server(&addr, state).await?;

    Ok(())
}
