mod handlers;
mod models;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use rust_embed::Embed;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::resolver::Resolver;

#[derive(Embed)]
#[folder = "src/serve/assets/"]
struct Assets;

pub struct AppState {
    pub resolver: Resolver,
    pub public_dir: PathBuf,
}

pub fn run_serve(public_dir: &std::path::Path, port: u16, resolver: Resolver) -> Result<()> {
    let public_dir = public_dir
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("Failed to resolve public dir: {}", e))?;

    let state = Arc::new(AppState {
        resolver,
        public_dir,
    });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let app = build_router(state);

        let addr = format!("0.0.0.0:{}", port);
        println!("Serving gallery on http://localhost:{}", port);
        println!("  Also available on http://0.0.0.0:{}", port);
        println!("Press Ctrl+C to stop.");

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/profile-images", get(handlers::profile_images))
        .route("/api/portfolio-images", get(handlers::portfolio_images))
        .route("/api/portfolio-projects", get(handlers::portfolio_projects))
        .route("/portfolio/{*path}", get(handlers::serve_portfolio_file))
        .route("/profile/{*path}", get(handlers::serve_profile_file))
        .fallback(get(handlers::serve_embedded_asset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
