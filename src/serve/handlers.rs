use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::models::*;
use super::{AppState, Assets};

/// Listings only change on a content deploy, so edge caches may hold them
/// for an hour and revalidate in the background.
const LISTING_CACHE_CONTROL: &str = "public, max-age=3600, stale-while-revalidate=86400";
const IMAGE_CACHE_CONTROL: &str = "max-age=86400";

// ==================== Health ====================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ==================== Listings ====================

pub async fn profile_images(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let images = spawn_listing(state, |state| {
        state
            .resolver
            .list_flat(&state.public_dir.join("profile"), "/profile")
    })
    .await?;

    listing_response(&ImagesResponse { images })
}

/// Flat portfolio listing: only files directly under `portfolio/`, project
/// subfolders are not descended into.
pub async fn portfolio_images(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let images = spawn_listing(state, |state| {
        state
            .resolver
            .list_flat(&state.public_dir.join("portfolio"), "/portfolio")
    })
    .await?;

    listing_response(&ImagesResponse { images })
}

pub async fn portfolio_projects(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let projects = spawn_listing(state, |state| {
        state
            .resolver
            .list_grouped(&state.public_dir.join("portfolio"), "/portfolio")
    })
    .await?;

    listing_response(&ProjectsResponse {
        projects: projects.into_iter().map(Into::into).collect(),
    })
}

fn listing_response<T: Serialize>(body: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, LISTING_CACHE_CONTROL)
        .body(Body::from(bytes))
        .unwrap())
}

/// Run a resolver listing off the request thread; directory reads block.
async fn spawn_listing<F, T>(state: Arc<AppState>, f: F) -> Result<T, AppError>
where
    F: FnOnce(&AppState) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}

// ==================== Image Serving ====================

pub async fn serve_portfolio_file(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    serve_public_file(&state, &format!("portfolio/{}", path)).await
}

pub async fn serve_profile_file(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    serve_public_file(&state, &format!("profile/{}", path)).await
}

async fn serve_public_file(state: &AppState, path: &str) -> Result<Response, AppError> {
    let requested = state.public_dir.join(path);

    // Path traversal protection: canonicalize and verify prefix
    let canonical = requested.canonicalize().map_err(|_| AppError::NotFound)?;

    if !canonical.starts_with(&state.public_dir) {
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    if !canonical.is_file() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let bytes = tokio::fs::read(&canonical)
        .await
        .map_err(|_| AppError::NotFound)?;

    let content_type = mime_guess::from_path(&canonical)
        .first_or_octet_stream()
        .to_string();

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, IMAGE_CACHE_CONTROL)
        .body(Body::from(bytes))
        .unwrap())
}

// ==================== Embedded Assets ====================

pub async fn serve_embedded_asset(req: axum::extract::Request) -> Result<Response, AppError> {
    let path = req.uri().path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match Assets::get(path) {
        Some(content) => {
            let content_type = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();

            Ok(Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(content.data.to_vec()))
                .unwrap())
        }
        None => match Assets::get("index.html") {
            Some(content) => Ok(Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .body(Body::from(content.data.to_vec()))
                .unwrap()),
            None => Ok(StatusCode::NOT_FOUND.into_response()),
        },
    }
}

// ==================== Error Type ====================

pub enum AppError {
    NotFound,
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
