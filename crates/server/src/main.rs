use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use policy_core::ContactFormHandler;
use serde::Deserialize;
use server_api::{list_sections, render_policy_center, submit_contact, ApiContext};
use shared::{
    domain::Section,
    error::{ApiError, ErrorCode},
    protocol::{contact_route, sections_route, ContactFields, ContactResponse},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{build_sink, load_settings};

#[derive(Debug, Deserialize)]
struct PageQuery {
    section: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings()?;
    let sink = build_sink(&settings).context("failed to configure submission sink")?;
    let contact =
        ContactFormHandler::new(sink).with_response_window(settings.response_window.clone());
    let state = AppState {
        api: ApiContext { contact },
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, sink = ?settings.sink, "policy center listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(policy_page))
        .route("/healthz", get(healthz))
        .route(sections_route(), get(http_list_sections))
        .route(contact_route(), post(http_submit_contact))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn policy_page(
    Query(q): Query<PageQuery>,
) -> Result<Html<String>, (StatusCode, Json<ApiError>)> {
    let today = chrono::Local::now().date_naive();
    render_policy_center(q.section.as_deref(), today)
        .map(Html)
        .map_err(|e| {
            error!(error = %e, "failed to render policy page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "page rendering failed")),
            )
        })
}

async fn http_list_sections() -> Json<Vec<Section>> {
    Json(list_sections())
}

async fn http_submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ApiError>)> {
    let Json(fields) = payload.map_err(reject_body)?;
    submit_contact(&state.api, &fields)
        .await
        .map(Json)
        .map_err(|e| (status_for(&e), Json(e)))
}

/// Unreadable, oversized or mistyped bodies keep axum's status but carry an
/// `ApiError` so clients can tell them apart from a failed forward.
fn reject_body(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    let status = rejection.status();
    info!(%status, reason = %rejection.body_text(), "contact request body rejected");
    (
        status,
        Json(ApiError::new(ErrorCode::InvalidRequest, rejection.body_text())),
    )
}

fn status_for(error: &ApiError) -> StatusCode {
    match error.code {
        ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Forwarding => StatusCode::BAD_GATEWAY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
