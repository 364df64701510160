//! The `/api/procesar` endpoint.
//!
//! One handler dispatches on the method itself instead of using per-method
//! routes, because the method router would also answer HEAD and would write
//! its own `Allow` header and empty body for everything else.

use std::sync::Arc;

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use super::upload;
use super::AppState;
use crate::error::ComplianceError;
use crate::process::{review_upload, ReviewOutput};

/// Body of the 405 response.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Método no permitido";

// ── Responses ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
    pub users: i64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthErrorBody {
    status: &'static str,
    error: String,
}

/// Renders `{error}` with the status from [`ComplianceError::status_code`].
impl IntoResponse for ComplianceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("POST /api/procesar failed: {}", self);
        } else {
            warn!("POST /api/procesar rejected: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health-probe failure, rendered as `{status: "error", error}`.
#[derive(Debug)]
pub struct HealthError(pub ComplianceError);

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        error!("Health probe failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthErrorBody {
                status: "error",
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

// ── Handlers ──────────────────────────────────────────────────────

pub async fn procesar(
    State(state): State<Arc<AppState>>,
    method: Method,
    request: Request,
) -> Response {
    match method {
        Method::GET => health(&state).await.into_response(),
        Method::POST => process(&state, request).await.into_response(),
        _ => method_not_allowed(),
    }
}

async fn health(state: &AppState) -> Result<Json<HealthResponse>, HealthError> {
    let users = state.store.count_users().await.map_err(HealthError)?;
    Ok(Json(HealthResponse {
        status: "ok",
        db: "connected",
        users,
    }))
}

async fn process(state: &AppState, request: Request) -> Result<Json<ReviewOutput>, ComplianceError> {
    let multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ComplianceError::Multipart(e.body_text()))?;
    let form = upload::parse_multipart(multipart).await?;
    let document = form.document.ok_or(ComplianceError::MissingDocument)?;

    let output = review_upload(&document, &form.instruction, &state.client).await?;
    Ok(Json(output))
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        METHOD_NOT_ALLOWED_BODY,
    )
        .into_response()
}
