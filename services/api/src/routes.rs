use crate::infra::{dated, guidance_sheet, AppState, GuidanceSheet};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use deed_guidance::error::AppError;
use deed_guidance::guidance::{
    parse_fact_sheet, render_text_report, validate, validate_all, FactSheetError,
    TransactionContext, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    pub(crate) fact_sheet: TransactionContext,
    #[serde(default)]
    pub(crate) stage: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateResponse {
    pub(crate) stage: Option<usize>,
    pub(crate) complete: bool,
    pub(crate) errors: ValidationErrors,
}

pub(crate) fn guidance_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/guidance", post(guidance_endpoint))
        .route("/api/v1/guidance/validate", post(validate_endpoint))
        .route("/api/v1/guidance/report", post(report_endpoint))
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

/// Bodies are decoded by hand so malformed sheets surface as `FactSheetError`.
fn complete_fact_sheet(body: &str) -> Result<TransactionContext, AppError> {
    let context = dated(parse_fact_sheet(body)?, None);
    validate_all(&context)?;
    Ok(context)
}

pub(crate) async fn guidance_endpoint(body: String) -> Result<Json<GuidanceSheet>, AppError> {
    let context = complete_fact_sheet(&body)?;
    Ok(Json(guidance_sheet(&context)))
}

pub(crate) async fn validate_endpoint(body: String) -> Result<Json<ValidateResponse>, AppError> {
    let request: ValidateRequest = serde_json::from_str(&body).map_err(FactSheetError::from)?;
    let context = dated(request.fact_sheet, None);

    let response = match request.stage {
        Some(stage) => {
            let errors = validate(&context, stage);
            ValidateResponse {
                stage: Some(stage),
                complete: errors.is_empty(),
                errors,
            }
        }
        None => match validate_all(&context) {
            Ok(()) => ValidateResponse {
                stage: None,
                complete: true,
                errors: ValidationErrors::new(),
            },
            Err(incomplete) => ValidateResponse {
                stage: Some(incomplete.stage),
                complete: false,
                errors: incomplete.errors,
            },
        },
    };

    debug!(stage = ?response.stage, complete = response.complete, "fact sheet validated");
    Ok(Json(response))
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let context = complete_fact_sheet(&body)?;
    let sheet = guidance_sheet(&context);
    let text = render_text_report(&context, &sheet.narratives, &state.report);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}
