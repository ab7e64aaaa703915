use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crafters_models::validation::ValidationErrors;
use tracing::debug;

use crate::models::{ApiErrors, ApiMessage, ApiOk};

pub mod careers;
pub mod contact;
pub mod health;

const INVALID_PAYLOAD: &str = "Invalid request payload.";
const RECAPTCHA_REQUIRED: &str = "reCAPTCHA verification required.";
const RECAPTCHA_FAILED: &str = "reCAPTCHA verification failed. Please try again.";
const EMAIL_UNAVAILABLE: &str = "Email service unavailable.";
const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

fn ok() -> Response {
    Json(ApiOk { ok: true }).into_response()
}

fn invalid_payload(rejection: impl std::fmt::Display) -> Response {
    debug!("rejected malformed payload: {rejection}");
    error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)
}

fn recaptcha_required() -> Response {
    error(StatusCode::BAD_REQUEST, RECAPTCHA_REQUIRED)
}

fn recaptcha_failed() -> Response {
    error(StatusCode::BAD_REQUEST, RECAPTCHA_FAILED)
}

fn validation_errors(errors: ValidationErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiErrors { errors })).into_response()
}

fn email_unavailable() -> Response {
    error(StatusCode::SERVICE_UNAVAILABLE, EMAIL_UNAVAILABLE)
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (code, Json(ApiMessage { message })).into_response()
}
