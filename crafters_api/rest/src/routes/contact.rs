use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing, Json, Router,
};
use crafters_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{
    email_unavailable, internal_server_error, invalid_payload, ok, recaptcha_failed,
    recaptcha_required, validation_errors,
};
use crate::models::contact::ApiContactSubmission;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return invalid_payload(rejection),
    };
    let Some(submission) = ApiContactSubmission::from_json(body) else {
        return invalid_payload("empty request body");
    };

    match service.submit(submission.into()).await {
        Ok(()) => ok(),
        Err(ContactSubmitError::RecaptchaRequired) => recaptcha_required(),
        Err(ContactSubmitError::Recaptcha) => recaptcha_failed(),
        Err(ContactSubmitError::Invalid(errors)) => validation_errors(errors),
        Err(ContactSubmitError::EmailUnavailable) => email_unavailable(),
        Err(ContactSubmitError::Send) => {
            internal_server_error(anyhow!("email provider refused the contact submission"))
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
