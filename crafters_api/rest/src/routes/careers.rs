use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    response::Response,
    routing, Router,
};
use crafters_core_careers_contracts::{CareersFeatureService, CareersSubmitError};

use super::{
    email_unavailable, internal_server_error, ok, recaptcha_failed, recaptcha_required,
    validation_errors,
};
use crate::models::careers::ApiJobApplication;

/// Leaves room for CVs above the validated limit, so they are answered with
/// a field error instead of a bare 413.
pub const BODY_LIMIT: usize = 16 * 1024 * 1024;

pub fn router(service: Arc<impl CareersFeatureService>) -> Router<()> {
    Router::new()
        .route("/careers", routing::post(submit))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl CareersFeatureService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            return internal_server_error(anyhow!("Failed to accept multipart body: {rejection}"))
        }
    };
    let application = match ApiJobApplication::read(multipart).await {
        Ok(application) => application,
        Err(err) => return internal_server_error(anyhow!("Failed to read multipart body: {err}")),
    };

    match service.submit(application.into()).await {
        Ok(()) => ok(),
        Err(CareersSubmitError::RecaptchaRequired) => recaptcha_required(),
        Err(CareersSubmitError::Recaptcha) => recaptcha_failed(),
        Err(CareersSubmitError::Invalid(errors)) => validation_errors(errors),
        Err(CareersSubmitError::EmailUnavailable) => email_unavailable(),
        Err(CareersSubmitError::Send) => {
            internal_server_error(anyhow!("email provider refused the job application"))
        }
        Err(CareersSubmitError::Other(err)) => internal_server_error(err),
    }
}
