use std::future::Future;

use crafters_models::{careers::JobApplication, validation::ValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CareersFeatureService: Send + Sync + 'static {
    /// Verify and validate a job application, then forward it together with
    /// the attached CV to the careers recipients.
    fn submit(
        &self,
        application: JobApplication,
    ) -> impl Future<Output = Result<(), CareersSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum CareersSubmitError {
    #[error("A recaptcha response is required.")]
    RecaptchaRequired,
    #[error("The recaptcha response is invalid or the user is probably not human.")]
    Recaptcha,
    #[error("The application is invalid.")]
    Invalid(ValidationErrors),
    #[error("The email service is not configured.")]
    EmailUnavailable,
    #[error("Failed to send application.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCareersFeatureService {
    pub fn with_submit(
        mut self,
        application: JobApplication,
        result: Result<(), CareersSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(application))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
