use std::future::Future;

use crafters_models::{contact::ContactSubmission, validation::ValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Verify, validate and forward a contact form submission to the
    /// configured recipients.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("A recaptcha response is required.")]
    RecaptchaRequired,
    #[error("The recaptcha response is invalid or the user is probably not human.")]
    Recaptcha,
    #[error("The submission is invalid.")]
    Invalid(ValidationErrors),
    #[error("The email service is not configured.")]
    EmailUnavailable,
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
