use std::sync::Arc;

use crafters_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use crafters_email_contracts::{EmailSendError, EmailService};
use crafters_models::{
    contact::ContactSubmission,
    email_address::{EmailAddressWithName, RecipientList},
};
use crafters_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};
use tracing::{error, info};

mod message;
mod validation;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Captcha, Email> {
    captcha: Captcha,
    email: Option<Email>,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub from: Arc<EmailAddressWithName>,
    pub recipients: Arc<RecipientList>,
}

impl<Captcha, Email> ContactFeatureServiceImpl<Captcha, Email> {
    /// `email` is `None` when no delivery transport is configured.
    pub fn new(captcha: Captcha, email: Option<Email>, config: ContactFeatureConfig) -> Self {
        Self {
            captcha,
            email,
            config,
        }
    }
}

impl<Captcha, EmailS> ContactFeatureService for ContactFeatureServiceImpl<Captcha, EmailS>
where
    Captcha: CaptchaService,
    EmailS: EmailService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let verification = self
            .captcha
            .verify(submission.recaptcha_response.as_deref().map(String::as_str))
            .await
            .map_err(|err| match err {
                CaptchaCheckError::Required => ContactSubmitError::RecaptchaRequired,
            })?;
        if !verification.accepted() {
            return Err(ContactSubmitError::Recaptcha);
        }

        let errors = validation::validate(&submission);
        if !errors.is_empty() {
            return Err(ContactSubmitError::Invalid(errors));
        }

        let Some(email_service) = &self.email else {
            error!("no email transport is configured, dropping contact submission");
            return Err(ContactSubmitError::EmailUnavailable);
        };

        let email = message::compose(submission, &self.config).map_err(|err| {
            error!("{err}");
            ContactSubmitError::EmailUnavailable
        })?;

        match email_service.send(email).await {
            Ok(()) => {
                info!("forwarded contact submission");
                Ok(())
            }
            Err(EmailSendError::Rejected) => Err(ContactSubmitError::Send),
            Err(EmailSendError::Other(err)) => Err(ContactSubmitError::Other(err)),
        }
    }
}
