use std::sync::Arc;

use crafters_core_careers_contracts::{CareersFeatureService, CareersSubmitError};
use crafters_email_contracts::{EmailSendError, EmailService};
use crafters_models::{
    careers::JobApplication,
    email_address::{EmailAddressWithName, RecipientList},
};
use crafters_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};
use tracing::{error, info};

mod message;
mod validation;

#[derive(Debug, Clone)]
pub struct CareersFeatureServiceImpl<Captcha, Email> {
    captcha: Captcha,
    email: Option<Email>,
    config: CareersFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct CareersFeatureConfig {
    pub from: Arc<EmailAddressWithName>,
    pub recipients: Arc<RecipientList>,
}

impl<Captcha, Email> CareersFeatureServiceImpl<Captcha, Email> {
    pub fn new(captcha: Captcha, email: Option<Email>, config: CareersFeatureConfig) -> Self {
        Self {
            captcha,
            email,
            config,
        }
    }
}

impl<Captcha, EmailS> CareersFeatureService for CareersFeatureServiceImpl<Captcha, EmailS>
where
    Captcha: CaptchaService,
    EmailS: EmailService,
{
    async fn submit(&self, application: JobApplication) -> Result<(), CareersSubmitError> {
        let verification = self
            .captcha
            .verify(application.recaptcha_response.as_deref().map(String::as_str))
            .await
            .map_err(|err| match err {
                CaptchaCheckError::Required => CareersSubmitError::RecaptchaRequired,
            })?;
        if !verification.accepted() {
            return Err(CareersSubmitError::Recaptcha);
        }

        let errors = validation::validate(&application);
        if !errors.is_empty() {
            return Err(CareersSubmitError::Invalid(errors));
        }

        let Some(email_service) = &self.email else {
            error!("no email transport is configured, dropping job application");
            return Err(CareersSubmitError::EmailUnavailable);
        };

        let email = message::compose(application, &self.config).map_err(|err| {
            error!("{err}");
            CareersSubmitError::EmailUnavailable
        })?;

        let cv_size = email.attachment.as_ref().map(|x| x.content.len());
        match email_service.send(email).await {
            Ok(()) => {
                info!(cv_size, "forwarded job application");
                Ok(())
            }
            Err(EmailSendError::Rejected) => Err(CareersSubmitError::Send),
            Err(EmailSendError::Other(err)) => Err(CareersSubmitError::Other(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crafters_email_contracts::{Email, EmailAttachment, MockEmailService};
    use crafters_models::{
        careers::{CvFile, CV_MAX_SIZE},
        recaptcha::{RecaptchaResponse, VerificationResult},
    };
    use crafters_shared_contracts::captcha::MockCaptchaService;
    use crafters_utils::assert_matches;

    use super::*;

    type Sut = CareersFeatureServiceImpl<MockCaptchaService, MockEmailService>;

    fn config() -> CareersFeatureConfig {
        CareersFeatureConfig {
            from: Arc::new(
                "AI Crafters <notifications@updates.aicrafters.com>"
                    .parse()
                    .unwrap(),
            ),
            recipients: Arc::new(RecipientList::parse("careers@aicrafters.com")),
        }
    }

    fn cv() -> CvFile {
        CvFile {
            filename: "cv.pdf".into(),
            content_type: Some("application/pdf".into()),
            content: b"%PDF-1.7".to_vec(),
        }
    }

    fn application() -> JobApplication {
        JobApplication {
            full_name: "Dana Levi".into(),
            phone: "050-0000000".into(),
            email: "dana@example.com".into(),
            linkedin_url: None,
            heard_from: None,
            heard_from_other: None,
            job_title: None,
            locale: None,
            recaptcha_response: Some(RecaptchaResponse::try_new("resp").unwrap()),
            cv: Some(cv()),
        }
    }

    fn expected_email() -> Email {
        let config = config();
        Email {
            from: (*config.from).clone(),
            recipients: (*config.recipients).clone(),
            subject: "New Job Application: General - Dana Levi".into(),
            body: [
                "=== Job Application ===",
                "",
                "Position: Not specified",
                "",
                "--- Applicant Details ---",
                "Full Name: Dana Levi",
                "Email: dana@example.com",
                "Phone: 050-0000000",
                "",
                "--- CV Attached ---",
                "Filename: cv.pdf",
            ]
            .join("\n"),
            reply_to: Some("dana@example.com".parse().unwrap()),
            attachment: Some(EmailAttachment {
                filename: "cv.pdf".into(),
                content_type: Some("application/pdf".into()),
                content: b"%PDF-1.7".to_vec(),
            }),
        }
    }

    fn verified(score: f64) -> VerificationResult {
        VerificationResult::Verified {
            success: true,
            score,
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.7)));
        let email = MockEmailService::new().with_send(expected_email(), true);

        let sut = Sut::new(captcha, Some(email), config());

        // Act
        let result = sut.submit(application()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn recaptcha_required() {
        // Arrange
        let captcha =
            MockCaptchaService::new().with_verify(None, Err(CaptchaCheckError::Required));

        let sut = Sut::new(captcha, Some(MockEmailService::new()), config());

        // Act
        let result = sut
            .submit(JobApplication {
                recaptcha_response: None,
                ..application()
            })
            .await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::RecaptchaRequired));
    }

    #[tokio::test]
    async fn recaptcha_rejected() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(
            Some("resp"),
            Ok(VerificationResult::Verified {
                success: false,
                score: 0.9,
            }),
        );

        let sut = Sut::new(captcha, Some(MockEmailService::new()), config());

        // Act
        let result = sut.submit(application()).await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::Recaptcha));
    }

    #[tokio::test]
    async fn recaptcha_runs_before_validation() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.1)));

        let sut = Sut::new(captcha, Some(MockEmailService::new()), config());

        // Act
        let result = sut
            .submit(JobApplication {
                full_name: "".into(),
                cv: None,
                ..application()
            })
            .await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::Recaptcha));
    }

    #[tokio::test]
    async fn invalid_cv() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.9)));

        let sut = Sut::new(captcha, Some(MockEmailService::new()), config());

        // Act
        let result = sut
            .submit(JobApplication {
                cv: Some(CvFile {
                    content: vec![0; CV_MAX_SIZE + 1],
                    ..cv()
                }),
                ..application()
            })
            .await;

        // Assert
        assert_matches!(
            result,
            Err(CareersSubmitError::Invalid(errors))
                if errors.get("cv") == Some("CV file must be smaller than 5MB.")
        );
    }

    #[tokio::test]
    async fn no_email_transport() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.9)));

        let sut = Sut::new(captcha, None, config());

        // Act
        let result = sut.submit(application()).await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::EmailUnavailable));
    }

    #[tokio::test]
    async fn no_recipients() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.9)));

        let sut = Sut::new(
            captcha,
            Some(MockEmailService::new()),
            CareersFeatureConfig {
                recipients: Arc::new(RecipientList::parse("")),
                ..config()
            },
        );

        // Act
        let result = sut.submit(application()).await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::EmailUnavailable));
    }

    #[tokio::test]
    async fn send_rejected() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.9)));
        let email = MockEmailService::new().with_send(expected_email(), false);

        let sut = Sut::new(captcha, Some(email), config());

        // Act
        let result = sut.submit(application()).await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::Send));
    }

    #[tokio::test]
    async fn send_error() {
        // Arrange
        let captcha = MockCaptchaService::new().with_verify(Some("resp"), Ok(verified(0.9)));
        let email = MockEmailService::new().with_send_error(expected_email());

        let sut = Sut::new(captcha, Some(email), config());

        // Act
        let result = sut.submit(application()).await;

        // Assert
        assert_matches!(result, Err(CareersSubmitError::Other(_)));
    }
}
