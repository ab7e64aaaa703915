use std::sync::Arc;

use crafters_extern_contracts::recaptcha::RecaptchaApiService;
use crafters_models::{recaptcha::VerificationResult, Sensitive};
use crafters_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct CaptchaServiceImpl<RecaptchaApi> {
    recaptcha_api: RecaptchaApi,
    config: CaptchaServiceConfig,
}

#[derive(Debug, Clone)]
pub enum CaptchaServiceConfig {
    Disabled,
    Recaptcha(RecaptchaCaptchaServiceConfig),
}

#[derive(Debug, Clone)]
pub struct RecaptchaCaptchaServiceConfig {
    pub secret: Sensitive<Arc<str>>,
}

impl<RecaptchaApi> CaptchaServiceImpl<RecaptchaApi> {
    pub fn new(recaptcha_api: RecaptchaApi, config: CaptchaServiceConfig) -> Self {
        Self {
            recaptcha_api,
            config,
        }
    }
}

impl<RecaptchaApi> CaptchaService for CaptchaServiceImpl<RecaptchaApi>
where
    RecaptchaApi: RecaptchaApiService,
{
    async fn verify(&self, response: Option<&str>) -> Result<VerificationResult, CaptchaCheckError> {
        let CaptchaServiceConfig::Recaptcha(config) = &self.config else {
            return Ok(VerificationResult::Disabled);
        };

        let response = response
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .ok_or(CaptchaCheckError::Required)?;

        let result = match self.recaptcha_api.siteverify(response, &config.secret).await {
            Ok(response) => VerificationResult::Verified {
                success: response.success,
                score: response.score.unwrap_or(0.0),
            },
            Err(err) => {
                warn!("recaptcha siteverify request failed: {err:#}");
                VerificationResult::Unreachable
            }
        };

        if !result.accepted() {
            warn!(score = result.score(), "recaptcha verification failed");
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crafters_extern_contracts::recaptcha::{
        MockRecaptchaApiService, RecaptchaSiteverifyResponse,
    };
    use crafters_utils::assert_matches;

    use super::*;

    fn recaptcha_config() -> CaptchaServiceConfig {
        CaptchaServiceConfig::Recaptcha(RecaptchaCaptchaServiceConfig {
            secret: Sensitive("test-secret".into()),
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new().with_siteverify(
            "captcha response".into(),
            "test-secret".into(),
            RecaptchaSiteverifyResponse {
                success: true,
                score: Some(0.8),
            },
        );

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        let result = result.unwrap();
        assert!(result.accepted());
        assert_eq!(result.score(), 0.8);
    }

    #[tokio::test]
    async fn ok_response_is_trimmed() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new().with_siteverify(
            "captcha response".into(),
            "test-secret".into(),
            RecaptchaSiteverifyResponse {
                success: true,
                score: Some(0.5),
            },
        );

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("  captcha response\n")).await;

        // Assert
        assert!(result.unwrap().accepted());
    }

    #[tokio::test]
    async fn ok_disabled() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new();

        let sut = CaptchaServiceImpl::new(recaptcha_api, CaptchaServiceConfig::Disabled);

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result, VerificationResult::Disabled);
        assert!(result.accepted());
        assert_eq!(result.score(), 1.0);
    }

    #[tokio::test]
    async fn ok_disabled_no_response() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new();

        let sut = CaptchaServiceImpl::new(recaptcha_api, CaptchaServiceConfig::Disabled);

        // Act
        let result = sut.verify(None).await;

        // Assert
        assert!(result.unwrap().accepted());
    }

    #[tokio::test]
    async fn rejected_insufficient_score() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new().with_siteverify(
            "captcha response".into(),
            "test-secret".into(),
            RecaptchaSiteverifyResponse {
                success: true,
                score: Some(0.3),
            },
        );

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        let result = result.unwrap();
        assert!(!result.accepted());
        assert_eq!(result.score(), 0.3);
    }

    #[tokio::test]
    async fn rejected_no_score() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new().with_siteverify(
            "captcha response".into(),
            "test-secret".into(),
            RecaptchaSiteverifyResponse {
                success: true,
                score: None,
            },
        );

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        let result = result.unwrap();
        assert!(!result.accepted());
        assert_eq!(result.score(), 0.0);
    }

    #[tokio::test]
    async fn rejected_no_success() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new().with_siteverify(
            "captcha response".into(),
            "test-secret".into(),
            RecaptchaSiteverifyResponse {
                success: false,
                score: Some(0.9),
            },
        );

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        assert!(!result.unwrap().accepted());
    }

    #[tokio::test]
    async fn rejected_unreachable() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new()
            .with_siteverify_error("captcha response".into(), "test-secret".into());

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("captcha response")).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result, VerificationResult::Unreachable);
        assert!(!result.accepted());
        assert_eq!(result.score(), 0.0);
    }

    #[tokio::test]
    async fn required_no_response() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new();

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(None).await;

        // Assert
        assert_matches!(result, Err(CaptchaCheckError::Required));
    }

    #[tokio::test]
    async fn required_blank_response() {
        // Arrange
        let recaptcha_api = MockRecaptchaApiService::new();

        let sut = CaptchaServiceImpl::new(recaptcha_api, recaptcha_config());

        // Act
        let result = sut.verify(Some("   ")).await;

        // Assert
        assert_matches!(result, Err(CaptchaCheckError::Required));
    }
}
