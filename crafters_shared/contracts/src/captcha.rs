use std::future::Future;

use crafters_models::recaptcha::VerificationResult;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CaptchaService: Send + Sync + 'static {
    /// Decide whether a submission carrying `response` is likely human.
    ///
    /// Rejections are reported through [`VerificationResult::accepted`], only a
    /// missing response is an error.
    fn verify<'a>(
        &self,
        response: Option<&'a str>,
    ) -> impl Future<Output = Result<VerificationResult, CaptchaCheckError>> + Send;
}

#[derive(Debug, Error)]
pub enum CaptchaCheckError {
    #[error("A recaptcha response is required.")]
    Required,
}

#[cfg(feature = "mock")]
impl MockCaptchaService {
    pub fn with_verify(
        mut self,
        response: Option<&'static str>,
        result: Result<VerificationResult, CaptchaCheckError>,
    ) -> Self {
        self.expect_verify()
            .once()
            .withf(move |x| *x == response)
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
