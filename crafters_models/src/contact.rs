use crate::recaptcha::RecaptchaResponse;

/// A general contact form submission.
///
/// Text fields are expected to be trimmed already, `email` lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    /// The form labels this field "Company".
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub locale: Option<String>,
    pub recaptcha_response: Option<RecaptchaResponse>,
}
