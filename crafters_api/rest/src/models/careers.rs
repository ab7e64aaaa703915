use axum::extract::{multipart::MultipartError, Multipart};
use crafters_models::{
    careers::{CvFile, JobApplication},
    recaptcha::RecaptchaResponse,
    sanitize, sanitize_optional,
};

const CV_FIELD: &str = "cv";

/// Fields of the careers form as received in the multipart body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiJobApplication {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub heard_from: Option<String>,
    pub heard_from_other: Option<String>,
    pub job_title: Option<String>,
    pub locale: Option<String>,
    pub recaptcha_token: Option<String>,
    pub cv: Option<CvFile>,
}

impl ApiJobApplication {
    /// Reads all parts of `multipart`. Only the first occurrence of a field
    /// counts, unknown fields are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut application = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };

            if name == CV_FIELD {
                // a plain text part named `cv` is not a file upload
                let Some(filename) = field.file_name().map(ToOwned::to_owned) else {
                    continue;
                };
                let content_type = field.content_type().map(ToOwned::to_owned);
                let content = field.bytes().await?;
                application.cv.get_or_insert(CvFile {
                    filename,
                    content_type,
                    content: content.to_vec(),
                });
                continue;
            }

            let Some(slot) = application.text_field(&name) else {
                continue;
            };
            let value = field.text().await?;
            slot.get_or_insert(value);
        }

        Ok(application)
    }

    fn text_field(&mut self, name: &str) -> Option<&mut Option<String>> {
        Some(match name {
            "fullName" => &mut self.full_name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "linkedinUrl" => &mut self.linkedin_url,
            "heardFrom" => &mut self.heard_from,
            "heardFromOther" => &mut self.heard_from_other,
            "jobTitle" => &mut self.job_title,
            "locale" => &mut self.locale,
            "recaptchaToken" => &mut self.recaptcha_token,
            _ => return None,
        })
    }
}

impl From<ApiJobApplication> for JobApplication {
    fn from(value: ApiJobApplication) -> Self {
        Self {
            full_name: sanitize(value.full_name),
            phone: sanitize(value.phone),
            email: sanitize(value.email).to_lowercase(),
            linkedin_url: sanitize_optional(value.linkedin_url),
            heard_from: sanitize_optional(value.heard_from),
            heard_from_other: sanitize_optional(value.heard_from_other),
            job_title: sanitize_optional(value.job_title),
            locale: sanitize_optional(value.locale),
            recaptcha_response: value
                .recaptcha_token
                .and_then(|x| RecaptchaResponse::try_new(x).ok()),
            cv: value.cv,
        }
    }
}
