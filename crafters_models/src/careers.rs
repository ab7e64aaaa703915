use crate::recaptcha::RecaptchaResponse;

pub const CV_MAX_SIZE: usize = 5 * 1024 * 1024;

pub const CV_ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub const CV_ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

/// The `heardFrom` value that pairs with a free-text `heardFromOther`.
pub const HEARD_FROM_OTHER: &str = "other";

/// A job application submitted through the careers form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub heard_from: Option<String>,
    pub heard_from_other: Option<String>,
    pub job_title: Option<String>,
    pub locale: Option<String>,
    pub recaptcha_response: Option<RecaptchaResponse>,
    pub cv: Option<CvFile>,
}

impl JobApplication {
    pub fn heard_from_text(&self) -> Option<String> {
        match (self.heard_from.as_deref(), self.heard_from_other.as_deref()) {
            (Some(HEARD_FROM_OTHER), Some(other)) => Some(format!("Other: {other}")),
            (heard_from, _) => heard_from.map(Into::into),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct CvFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl CvFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Lower-cased extension of the filename including the leading dot.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rfind('.')
            .map(|idx| self.filename[idx..].to_lowercase())
    }

    /// Either the declared content type or the filename extension must be allowed.
    pub fn has_allowed_type(&self) -> bool {
        let content_type_ok = self
            .content_type
            .as_deref()
            .is_some_and(|x| CV_ALLOWED_CONTENT_TYPES.contains(&x));
        let extension_ok = self
            .extension()
            .is_some_and(|x| CV_ALLOWED_EXTENSIONS.contains(&x.as_str()));
        content_type_ok || extension_ok
    }
}

impl std::fmt::Debug for CvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CvFile")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
