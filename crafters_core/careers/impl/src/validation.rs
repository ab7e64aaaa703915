use crafters_models::{
    careers::{JobApplication, CV_MAX_SIZE},
    validation::{is_blank, is_valid_email, ValidationErrors},
};

const FULL_NAME_REQUIRED: &str = "Full name is required.";
const PHONE_REQUIRED: &str = "Phone number is required.";
const EMAIL_REQUIRED: &str = "Email is required.";
const EMAIL_INVALID: &str = "Invalid email format.";
const CV_REQUIRED: &str = "CV file is required.";
const CV_TOO_LARGE: &str = "CV file must be smaller than 5MB.";
const CV_INVALID_TYPE: &str = "CV must be a PDF or Word document.";
const LINKEDIN_INVALID: &str = "Please enter a valid LinkedIn URL.";

/// Collect every field violation of `application`.
pub fn validate(application: &JobApplication) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&application.full_name) {
        errors.insert("fullName", FULL_NAME_REQUIRED);
    }
    if is_blank(&application.phone) {
        errors.insert("phone", PHONE_REQUIRED);
    }
    if is_blank(&application.email) {
        errors.insert("email", EMAIL_REQUIRED);
    } else if !is_valid_email(application.email.trim()) {
        errors.insert("email", EMAIL_INVALID);
    }

    match &application.cv {
        None => errors.insert("cv", CV_REQUIRED),
        Some(cv) if cv.size() == 0 => errors.insert("cv", CV_REQUIRED),
        Some(cv) if cv.size() > CV_MAX_SIZE => errors.insert("cv", CV_TOO_LARGE),
        Some(cv) if !cv.has_allowed_type() => errors.insert("cv", CV_INVALID_TYPE),
        Some(_) => {}
    }

    if application
        .linkedin_url
        .as_deref()
        .map(str::trim)
        .is_some_and(|url| !url.is_empty() && !url.contains("linkedin.com"))
    {
        errors.insert("linkedinUrl", LINKEDIN_INVALID);
    }

    errors
}
