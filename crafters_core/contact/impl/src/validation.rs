use crafters_models::{
    contact::ContactSubmission,
    validation::{is_blank, is_valid_email, ValidationErrors},
};

const MISSING_FIELD: &str = "This field is required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Collect every field violation of `submission`.
pub fn validate(submission: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&submission.first_name) {
        errors.insert("firstName", MISSING_FIELD);
    }
    if is_blank(&submission.last_name) {
        errors.insert("lastName", MISSING_FIELD);
    }
    if is_blank(&submission.email) {
        errors.insert("email", MISSING_FIELD);
    } else if !is_valid_email(submission.email.trim()) {
        errors.insert("email", INVALID_EMAIL);
    }
    if is_blank(&submission.message) {
        errors.insert("message", MISSING_FIELD);
    }

    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jo".into(),
            last_name: "Acme".into(),
            email: "jo@acme.com".into(),
            message: "Hi".into(),
            locale: None,
            recaptcha_response: None,
        }
    }

    #[test]
    fn valid() {
        assert!(validate(&submission()).is_empty());
    }

    #[test]
    fn all_missing() {
        let errors = validate(&ContactSubmission {
            first_name: "".into(),
            last_name: "  ".into(),
            email: "".into(),
            message: "\n".into(),
            ..submission()
        });

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            ["email", "firstName", "lastName", "message"]
        );
        assert!(errors.fields().all(|x| errors.get(x) == Some(MISSING_FIELD)));
    }

    #[test]
    fn single_missing_field() {
        let errors = validate(&ContactSubmission {
            message: "".into(),
            ..submission()
        });

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("message"), Some(MISSING_FIELD));
    }

    #[test]
    fn invalid_email() {
        for email in ["not-an-email", "jo@acme", "jo@@acme.com", "jo @acme.com"] {
            let errors = validate(&ContactSubmission {
                email: email.into(),
                ..submission()
            });
            assert_eq!(errors.get("email"), Some(INVALID_EMAIL), "{email:?}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn missing_and_invalid_email_are_distinct() {
        let missing = validate(&ContactSubmission {
            email: "".into(),
            ..submission()
        });
        let invalid = validate(&ContactSubmission {
            email: "nope".into(),
            ..submission()
        });

        assert_ne!(missing.get("email"), invalid.get("email"));
    }
}
