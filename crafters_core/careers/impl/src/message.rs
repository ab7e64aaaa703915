use crafters_email_contracts::{Email, EmailAttachment, MissingRecipientsError};
use crafters_models::careers::{CvFile, JobApplication};

use crate::CareersFeatureConfig;

pub fn compose(
    application: JobApplication,
    config: &CareersFeatureConfig,
) -> Result<Email, MissingRecipientsError> {
    if config.recipients.is_empty() {
        return Err(MissingRecipientsError("careers"));
    }

    let heard_from = application.heard_from_text();
    let JobApplication {
        full_name,
        phone,
        email,
        linkedin_url,
        job_title,
        locale,
        cv,
        ..
    } = application;

    let subject = format!(
        "New Job Application: {} - {full_name}",
        job_title.as_deref().unwrap_or("General")
    );
    let reply_to = email.parse().ok();

    let mut lines = vec![
        Some("=== Job Application ===".into()),
        Some(String::new()),
        Some(format!(
            "Position: {}",
            job_title.as_deref().unwrap_or("Not specified")
        )),
        Some(String::new()),
        Some("--- Applicant Details ---".into()),
        Some(format!("Full Name: {full_name}")),
        Some(format!("Email: {email}")),
        Some(format!("Phone: {phone}")),
        linkedin_url.map(|x| format!("LinkedIn: {x}")),
        heard_from.map(|x| format!("How they heard about us: {x}")),
        locale.map(|x| format!("Locale: {x}")),
    ];
    if let Some(cv) = &cv {
        lines.extend([
            Some(String::new()),
            Some("--- CV Attached ---".into()),
            Some(format!("Filename: {}", cv.filename)),
        ]);
    }
    let body = lines.into_iter().flatten().collect::<Vec<_>>().join("\n");

    Ok(Email {
        from: (*config.from).clone(),
        recipients: (*config.recipients).clone(),
        subject,
        body,
        reply_to,
        attachment: cv.map(
            |CvFile {
                 filename,
                 content_type,
                 content,
             }| EmailAttachment {
                filename,
                content_type,
                content,
            },
        ),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crafters_models::email_address::RecipientList;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(recipients: &str) -> CareersFeatureConfig {
        CareersFeatureConfig {
            from: Arc::new("AI Crafters <notifications@updates.aicrafters.com>".parse().unwrap()),
            recipients: Arc::new(RecipientList::parse(recipients)),
        }
    }

    fn application() -> JobApplication {
        JobApplication {
            full_name: "Dana Levi".into(),
            phone: "050-0000000".into(),
            email: "dana@example.com".into(),
            linkedin_url: Some("https://linkedin.com/in/dana".into()),
            heard_from: Some("other".into()),
            heard_from_other: Some("A friend".into()),
            job_title: Some("Automation Engineer".into()),
            locale: Some("he".into()),
            recaptcha_response: None,
            cv: Some(CvFile {
                filename: "Dana CV.pdf".into(),
                content_type: Some("application/pdf".into()),
                content: b"%PDF-1.7".to_vec(),
            }),
        }
    }

    #[test]
    fn compose_full_application() {
        let email = compose(application(), &config("careers@aicrafters.com")).unwrap();

        assert_eq!(
            email.subject,
            "New Job Application: Automation Engineer - Dana Levi"
        );
        assert_eq!(
            email.body,
            [
                "=== Job Application ===",
                "",
                "Position: Automation Engineer",
                "",
                "--- Applicant Details ---",
                "Full Name: Dana Levi",
                "Email: dana@example.com",
                "Phone: 050-0000000",
                "LinkedIn: https://linkedin.com/in/dana",
                "How they heard about us: Other: A friend",
                "Locale: he",
                "",
                "--- CV Attached ---",
                "Filename: Dana CV.pdf",
            ]
            .join("\n")
        );
        assert_eq!(email.reply_to.unwrap().as_str(), "dana@example.com");
        assert_eq!(
            email.attachment,
            Some(EmailAttachment {
                filename: "Dana CV.pdf".into(),
                content_type: Some("application/pdf".into()),
                content: b"%PDF-1.7".to_vec(),
            })
        );
    }

    #[test]
    fn compose_minimal_application() {
        let email = compose(
            JobApplication {
                linkedin_url: None,
                heard_from: None,
                heard_from_other: None,
                job_title: None,
                locale: None,
                ..application()
            },
            &config("careers@aicrafters.com"),
        )
        .unwrap();

        assert_eq!(email.subject, "New Job Application: General - Dana Levi");
        assert_eq!(
            email.body,
            [
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
                "Filename: Dana CV.pdf",
            ]
            .join("\n")
        );
    }

    #[test]
    fn heard_from_without_other_text() {
        let email = compose(
            JobApplication {
                heard_from: Some("linkedin".into()),
                heard_from_other: None,
                ..application()
            },
            &config("careers@aicrafters.com"),
        )
        .unwrap();

        assert!(email.body.contains("How they heard about us: linkedin\n"));
    }

    #[test]
    fn no_recipients() {
        compose(application(), &config(",,")).unwrap_err();
    }
}
