use crafters_email_contracts::{Email, MissingRecipientsError};
use crafters_models::contact::ContactSubmission;

use crate::ContactFeatureConfig;

pub fn compose(
    submission: ContactSubmission,
    config: &ContactFeatureConfig,
) -> Result<Email, MissingRecipientsError> {
    if config.recipients.is_empty() {
        return Err(MissingRecipientsError("contact"));
    }

    let ContactSubmission {
        first_name,
        last_name,
        email,
        message,
        locale,
        ..
    } = submission;

    let subject = format!("New contact request from {first_name}");
    let reply_to = email.parse().ok();

    let body = [
        Some(format!("Name: {first_name}")),
        Some(format!("Company: {last_name}")),
        Some(format!("Email: {email}")),
        locale.map(|locale| format!("Locale: {locale}")),
        Some("Message:".into()),
        Some(message),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n");

    Ok(Email {
        from: (*config.from).clone(),
        recipients: (*config.recipients).clone(),
        subject,
        body,
        reply_to,
        attachment: None,
    })
}
