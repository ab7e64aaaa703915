use anyhow::Context;
use crafters_config::EmailConfig;
use crafters_email_impl::{EmailServiceImpl, ResendEmailService, SmtpEmailService};

/// Set up the configured delivery transport. SMTP takes precedence over
/// Resend. Returns `None` if neither is configured.
pub fn connect(config: &EmailConfig) -> anyhow::Result<Option<EmailServiceImpl>> {
    if let Some(smtp_url) = non_blank(config.smtp_url.as_deref()) {
        return SmtpEmailService::new(smtp_url, *config.timeout)
            .map(|smtp| Some(EmailServiceImpl::Smtp(smtp)))
            .context("Failed to set up SMTP transport");
    }

    if let Some(api_key) = non_blank(config.resend_api_key.as_deref()) {
        return ResendEmailService::new(
            api_key,
            config.resend_endpoint_override.clone(),
            *config.timeout,
        )
        .map(|resend| Some(EmailServiceImpl::Resend(resend)))
        .context("Failed to set up Resend transport");
    }

    Ok(None)
}

/// Name of the transport `connect` would choose.
pub fn transport_name(config: &EmailConfig) -> Option<&'static str> {
    if non_blank(config.smtp_url.as_deref()).is_some() {
        Some("smtp")
    } else if non_blank(config.resend_api_key.as_deref()).is_some() {
        Some("resend")
    } else {
        None
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|x| !x.trim().is_empty())
}
