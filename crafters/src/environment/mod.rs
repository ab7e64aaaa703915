//! Wiring of the service graph from a loaded [`Config`].

use std::sync::Arc;

use crafters_api_rest::RestServerConfig;
use crafters_config::Config;
use crafters_core_careers_impl::CareersFeatureConfig;
use crafters_core_contact_impl::ContactFeatureConfig;
use crafters_email_contracts::EmailService;
use crafters_extern_impl::recaptcha::RecaptchaApiServiceConfig;
use crafters_models::{email_address::RecipientList, Sensitive};
use crafters_shared_impl::captcha::{CaptchaServiceConfig, RecaptchaCaptchaServiceConfig};
use tracing::warn;

use self::types::{Captcha, Careers, Contact, Health, RecaptchaApi, RestServer};

pub mod types;

/// Build the REST server and everything it depends on. `email` is the
/// delivery transport, `None` if none is configured.
pub fn build<Email>(config: &Config, email: Option<Email>) -> anyhow::Result<RestServer<Email>>
where
    Email: EmailService + Clone,
{
    let captcha = captcha(config)?;

    let from = Arc::new(config.email.from.clone());
    let contact_recipients = recipients("contact", &config.contact.recipients);
    let careers_recipients = recipients("careers", &config.careers.recipients);

    let health = Health::<Email>::new(email.clone());
    let contact = Contact::<Email>::new(
        captcha.clone(),
        email.clone(),
        ContactFeatureConfig {
            from: Arc::clone(&from),
            recipients: contact_recipients,
        },
    );
    let careers = Careers::<Email>::new(
        captcha,
        email,
        CareersFeatureConfig {
            from,
            recipients: careers_recipients,
        },
    );

    let rest_server_config = RestServerConfig {
        host: config.http.host,
        port: config.http.port,
        cors_allowed_origins: config.http.cors_allowed_origins.clone(),
    };

    Ok(RestServer::<Email>::new(
        health,
        contact,
        careers,
        rest_server_config.into(),
    ))
}

fn captcha(config: &Config) -> anyhow::Result<Captcha> {
    let recaptcha_api_config = RecaptchaApiServiceConfig::new(
        config.recaptcha.siteverify_endpoint_override.clone(),
        *config.recaptcha.timeout,
    );
    let recaptcha_api = RecaptchaApi::new(recaptcha_api_config)?;

    let captcha_config = match config.recaptcha.effective_secret() {
        Some(secret) => CaptchaServiceConfig::Recaptcha(RecaptchaCaptchaServiceConfig {
            secret: Sensitive(secret.into()),
        }),
        None => {
            if config.recaptcha.enable {
                warn!(
                    "recaptcha is enabled but no secret is configured, submissions are not verified"
                );
            }
            CaptchaServiceConfig::Disabled
        }
    };

    Ok(Captcha::new(recaptcha_api, captcha_config))
}

fn recipients(form: &str, raw: &str) -> Arc<RecipientList> {
    let recipients = RecipientList::parse(raw);
    if recipients.is_empty() {
        warn!(form, "no recipients are configured, submissions will be answered with 503");
    }
    recipients.into()
}
