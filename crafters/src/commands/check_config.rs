use crafters_config::Config;
use crafters_models::email_address::RecipientList;

use crate::email;

/// Summarize what the loaded configuration will do at runtime.
pub fn summary(config: &Config) -> String {
    let transport = email::transport_name(&config.email).unwrap_or("none (submissions answer 503)");
    let verification = match (
        config.recaptcha.enable,
        config.recaptcha.effective_secret().is_some(),
    ) {
        (true, true) => "enabled",
        (true, false) => "disabled (no secret configured)",
        (false, _) => "disabled",
    };
    let contact = RecipientList::parse(&config.contact.recipients).len();
    let careers = RecipientList::parse(&config.careers.recipients).len();

    [
        ("listen", format!("{}:{}", config.http.host, config.http.port)),
        ("email transport", transport.into()),
        ("email from", config.email.from.to_string()),
        ("recaptcha", verification.into()),
        ("contact recipients", contact.to_string()),
        ("careers recipients", careers.to_string()),
    ]
    .into_iter()
    .map(|(label, value)| format!("{:<20}{value}", format!("{label}:")))
    .collect::<Vec<_>>()
    .join("\n")
}
