use anyhow::{bail, Context};
use clap::Subcommand;
use crafters_config::Config;
use crafters_email_contracts::{Email, EmailSendError, EmailService};
use crafters_models::email_address::RecipientList;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        /// Comma separated list of recipients
        recipients: String,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipients } => test(config, &recipients).await,
        }
    }
}

async fn test(config: Config, recipients: &str) -> anyhow::Result<()> {
    let recipients = RecipientList::parse(recipients);
    if recipients.is_empty() {
        bail!("No recipients given");
    }

    let Some(email_service) = email::connect(&config.email)? else {
        bail!("No email transport is configured");
    };

    let result = email_service
        .send(Email {
            from: config.email.from,
            recipients,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
            attachment: None,
        })
        .await;

    match result {
        Ok(()) => Ok(()),
        Err(EmailSendError::Rejected) => bail!("The email transport refused the test email"),
        Err(EmailSendError::Other(err)) => Err(err).context("Failed to send test email"),
    }
}
