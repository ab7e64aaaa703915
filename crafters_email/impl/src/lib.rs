use crafters_email_contracts::{Email, EmailSendError, EmailService};

pub use self::{resend::ResendEmailService, smtp::SmtpEmailService};

pub mod resend;
pub mod smtp;

/// The configured delivery transport.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Smtp(SmtpEmailService),
    Resend(ResendEmailService),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        match self {
            Self::Smtp(smtp) => smtp.send(email).await,
            Self::Resend(resend) => resend.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Smtp(smtp) => smtp.ping().await,
            Self::Resend(resend) => resend.ping().await,
        }
    }
}
