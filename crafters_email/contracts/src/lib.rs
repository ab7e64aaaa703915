use std::future::Future;

use crafters_models::email_address::{EmailAddress, EmailAddressWithName, RecipientList};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand `email` to the delivery provider. Returns once the provider has
    /// accepted or refused it.
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailSendError>> + Send;

    /// Check that the delivery provider is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A plain text notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: EmailAddressWithName,
    pub recipients: RecipientList,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<EmailAddress>,
    pub attachment: Option<EmailAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

/// Composition fails closed when the recipient list is empty.
#[derive(Debug, Error)]
#[error("No recipients are configured for {0} notifications.")]
pub struct MissingRecipientsError(pub &'static str);

#[derive(Debug, Error)]
pub enum EmailSendError {
    #[error("The delivery provider refused the email.")]
    Rejected,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, ok: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                let result = if ok { Ok(()) } else { Err(EmailSendError::Rejected) };
                Box::pin(std::future::ready(result))
            });
        self
    }

    pub fn with_send_error(mut self, email: Email) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(EmailSendError::Other(
                    anyhow::anyhow!("connection reset by peer"),
                ))))
            });
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            let result = if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("connection refused"))
            };
            Box::pin(std::future::ready(result))
        });
        self
    }
}
