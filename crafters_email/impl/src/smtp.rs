use std::time::Duration;

use anyhow::anyhow;
use crafters_email_contracts::{Email, EmailAttachment, EmailSendError, EmailService};
use crafters_utils::Apply;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    pub fn new(url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .timeout(Some(timeout))
            .build();

        Ok(Self { transport })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(anyhow::Error::from)?;

        response
            .is_positive()
            .then_some(())
            .ok_or(EmailSendError::Rejected)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(email: Email) -> anyhow::Result<Message> {
    let builder = email
        .recipients
        .iter()
        .try_fold(
            Message::builder().from(email.from.0).subject(email.subject),
            |builder, recipient| anyhow::Ok(builder.to(recipient.parse::<Mailbox>()?)),
        )?
        .apply_map(email.reply_to, |builder, reply_to| {
            builder.reply_to(Mailbox::new(None, reply_to.0))
        });

    let message = match email.attachment {
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?,
        Some(attachment) => builder.multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(email.body))
                .singlepart(attachment_part(attachment)?),
        )?,
    };

    Ok(message)
}

fn attachment_part(attachment: EmailAttachment) -> anyhow::Result<SinglePart> {
    let content_type = match attachment
        .content_type
        .as_deref()
        .and_then(|x| ContentType::parse(x).ok())
    {
        Some(content_type) => content_type,
        None => ContentType::parse(FALLBACK_CONTENT_TYPE)?,
    };

    Ok(Attachment::new(attachment.filename).body(attachment.content, content_type))
}
