use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD, Engine};
use crafters_email_contracts::{Email, EmailSendError, EmailService};
use crafters_extern_impl::http::HttpClient;
use crafters_models::Sensitive;
use serde::Serialize;
use tracing::warn;
use url::Url;

const SEND_EMAIL_ENDPOINT: &str = "https://api.resend.com/emails";

/// Delivery through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendEmailService {
    client: HttpClient,
    endpoint: Arc<Url>,
    api_key: Sensitive<Arc<str>>,
}

impl ResendEmailService {
    pub fn new(
        api_key: &str,
        endpoint_override: Option<Url>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = HttpClient::new(timeout)?;

        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => SEND_EMAIL_ENDPOINT.parse()?,
        };

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: Sensitive(api_key.into()),
        })
    }
}

impl EmailService for ResendEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let request = SendEmailRequest::from(&email);

        let response = self
            .client
            .post((*self.endpoint).clone())
            .bearer_auth(&*self.api_key.0)
            .json(&request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            warn!(%status, body = %body, "resend refused the email");
            return Err(EmailSendError::Rejected);
        }

        Err(anyhow!("resend responded with {status}: {body}").into())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        // any response proves that the api is reachable
        self.client
            .head((*self.endpoint).clone())
            .send()
            .await
            .context("Failed to reach the resend api")?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<SendEmailAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct SendEmailAttachment<'a> {
    filename: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<&'a str>,
}

impl<'a> From<&'a Email> for SendEmailRequest<'a> {
    fn from(email: &'a Email) -> Self {
        Self {
            from: email.from.to_string(),
            to: email.recipients.iter().map(|x| x.as_str()).collect(),
            subject: &email.subject,
            text: &email.body,
            reply_to: email.reply_to.as_ref().map(|x| x.as_str()),
            attachments: email
                .attachment
                .iter()
                .map(|attachment| SendEmailAttachment {
                    filename: &attachment.filename,
                    content: STANDARD.encode(&attachment.content),
                    content_type: attachment.content_type.as_deref(),
                })
                .collect(),
        }
    }
}
