use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

const EMAILS_ROUTE: &str = "/emails";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend endpoint: http://{host}:{port}{EMAILS_ROUTE}");
    info!("API key: {api_key:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(api_key: String) -> Router<()> {
    Router::new()
        .route(EMAILS_ROUTE, routing::post(send_email).head(|| async {}))
        .with_state(api_key.into())
}

#[derive(Deserialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    reply_to: Option<String>,
    #[serde(default)]
    attachments: Vec<SendEmailAttachment>,
}

#[derive(Deserialize)]
struct SendEmailAttachment {
    filename: String,
    content: String,
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: Uuid,
}

async fn send_email(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(email): Json<SendEmailRequest>,
) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| x.strip_prefix("Bearer "))
        .is_some_and(|x| *x == **state);
    if !authorized {
        warn!("rejecting email with invalid api key");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let id = Uuid::now_v7();
    info!(
        %id,
        from = %email.from,
        to = ?email.to,
        reply_to = ?email.reply_to,
        subject = %email.subject,
        "received email:\n{}",
        email.text
    );
    for attachment in &email.attachments {
        let filename = &attachment.filename;
        match STANDARD.decode(&attachment.content) {
            Ok(content) => info!(%id, %filename, size = content.len(), "attachment"),
            Err(err) => warn!(%id, %filename, "attachment is not valid base64: {err}"),
        }
    }

    Json(SendEmailResponse { id }).into_response()
}
