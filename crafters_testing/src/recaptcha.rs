use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, routing, Form, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

const SITEVERIFY_ROUTE: &str = "/recaptcha/api/siteverify";

/// Score reported for the plain `success` response.
const DEFAULT_SCORE: f64 = 0.9;

pub async fn start_server(host: IpAddr, port: u16, secret: String) -> anyhow::Result<()> {
    info!("Starting recaptcha testing server on {host}:{port}");
    info!("Recaptcha siteverify endpoint: http://{host}:{port}{SITEVERIFY_ROUTE}");
    info!("Secret: {secret:?}");
    info!(
        "Valid recaptcha responses are \"success\" (score {DEFAULT_SCORE}) and \
         \"success-SCORE\", where SCORE is a floating point number between 0 and 1"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(secret))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(secret: String) -> Router<()> {
    Router::new()
        .route(SITEVERIFY_ROUTE, routing::post(siteverify))
        .with_state(secret.into())
}

#[derive(Deserialize)]
struct SiteverifyRequest {
    secret: String,
    response: String,
}

#[derive(Serialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

async fn siteverify(
    state: State<Arc<str>>,
    Form(SiteverifyRequest { secret, response }): Form<SiteverifyRequest>,
) -> Json<SiteverifyResponse> {
    let (token, score) = match response.split_once('-') {
        Some((token, score)) => (token, score.parse::<f64>().ok()),
        None => (response.as_str(), Some(DEFAULT_SCORE)),
    };

    let success = *secret == **state && token == "success";
    let score = success
        .then_some(score)
        .flatten()
        .filter(|score| (0.0..=1.0).contains(score));

    Json(SiteverifyResponse { success, score })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    use super::*;

    async fn verify(secret: &str, response: &str) -> serde_json::Value {
        let response = router("test-secret".into())
            .oneshot(
                Request::post(SITEVERIFY_ROUTE)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(format!("secret={secret}&response={response}")))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn responses() {
        for (secret, response, expected) in [
            ("test-secret", "success", serde_json::json!({"success": true, "score": 0.9})),
            ("test-secret", "success-0.3", serde_json::json!({"success": true, "score": 0.3})),
            ("test-secret", "success-7", serde_json::json!({"success": true})),
            ("test-secret", "failure", serde_json::json!({"success": false})),
            ("wrong", "success", serde_json::json!({"success": false})),
        ] {
            assert_eq!(verify(secret, response).await, expected, "{secret} {response}");
        }
    }
}
