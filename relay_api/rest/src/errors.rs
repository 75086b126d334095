use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

pub const GENERIC_ERROR: &str = "Erro interno do servidor";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Centralized 500 shaping. The full error chain always goes to the log;
/// the response only exposes it in development mode.
pub fn internal_server_error(development: bool, err: &anyhow::Error) -> Response {
    error!("internal server error: {err:#}");
    let body = ErrorBody {
        error: if development {
            format!("{err:#}")
        } else {
            GENERIC_ERROR.into()
        },
        stack: development.then(|| format!("{err:?}")),
        timestamp: Utc::now(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Body decoder failures (malformed JSON, oversized payloads). The
/// decoder's status is kept; its message is subject to the same redaction
/// as any other internal detail.
pub fn body_rejection(development: bool, status: StatusCode, message: String) -> Response {
    let body = ErrorBody {
        error: if development {
            message
        } else {
            GENERIC_ERROR.into()
        },
        stack: None,
        timestamp: Utc::now(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn production_responses_never_leak_the_error() {
        let err = anyhow::anyhow!("connection refused").context("SMTP handshake failed");
        let response = internal_server_error(false, &err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], GENERIC_ERROR);
        assert_eq!(body.get("stack"), None);
    }

    #[tokio::test]
    async fn development_responses_carry_the_error_chain() {
        let err = anyhow::anyhow!("connection refused").context("SMTP handshake failed");
        let response = internal_server_error(true, &err);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("SMTP handshake failed"));
        assert!(error.contains("connection refused"));
        assert!(body["stack"].is_string());
    }
}
