use relay_email_contracts::MessageId;
use relay_models::contact::{SubmissionMessage, SubmissionName};
use serde::{Deserialize, Serialize};

/// Contact form payload exactly as submitted. Every field defaults to the
/// empty string so that missing fields fail validation instead of
/// deserialization; validation can then report all problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub field: &'static str,
    pub message: &'static str,
    /// The offending input, after trimming, echoed back to the client.
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitRejected {
    pub success: bool,
    pub message: &'static str,
    pub errors: Vec<ApiFieldError>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAccepted {
    pub success: bool,
    pub message: &'static str,
    pub message_id: MessageId,
}

/// Self-description served on `GET /api/contact`.
#[derive(Debug, Serialize)]
pub struct ContactEndpointInfo {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    pub required_fields: RequiredFields,
    pub rate_limit: &'static str,
    pub example: ExamplePayload,
}

#[derive(Debug, Serialize)]
pub struct RequiredFields {
    pub name: String,
    pub email: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ExamplePayload {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
}

impl ContactEndpointInfo {
    pub fn describe() -> Self {
        Self {
            endpoint: "/api/contact",
            method: "POST",
            description: "Endpoint para envio de mensagens do formulário de contato",
            required_fields: RequiredFields {
                name: format!(
                    "string ({}-{} caracteres)",
                    SubmissionName::MIN_CHARS,
                    SubmissionName::MAX_CHARS
                ),
                email: "string (email válido)",
                message: format!(
                    "string ({}-{} caracteres)",
                    SubmissionMessage::MIN_CHARS,
                    SubmissionMessage::MAX_CHARS
                ),
            },
            rate_limit: "100 requests per 15 minutes",
            example: ExamplePayload {
                name: "João Silva",
                email: "joao@exemplo.com",
                message: "Olá! Gostaria de saber mais sobre seus serviços.",
            },
        }
    }
}
