use std::sync::Arc;

use axum::{
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::ContactService;
use tracing::info;

use crate::{
    errors,
    extractors::JsonOrForm,
    models::contact::{ContactEndpointInfo, RawContactPayload, SubmitAccepted, SubmitRejected},
    validation,
};

pub const VALIDATION_FAILED: &str = "Dados inválidos";
pub const SUBMIT_OK: &str = "Mensagem enviada com sucesso! Retornaremos em breve.";

pub struct ContactRouterState<Contact> {
    service: Arc<Contact>,
    development: bool,
}

impl<Contact> Clone for ContactRouterState<Contact> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            development: self.development,
        }
    }
}

pub fn router(service: Arc<impl ContactService>, development: bool) -> Router<()> {
    Router::new()
        .route("/contact", routing::get(endpoint_info).post(submit))
        .with_state(ContactRouterState {
            service,
            development,
        })
}

async fn endpoint_info() -> Json<ContactEndpointInfo> {
    Json(ContactEndpointInfo::describe())
}

async fn submit(
    State(state): State<ContactRouterState<impl ContactService>>,
    request: Request,
) -> Response {
    let payload = match JsonOrForm::<RawContactPayload>::from_request(request, &()).await {
        Ok(JsonOrForm(payload)) => payload,
        Err((status, message)) => {
            return errors::body_rejection(state.development, status, message);
        }
    };

    let submission = match validation::validate(payload) {
        Ok(submission) => submission,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitRejected {
                    success: false,
                    message: VALIDATION_FAILED,
                    errors,
                }),
            )
                .into_response();
        }
    };

    // Sender identity only; the message body never goes to the log.
    info!(
        name = %submission.name.as_str(),
        email = %submission.email,
        "new contact form submission"
    );

    match state.service.send_message(submission).await {
        Ok(message_id) => Json(SubmitAccepted {
            success: true,
            message: SUBMIT_OK,
            message_id,
        })
        .into_response(),
        Err(err) => errors::internal_server_error(state.development, &err.into()),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use pretty_assertions::assert_eq;
    use relay_core_contact_contracts::MockContactService;
    use relay_email_contracts::MessageId;
    use relay_models::contact::ContactSubmission;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "João Silva".to_owned().try_into().unwrap(),
            email: "joao@exemplo.com".parse().unwrap(),
            message: "Olá! Gostaria de saber mais sobre seus serviços."
                .to_owned()
                .try_into()
                .unwrap(),
        }
    }

    fn json_request(payload: Value) -> Request<Body> {
        Request::post("/contact")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_is_relayed() {
        let service = MockContactService::new()
            .with_send_message(submission(), MessageId("<42@exemplo.com>".into()));
        let router = router(Arc::new(service), false);

        let response = router
            .oneshot(json_request(json!({
                "name": "João Silva",
                "email": "Joao@Exemplo.com",
                "message": "Olá! Gostaria de saber mais sobre seus serviços.",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], SUBMIT_OK);
        assert_eq!(body["messageId"], "<42@exemplo.com>");
    }

    #[tokio::test]
    async fn form_encoded_submissions_are_accepted() {
        let service = MockContactService::new()
            .with_send_message(submission(), MessageId("<42@exemplo.com>".into()));
        let router = router(Arc::new(service), false);

        let body = "name=Jo%C3%A3o%20Silva&email=joao%40exemplo.com\
            &message=Ol%C3%A1!%20Gostaria%20de%20saber%20mais%20sobre%20seus%20servi%C3%A7os.";
        let response = router
            .oneshot(
                Request::post("/contact")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_payload_reports_field_errors() {
        let router = router(Arc::new(MockContactService::new()), false);

        let response = router
            .oneshot(json_request(json!({
                "name": "J",
                "email": "not-an-email",
                "message": "short",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], VALIDATION_FAILED);
        let fields = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(fields, ["name", "email", "message"]);
    }

    #[tokio::test]
    async fn missing_body_reports_all_fields_missing() {
        let router = router(Arc::new(MockContactService::new()), false);

        let response = router
            .oneshot(Request::post("/contact").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_redacted_in_production() {
        let router = router(Arc::new(MockContactService::new()), false);

        let response = router
            .oneshot(
                Request::post("/contact")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], errors::GENERIC_ERROR);
        assert_eq!(body.get("stack"), None);
    }

    #[tokio::test]
    async fn malformed_json_details_surface_in_development() {
        let router = router(Arc::new(MockContactService::new()), true);

        let response = router
            .oneshot(
                Request::post("/contact")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("JSON"));
    }

    #[tokio::test]
    async fn delivery_failures_are_opaque_in_production() {
        let service = MockContactService::new()
            .with_send_message_failing(submission(), "SMTP connection refused");
        let router = router(Arc::new(service), false);

        let response = router
            .oneshot(json_request(json!({
                "name": "João Silva",
                "email": "joao@exemplo.com",
                "message": "Olá! Gostaria de saber mais sobre seus serviços.",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], errors::GENERIC_ERROR);
        assert_eq!(body.get("stack"), None);
    }

    #[tokio::test]
    async fn delivery_failures_surface_in_development() {
        let service = MockContactService::new()
            .with_send_message_failing(submission(), "SMTP connection refused");
        let router = router(Arc::new(service), true);

        let response = router
            .oneshot(json_request(json!({
                "name": "João Silva",
                "email": "joao@exemplo.com",
                "message": "Olá! Gostaria de saber mais sobre seus serviços.",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("SMTP connection refused"));
    }

    #[tokio::test]
    async fn get_describes_the_endpoint() {
        let router = router(Arc::new(MockContactService::new()), false);

        let response = router
            .oneshot(Request::get("/contact").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["endpoint"], "/api/contact");
        assert_eq!(body["method"], "POST");
        assert_eq!(body["required_fields"]["name"], "string (2-100 caracteres)");
        assert_eq!(body["rate_limit"], "100 requests per 15 minutes");
    }
}
