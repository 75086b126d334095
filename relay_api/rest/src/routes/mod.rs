use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod contact;
pub mod health;

#[derive(Serialize)]
struct NotFoundBody {
    error: &'static str,
    path: String,
    method: String,
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Endpoint não encontrado",
            path: uri.path().to_owned(),
            method: method.to_string(),
        }),
    )
        .into_response()
}
