use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

/// Accept the same payload as JSON or as a classic url-encoded form post.
/// Requests with any other (or no) content type yield the default value,
/// so field validation reports the missing fields instead of the transport
/// layer rejecting the request outright.
///
/// Decoder failures are handed back as status plus raw message; the route
/// decides how much of the message the client gets to see.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + 'static,
{
    type Rejection = (StatusCode, String);

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(request, state)
                .await
                .map_err(|rejection| (rejection.status(), rejection.body_text()))?;
            Ok(Self(payload))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(request, state)
                .await
                .map_err(|rejection| (rejection.status(), rejection.body_text()))?;
            Ok(Self(payload))
        } else {
            Ok(Self(T::default()))
        }
    }
}
