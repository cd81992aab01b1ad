//! Request body extractor accepting JSON and url-encoded forms.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use serde::de::DeserializeOwned;
use sceneboard_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// A validated request body.
///
/// `application/x-www-form-urlencoded` bodies are read as forms, anything
/// else as JSON. Malformed bodies become [`AppError::BadRequest`]; bodies
/// that parse but fail validation become [`CoreError::Validation`].
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(req.headers()) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            serde_urlencoded::from_bytes::<T>(&bytes).map_err(|e| {
                AppError::BadRequest(format!("Failed to deserialize form body: {e}"))
            })?
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            value
        };

        value
            .validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;

        Ok(Payload(value))
    }
}

/// Whether the body is declared as `application/x-www-form-urlencoded`.
///
/// Media types are case-insensitive and may carry parameters.
fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .is_some_and(|mime| {
            mime.essence_str()
                .eq_ignore_ascii_case(mime::APPLICATION_WWW_FORM_URLENCODED.essence_str())
        })
}
