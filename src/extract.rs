use anyhow::anyhow;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use favorites_core::AppError;

/// JSON body extractor whose rejections are [`AppError`]s.
///
/// An empty body deserializes as `T::default()`, so a missing field is
/// reported by the DTO's own checks. Any other body that is not a JSON
/// object of the right shape is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid request body")))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
            AppError::bad_request(anyhow!("Invalid request body"))
        })?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        book_id: Option<i64>,
    }

    async fn extract(body: &'static str) -> Result<Payload, AppError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();

        JsonBody::<Payload>::from_request(req, &())
            .await
            .map(|JsonBody(payload)| payload)
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        assert_eq!(extract("").await.unwrap(), Payload::default());
        assert_eq!(extract("  \n").await.unwrap(), Payload::default());
    }

    #[tokio::test]
    async fn test_object_without_content_type_is_parsed() {
        let payload = extract(r#"{"bookId":7}"#).await.unwrap();
        assert_eq!(payload.book_id, Some(7));
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_bad_request() {
        for body in [r#""7""#, "bookId=7", "{", "true", "42"] {
            let err = extract(body).await.unwrap_err();
            assert_eq!(err.status.as_u16(), 400, "{}", body);
            assert_eq!(err.error.to_string(), "Invalid request body");
        }
    }
}
