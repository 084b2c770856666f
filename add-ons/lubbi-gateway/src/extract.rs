//! Request body extractor matching what the site scripts and the robot firmware send.
//!
//! A request without a JSON content type, or with an empty body, reads as `{}` so the
//! handler's own validation decides (chat answers 400, sensor intake still stamps
//! `lastUpdate`). A JSON body that fails to parse or has wrong field types is a 500.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

pub(crate) struct JsonBody<T>(pub(crate) T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        let body: &[u8] = if json && !bytes.iter().all(u8::is_ascii_whitespace) {
            &bytes
        } else {
            b"{}"
        };
        Ok(JsonBody(serde_json::from_slice(body)?))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
