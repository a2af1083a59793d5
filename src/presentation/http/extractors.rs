use super::errors::AppError;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

const REPLACEMENT_ESCAPE: &[u8] = b"\\uFFFD";

/// JSON body extractor whose rejections are reported through [`AppError`].
///
/// A body without a `Content-Type` header is read as JSON; only an explicit
/// non-JSON media type is refused. The body is parsed into a
/// [`serde_json::Value`] first, so syntax errors (400) and shape errors (422)
/// stay distinct and a repeated key keeps its last value.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            if !is_json_content_type(content_type) {
                return Err(AppError::UnsupportedMediaType(
                    "Expected request with `Content-Type: application/json`".into(),
                ));
            }
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let value: serde_json::Value = serde_json::from_slice(&replace_lone_surrogates(&body))
            .map_err(|e| {
                AppError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
            })?;

        serde_json::from_value(value).map(AppJson).map_err(|e| {
            AppError::ValidationError(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            ))
        })
    }
}

impl<T> IntoResponse for AppJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Rewrites `\uXXXX` escapes naming an unpaired UTF-16 surrogate to U+FFFD.
///
/// serde_json refuses such escapes outright, but they are legal JSON text.
fn replace_lone_surrogates(body: &[u8]) -> Cow<'_, [u8]> {
    if !body.windows(2).any(|w| w == b"\\u") {
        return Cow::Borrowed(body);
    }

    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        if body[i] != b'\\' {
            out.push(body[i]);
            i += 1;
            continue;
        }

        match unicode_escape(body, i) {
            Some(0xD800..=0xDBFF) => match unicode_escape(body, i + 6) {
                Some(0xDC00..=0xDFFF) => {
                    out.extend_from_slice(&body[i..i + 12]);
                    i += 12;
                }
                _ => {
                    out.extend_from_slice(REPLACEMENT_ESCAPE);
                    i += 6;
                }
            },
            Some(0xDC00..=0xDFFF) => {
                out.extend_from_slice(REPLACEMENT_ESCAPE);
                i += 6;
            }
            Some(_) => {
                out.extend_from_slice(&body[i..i + 6]);
                i += 6;
            }
            None => {
                // Any other escape: copy it whole so `\\u` is never misread.
                let end = (i + 2).min(body.len());
                out.extend_from_slice(&body[i..end]);
                i = end;
            }
        }
    }
    Cow::Owned(out)
}

fn unicode_escape(body: &[u8], at: usize) -> Option<u16> {
    let escape = body.get(at..at + 6)?;
    if escape[0] != b'\\' || escape[1] != b'u' {
        return None;
    }
    let hex = std::str::from_utf8(&escape[2..]).ok()?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}
