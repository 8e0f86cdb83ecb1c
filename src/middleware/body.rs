use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

/// Top-level fields of a JSON object body.
///
/// Never rejects: a body that is not declared as JSON, fails to parse, or is
/// not an object yields no fields, so handlers decide the outcome themselves.
#[derive(Debug, Clone, Default)]
pub struct JsonFields(pub Map<String, Value>);

impl JsonFields {
    /// The field when it is a JSON string.
    pub fn string(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// The field rendered as stored text: strings as-is, numbers in decimal,
    /// booleans as `1`/`0`. Null, arrays and objects give `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }
}

fn is_json_content_type(req: &Request) -> bool {
    let Some(ct) = req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = ct.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.rsplit_once('+').is_some_and(|(ty, suffix)| {
            ty.starts_with("application/") && suffix.eq_ignore_ascii_case("json")
        })
}

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(&req) {
            return Ok(Self::default());
        }
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_slice(&bytes)),
            Err(_) => Ok(Self::default()),
        }
    }
}
