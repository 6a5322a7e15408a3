//! Request body extractor for free-form record fields.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde_json::Value;

use clienthub_domain::fields::Fields;

use crate::error::{ApiError, BodyError};

/// The JSON object sent as request body.
///
/// Requests without a JSON content type, or with an empty body, yield an
/// empty object. Arrays are spread into index-keyed fields. Bare JSON
/// primitives are rejected.
#[derive(Debug, Default)]
pub struct JsonFields(pub Fields);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(BodyError::from)?;
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes).map_err(BodyError::from)? {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Array(items) => Ok(Self(indexed(items))),
            _ => Err(BodyError::NotAContainer.into()),
        }
    }
}

/// Spread an array into fields keyed by position: `["a","b"]` becomes
/// `{"0":"a","1":"b"}`.
fn indexed(items: Vec<Value>) -> Fields {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
