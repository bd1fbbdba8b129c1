//! Turns a received response (status, content type, body) into a decoded value or an [`Error`].

use crate::api::error::{ApiErrorPayload, UNKNOWN_ERROR_REASON};
use crate::api::{html, Error};
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Error body of a rejected request, resolved once from its content type.
#[derive(Debug, PartialEq)]
enum ErrorBody {
    Json(Map<String, Value>),
    Html(BTreeMap<String, String>),
    Unrecognized,
}

fn media_type(content_type: Option<&str>) -> Option<String> {
    content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
}

fn json_error(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn html_error(body: &[u8]) -> Option<BTreeMap<String, String>> {
    Some(html::read_error(body)).filter(|values| !values.is_empty())
}

impl ErrorBody {
    /// `None` if the content type is absent or never carries a reason.
    fn parse(content_type: Option<&str>, body: &[u8]) -> Option<ErrorBody> {
        let parsed = match media_type(content_type).as_deref() {
            Some("application/json") => json_error(body).map(ErrorBody::Json),
            Some("text/html") => html_error(body).map(ErrorBody::Html),
            _ => return None,
        };
        Some(parsed.unwrap_or(ErrorBody::Unrecognized))
    }

    fn into_payload(self) -> ApiErrorPayload {
        match self {
            ErrorBody::Json(map) => {
                if let Some(Value::String(message)) = map.get("String") {
                    return ApiErrorPayload::Message(message.clone());
                }
                let fields: BTreeMap<String, String> = map
                    .into_iter()
                    .map(|(key, value)| match value {
                        Value::String(s) => (key, s),
                        other => (key, other.to_string()),
                    })
                    .collect();
                if fields.is_empty() {
                    ApiErrorPayload::Message(String::from(UNKNOWN_ERROR_REASON))
                } else {
                    ApiErrorPayload::Fields(fields)
                }
            }
            ErrorBody::Html(values) if values.contains_key(html::MESSAGE) => {
                ApiErrorPayload::Fields(values)
            }
            ErrorBody::Html(_) | ErrorBody::Unrecognized => {
                ApiErrorPayload::Message(String::from(UNKNOWN_ERROR_REASON))
            }
        }
    }
}

/// Classify a non-200 response.
///
/// A 403 is an API error if it comes as JSON or HTML. Without a content type, or with any other,
/// it is reported by its status line like any other status.
pub fn error(status: StatusCode, content_type: Option<&str>, body: &[u8]) -> Error {
    match status {
        StatusCode::FORBIDDEN => match ErrorBody::parse(content_type, body) {
            Some(parsed) => Error::Api(parsed.into_payload()),
            None => Error::http(status, body),
        },
        _ => Error::http(status, body),
    }
}

/// Decode `body` into `T` if `status` is 200, classify the failure otherwise.
pub fn decode<T: DeserializeOwned>(
    status: StatusCode,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<T, Error> {
    if status != StatusCode::OK {
        return Err(error(status, content_type, body));
    }

    serde_json::from_slice(body).map_err(|source| Error::Parse {
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })
}
