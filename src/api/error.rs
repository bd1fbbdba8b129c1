use crate::api::redact::redact;
use http::StatusCode;
use std::collections::BTreeMap;
use std::fmt;

/// Reported when a rejected request carries no readable reason.
pub const UNKNOWN_ERROR_REASON: &str = "could not return error reason";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-200 response that is not an API-level rejection.
    #[error("{status_text}")]
    Http {
        status: StatusCode,
        status_text: String,
        body: String,
    },
    /// 200 response whose body does not decode into the expected structure.
    #[error("json parse error: {source}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    /// The server understood the request and refused it.
    #[error("api error: {0}")]
    Api(ApiErrorPayload),
    /// Network-level failure. The message has the API key redacted.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
    /// Resolving the active site failed.
    #[error("init: {0}")]
    Init(#[source] Box<Error>),
    #[error("no sites found")]
    NoSites,
}

/// Fieldless classification of [`Error`], for kind-level comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Http,
    Parse,
    Api,
    Transport,
    Config,
    Init,
    NoSites,
}

/// Reason attached to an API error: either a plain message, or the fields the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorPayload {
    Message(String),
    Fields(BTreeMap<String, String>),
}

impl fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorPayload::Message(message) => f.write_str(message),
            ApiErrorPayload::Fields(fields) => match fields.get("message") {
                Some(message) => f.write_str(message),
                None => {
                    let fields: Vec<String> =
                        fields.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                    f.write_str(&fields.join(", "))
                }
            },
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http { .. } => ErrorKind::Http,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Api(_) => ErrorKind::Api,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Config(_) => ErrorKind::Config,
            Error::Init(_) => ErrorKind::Init,
            Error::NoSites => ErrorKind::NoSites,
        }
    }

    /// True if this error, or any error it wraps, is of `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        match self {
            Error::Init(inner) if kind != ErrorKind::Init => inner.is(kind),
            _ => self.kind() == kind,
        }
    }

    /// Raw response body, for errors raised after a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Http { body, .. } | Error::Parse { body, .. } => Some(body),
            Error::Init(inner) => inner.body(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status(),
            Error::Init(inner) => inner.status(),
            _ => None,
        }
    }

    pub(crate) fn http(status: StatusCode, body: &[u8]) -> Self {
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_str(), reason),
            None => status.as_str().to_string(),
        };
        Error::Http {
            status,
            status_text,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    pub(crate) fn transport(error: reqwest::Error) -> Self {
        Error::Transport {
            message: redact(&error.to_string()).into_owned(),
            source: error.without_url(),
        }
    }

    pub(crate) fn init(error: Error) -> Self {
        Error::Init(Box::new(error))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    fn parse_error() -> Error {
        let source = serde_json::from_str::<serde_json::Value>("{ \"a\": ").unwrap_err();
        Error::Parse {
            body: String::from("{ \"a\": "),
            source,
        }
    }

    #[test]
    fn http_error_message_is_status_text() {
        let error = Error::http(StatusCode::INTERNAL_SERVER_ERROR, b"oops");
        assert_eq!("500 Internal Server Error", error.to_string());
        assert_eq!(Some("oops"), error.body());
        assert_eq!(Some(StatusCode::INTERNAL_SERVER_ERROR), error.status());
    }

    #[test]
    fn kind_ignores_field_values() {
        let forbidden = Error::http(StatusCode::FORBIDDEN, b"");
        let not_found = Error::http(StatusCode::NOT_FOUND, b"missing");
        assert_eq!(forbidden.kind(), not_found.kind());
        assert_ne!(forbidden.kind(), parse_error().kind());
        assert!(!forbidden.is(ErrorKind::Api));
    }

    #[test]
    fn parse_error_unwraps_to_json_error() {
        let error = parse_error();
        assert!(error.to_string().starts_with("json parse error: "));
        assert_eq!(Some("{ \"a\": "), error.body());

        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>())
            .unwrap();
        assert!(source.is_eof());
        assert_eq!(1, source.line());
    }

    #[test]
    fn api_error_message() {
        let error = Error::Api(ApiErrorPayload::Message(String::from("invalid token")));
        assert_eq!("api error: invalid token", error.to_string());
        assert!(error.is(ErrorKind::Api));
    }

    #[test]
    fn api_error_fields() {
        let mut fields = BTreeMap::new();
        fields.insert(String::from("description"), String::from("refused"));
        fields.insert(String::from("code"), String::from("7"));
        let error = Error::Api(ApiErrorPayload::Fields(fields.clone()));
        assert_eq!("api error: code: 7, description: refused", error.to_string());

        fields.insert(String::from("message"), String::from("too wide"));
        let error = Error::Api(ApiErrorPayload::Fields(fields));
        assert_eq!("api error: too wide", error.to_string());
    }

    #[test]
    fn init_wraps_inner_error() {
        let error = Error::init(Error::NoSites);
        assert_eq!("init: no sites found", error.to_string());
        assert_eq!(ErrorKind::Init, error.kind());
        assert!(error.is(ErrorKind::Init));
        assert!(error.is(ErrorKind::NoSites));
        assert_eq!("no sites found", error.source().unwrap().to_string());
    }
}
