//! Unified SDK error types and the HTTP status classifier.

use crate::domain::ResultShape;
use thiserror::Error;

/// Reason reported when the API could not be reached or answered nonsense.
pub const UNKNOWN_REASON: &str = "An error has occurred when contacting to Plisio API";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum PlisioError {
    #[error("The request to Plisio API has not yet been processed")]
    RequestNotProcessed,

    #[error("The request to Plisio API has already been processed")]
    RequestAlreadyProcessed,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[cfg(feature = "http")]
    #[error("{reason}: {0}", reason = UNKNOWN_REASON)]
    Transport(#[from] reqwest::Error),

    #[error("{reason}: unreadable response body: {0}", reason = UNKNOWN_REASON)]
    InvalidBody(#[source] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlisioError {
    /// Taxonomy member for errors that came from talking to the API.
    ///
    /// Transport failures and unreadable bodies report [`ApiErrorKind::Unknown`].
    /// Protocol-state, decode and configuration errors are not API outcomes and
    /// return `None`.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            PlisioError::Api(e) => Some(e.kind),
            #[cfg(feature = "http")]
            PlisioError::Transport(_) => Some(ApiErrorKind::Unknown),
            PlisioError::InvalidBody(_) => Some(ApiErrorKind::Unknown),
            _ => None,
        }
    }

    /// The classified API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            PlisioError::Api(e) => Some(e),
            _ => None,
        }
    }
}

// ─── Status taxonomy ─────────────────────────────────────────────────────────

/// Closed set of API failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400, `INVALID_REQUEST`.
    BadRequest,
    /// 401, `AUTHENTICATION_FAILURE`.
    Unauthorized,
    /// 403, `NOT_AUTHORIZED`.
    Forbidden,
    /// 404, `RESOURCE_NOT_FOUND`.
    NotFound,
    /// 405, `METHOD_NOT_SUPPORTED`.
    MethodNotAllowed,
    /// 406, `MEDIA_TYPE_NOT_ACCEPTABLE`.
    NotAcceptable,
    /// 415, `UNSUPPORTED_MEDIA_TYPE`.
    UnsupportedMediaType,
    /// 422, `UNPROCESSABLE_ENTITY`.
    UnprocessableEntity,
    /// 429, `RATE_LIMIT_REACHED`.
    RateLimitReached,
    /// 500, `INTERNAL_SERVER_ERROR`.
    InternalServerError,
    /// 503, `SERVICE_UNAVAILABLE`.
    ServiceUnavailable,
    /// Any other status, or no response at all.
    Unknown,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            405 => ApiErrorKind::MethodNotAllowed,
            406 => ApiErrorKind::NotAcceptable,
            415 => ApiErrorKind::UnsupportedMediaType,
            422 => ApiErrorKind::UnprocessableEntity,
            429 => ApiErrorKind::RateLimitReached,
            500 => ApiErrorKind::InternalServerError,
            503 => ApiErrorKind::ServiceUnavailable,
            _ => ApiErrorKind::Unknown,
        }
    }

    /// The status code this kind is bound to.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiErrorKind::BadRequest => Some(400),
            ApiErrorKind::Unauthorized => Some(401),
            ApiErrorKind::Forbidden => Some(403),
            ApiErrorKind::NotFound => Some(404),
            ApiErrorKind::MethodNotAllowed => Some(405),
            ApiErrorKind::NotAcceptable => Some(406),
            ApiErrorKind::UnsupportedMediaType => Some(415),
            ApiErrorKind::UnprocessableEntity => Some(422),
            ApiErrorKind::RateLimitReached => Some(429),
            ApiErrorKind::InternalServerError => Some(500),
            ApiErrorKind::ServiceUnavailable => Some(503),
            ApiErrorKind::Unknown => None,
        }
    }

    /// Default human-readable reason, used when the body carries no message.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => {
                "Request is not well-formed, syntactically incorrect, or violates schema."
            }
            ApiErrorKind::Unauthorized => {
                "Authentication failed due to invalid authentication credentials."
            }
            ApiErrorKind::Forbidden => "Authorization failed due to insufficient permissions.",
            ApiErrorKind::NotFound => "The specified resource does not exist.",
            ApiErrorKind::MethodNotAllowed => {
                "The server does not implement the requested HTTP method."
            }
            ApiErrorKind::NotAcceptable => {
                "The server does not implement the media type that would be acceptable to the client."
            }
            ApiErrorKind::UnsupportedMediaType => {
                "The server does not support the request payload's media type."
            }
            ApiErrorKind::UnprocessableEntity => {
                "The API cannot complete the requested action, or the request action is \
                 semantically incorrect or fails business validation."
            }
            ApiErrorKind::RateLimitReached => "Too many requests. Blocked due to rate limiting.",
            ApiErrorKind::InternalServerError => "An internal server error has occurred.",
            ApiErrorKind::ServiceUnavailable => "Service Unavailable.",
            ApiErrorKind::Unknown => UNKNOWN_REASON,
        }
    }

    /// Whether the same request may succeed later. A hint for callers; the SDK
    /// never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiErrorKind::RateLimitReached
                | ApiErrorKind::InternalServerError
                | ApiErrorKind::ServiceUnavailable
        )
    }
}

/// A classified API failure: taxonomy member plus human message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    status: Option<u16>,
    message: String,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Status code of the response, `None` if there was no response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Map a status code and the body's `message` field to a taxonomy error.
///
/// Total: every status outside the known set, and a missing status, map to
/// [`ApiErrorKind::Unknown`]. The message replaces the kind's default reason
/// when present.
pub fn classify(status: Option<u16>, message: Option<&str>) -> ApiError {
    let kind = status.map_or(ApiErrorKind::Unknown, ApiErrorKind::from_status);
    ApiError {
        kind,
        status,
        message: message.unwrap_or(kind.reason()).to_string(),
    }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// A wire string that is not a member of its code table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {table} `{code}`")]
pub struct UnknownCode {
    pub table: &'static str,
    pub code: String,
}

/// Response payload could not be turned into the expected model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response has no `{0}` field")]
    MissingField(&'static str),

    #[error("{shape}: `{field}`: {source}")]
    UnknownVariant {
        shape: ResultShape,
        field: &'static str,
        #[source]
        source: UnknownCode,
    },

    #[error("{shape}: {message}")]
    InvalidField { shape: ResultShape, message: String },

    #[error("{shape}: expected a JSON object or array, found {found}")]
    NotAnObject { shape: ResultShape, found: &'static str },

    #[error("expected {expected} payload, decoded {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}
