//! Single-use request descriptor and its processing lifecycle.
//!
//! A [`PlisioRequest`] is built by an endpoint function, handed to a transport
//! and finished exactly once with the HTTP outcome. Finishing routes the body
//! either to the model decoder (status 200/201) or to the error classifier.
//!
//! ```text
//!   Unprocessed ──finish / finish_redirect──► Processed { status, outcome }
//! ```

pub mod params;

use crate::domain::{decode_shape, Decoded, ResultShape};
use crate::error::{classify, ApiError, DecodeError, PlisioError};
use serde_json::{json, Value};

pub use params::{EncodedParams, ParamValue, Params};

/// HTTP method a request is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    /// Parameters travel as a form body instead of the query string.
    Post,
}

/// Stored failure. Kept separate from [`PlisioError`] so it can be cloned out
/// on every read.
#[derive(Debug, Clone, PartialEq)]
enum Failure {
    Api(ApiError),
    Decode(DecodeError),
}

impl From<Failure> for PlisioError {
    fn from(f: Failure) -> Self {
        match f {
            Failure::Api(e) => PlisioError::Api(e),
            Failure::Decode(e) => PlisioError::Decode(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Unprocessed,
    Processed {
        status: u16,
        outcome: Result<Decoded, Failure>,
    },
}

/// A request to one Plisio endpoint.
///
/// Not `Clone`: each descriptor is sent at most once.
#[derive(Debug, PartialEq)]
pub struct PlisioRequest {
    path: String,
    method: HttpMethod,
    params: Params,
    shape: ResultShape,
    state: State,
}

impl PlisioRequest {
    pub fn new(path: impl Into<String>, params: Params, shape: ResultShape) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            params,
            shape,
            state: State::Unprocessed,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Path relative to the API base URL, e.g. `operations/fee/BTC`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn shape(&self) -> ResultShape {
        self.shape
    }

    pub(crate) fn insert_param(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.params.insert(name, value);
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.state, State::Processed { .. })
    }

    /// Record the HTTP status and JSON body and decode the outcome.
    ///
    /// Fails with [`PlisioError::RequestAlreadyProcessed`] on a second call,
    /// without touching the stored outcome.
    pub fn finish(&mut self, status: u16, body: Value) -> Result<&Decoded, PlisioError> {
        if self.is_processed() {
            return Err(PlisioError::RequestAlreadyProcessed);
        }
        let outcome = Self::process(self.shape, status, body);
        self.state = State::Processed { status, outcome };
        self.result()
    }

    /// Record a response reached through redirects. Only the final URL is
    /// kept, as an invoice with nothing but `invoice_url` set.
    pub fn finish_redirect(&mut self, status: u16, final_url: &str) -> Result<&Decoded, PlisioError> {
        let body = json!({
            "status": "redirect",
            "data": { "invoice_url": final_url },
        });
        self.finish(status, body)
    }

    /// HTTP status of the processed response.
    pub fn status(&self) -> Result<u16, PlisioError> {
        match &self.state {
            State::Unprocessed => Err(PlisioError::RequestNotProcessed),
            State::Processed { status, .. } => Ok(*status),
        }
    }

    /// The decoded payload, or the error the response was classified as.
    /// Repeated reads return the same outcome.
    pub fn result(&self) -> Result<&Decoded, PlisioError> {
        match &self.state {
            State::Unprocessed => Err(PlisioError::RequestNotProcessed),
            State::Processed { outcome, .. } => match outcome {
                Ok(decoded) => Ok(decoded),
                Err(failure) => Err(failure.clone().into()),
            },
        }
    }

    /// Consuming [`PlisioRequest::result`].
    pub fn into_result(self) -> Result<Decoded, PlisioError> {
        match self.state {
            State::Unprocessed => Err(PlisioError::RequestNotProcessed),
            State::Processed { outcome, .. } => outcome.map_err(PlisioError::from),
        }
    }

    fn process(shape: ResultShape, status: u16, body: Value) -> Result<Decoded, Failure> {
        if matches!(status, 200 | 201) {
            let data = match body {
                Value::Object(mut map) => map.remove("data"),
                _ => None,
            };
            let data = data.ok_or(Failure::Decode(DecodeError::MissingField("data")))?;
            return decode_shape(shape, data).map_err(Failure::Decode);
        }
        let message = body.get("message").and_then(Value::as_str);
        Err(Failure::Api(classify(Some(status), message)))
    }
}
