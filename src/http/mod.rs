//! HTTP transport adapters.
//!
//! [`PlisioHttp`] (async) and [`blocking::PlisioHttp`] (feature `blocking`)
//! perform the network call for a [`PlisioRequest`] and finish it with the
//! response. Both share the URL building and response routing below, so the
//! two modes behave identically apart from how they wait.

pub mod client;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::PlisioHttp;

use crate::domain::Decoded;
use crate::error::PlisioError;
use crate::network::API_KEY_PARAM;
use crate::request::{EncodedParams, HttpMethod, PlisioRequest};
use reqwest::Url;

/// A request resolved against a base URL, ready to dispatch.
pub(crate) struct Prepared {
    /// Full URL, including the query string for `GET`.
    pub url: Url,
    /// Form body for `POST`.
    pub form: Option<EncodedParams>,
}

/// Validate and normalize an API base URL.
pub(crate) fn parse_base_url(base_url: &str) -> Result<String, PlisioError> {
    let trimmed = base_url.trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| PlisioError::Config(format!("invalid base URL `{base_url}`: {e}")))?;
    Ok(trimmed.to_string())
}

fn invalid_url(e: impl std::fmt::Display) -> PlisioError {
    PlisioError::Config(format!("invalid request URL: {e}"))
}

/// Attach the API key and build the outgoing URL.
pub(crate) fn prepare(
    base_url: &str,
    api_key: &str,
    request: &mut PlisioRequest,
) -> Result<Prepared, PlisioError> {
    if request.is_processed() {
        return Err(PlisioError::RequestAlreadyProcessed);
    }
    request.insert_param(API_KEY_PARAM, api_key);
    let params = request.params().encode();
    let endpoint = format!("{}/{}", base_url, request.path());

    Ok(match request.method() {
        HttpMethod::Get => Prepared {
            url: Url::parse_with_params(&endpoint, &params).map_err(invalid_url)?,
            form: None,
        },
        HttpMethod::Post => Prepared {
            url: Url::parse(&endpoint).map_err(invalid_url)?,
            form: Some(params),
        },
    })
}

/// Finish with the response. A final URL that differs from the requested one
/// means redirects were followed; the body is then ignored.
pub(crate) fn complete(
    mut request: PlisioRequest,
    requested: &Url,
    final_url: &Url,
    status: u16,
    body: Option<&[u8]>,
) -> Result<Decoded, PlisioError> {
    if final_url != requested {
        tracing::debug!(path = request.path(), status, "Plisio request was redirected");
        request.finish_redirect(status, final_url.as_str())?;
        return request.into_result();
    }

    let body = body.unwrap_or_default();
    let body: serde_json::Value = serde_json::from_slice(body).map_err(PlisioError::InvalidBody)?;
    if !matches!(status, 200 | 201) {
        tracing::debug!(path = request.path(), status, "Plisio API returned an error status");
    }
    request.finish(status, body)?;
    request.into_result()
}
