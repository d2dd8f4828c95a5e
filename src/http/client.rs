//! Async HTTP transport: `PlisioHttp`.

use super::{complete, parse_base_url, prepare};
use crate::domain::Decoded;
use crate::error::PlisioError;
use crate::request::PlisioRequest;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// Low-level async transport for the Plisio REST API.
#[derive(Clone)]
pub struct PlisioHttp {
    base_url: String,
    /// Secret key appended to every request. NEVER logged.
    api_key: String,
    client: Client,
}

impl PlisioHttp {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, PlisioError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| PlisioError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch `request` once and decode the response.
    pub async fn send(&self, mut request: PlisioRequest) -> Result<Decoded, PlisioError> {
        let prepared = prepare(&self.base_url, &self.api_key, &mut request)?;
        tracing::debug!(
            method = ?request.method(),
            path = request.path(),
            "Sending Plisio request"
        );

        let mut builder = self
            .client
            .request(method(&request), prepared.url.clone());
        if let Some(form) = &prepared.form {
            builder = builder.form(form);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let final_url = resp.url().clone();
        if final_url != prepared.url {
            return complete(request, &prepared.url, &final_url, status, None);
        }
        let body = resp.bytes().await?;
        complete(request, &prepared.url, &final_url, status, Some(&body[..]))
    }
}

pub(crate) fn method(request: &PlisioRequest) -> reqwest::Method {
    match request.method() {
        crate::request::HttpMethod::Get => reqwest::Method::GET,
        crate::request::HttpMethod::Post => reqwest::Method::POST,
    }
}

impl fmt::Debug for PlisioHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlisioHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
