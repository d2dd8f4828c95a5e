//! High-level async client: `PlisioClient`.
//!
//! One method per Plisio capability. Each builds a request with [`crate::api`],
//! sends it through [`PlisioHttp`] and extracts the typed result.

use crate::api::{
    self, CommissionRequest, FeeRequest, InvoiceRequest, OperationsQuery, WithdrawRequest,
};
use crate::domain::{
    Balance, Commission, Currency, Fee, FeePlan, Invoice, Operation, OperationList, Withdraw,
};
use crate::error::PlisioError;
use crate::http::PlisioHttp;
use crate::network::{API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
use crate::request::PlisioRequest;
use crate::shared::{CryptoCurrency, FiatCurrency};
use std::fmt;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the Plisio SDK.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PlisioClient {
    pub(crate) http: PlisioHttp,
}

impl PlisioClient {
    pub fn builder() -> PlisioClientBuilder {
        PlisioClientBuilder::default()
    }

    /// Client for the production API with default settings.
    pub fn new(api_key: &str) -> Result<Self, PlisioError> {
        Self::builder().api_key(api_key).build()
    }

    /// Send a prepared request and return the raw decoded payload.
    pub async fn send(&self, request: PlisioRequest) -> Result<crate::domain::Decoded, PlisioError> {
        self.http.send(request).await
    }

    /// `balances/{psys_cid}`: wallet balance of one cryptocurrency.
    pub async fn get_balance(&self, currency: CryptoCurrency) -> Result<Balance, PlisioError> {
        Ok(self.send(api::balance(currency)).await?.into_one()?)
    }

    /// `currencies[/{fiat}]`: supported cryptocurrencies, rated in `fiat` (USD by default).
    pub async fn get_currencies(
        &self,
        fiat: Option<FiatCurrency>,
    ) -> Result<Vec<Currency>, PlisioError> {
        Ok(self.send(api::currencies(fiat)).await?.into_many()?)
    }

    /// `invoices/new`: create an invoice.
    pub async fn create_invoice(&self, req: &InvoiceRequest) -> Result<Invoice, PlisioError> {
        Ok(self.send(api::invoice(req)).await?.into_one()?)
    }

    /// `operations/commission/{psys_cid}`: estimate fee and Plisio commission.
    pub async fn get_commission(
        &self,
        req: &CommissionRequest,
    ) -> Result<Commission, PlisioError> {
        Ok(self.send(api::commission(req)).await?.into_one()?)
    }

    /// `operations/withdraw`: send funds to one or more addresses.
    pub async fn withdraw(&self, req: &WithdrawRequest) -> Result<Withdraw, PlisioError> {
        Ok(self.send(api::withdraw(req)).await?.into_one()?)
    }

    /// `operations/fee/{psys_cid}`: estimate the network fee.
    pub async fn get_fee(&self, req: &FeeRequest) -> Result<Fee, PlisioError> {
        Ok(self.send(api::fee(req)).await?.into_one()?)
    }

    /// `operations/fee-plan/{psys_cid}`: available fee tiers.
    pub async fn get_fee_plan(&self, currency: CryptoCurrency) -> Result<FeePlan, PlisioError> {
        Ok(self.send(api::fee_plan(currency)).await?.into_one()?)
    }

    /// `operations`: one page of transaction history.
    pub async fn get_operations(
        &self,
        query: &OperationsQuery,
    ) -> Result<OperationList, PlisioError> {
        Ok(self.send(api::operations(query)).await?.into_one()?)
    }

    /// `operations/{id}`: a single operation.
    pub async fn get_operation(&self, id: &str) -> Result<Operation, PlisioError> {
        Ok(self.send(api::operation(id)).await?.into_one()?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PlisioClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl Default for PlisioClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for PlisioClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlisioClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PlisioClientBuilder {
    /// Builder seeded from `PLISIO_API_KEY` and, if set, `PLISIO_API_URL`.
    pub fn from_env() -> Result<Self, PlisioError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| PlisioError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::default().api_key(&api_key);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn checked_key(&self) -> Result<&str, PlisioError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(PlisioError::Config("API key is required".to_string())),
        }
    }

    pub fn build(self) -> Result<PlisioClient, PlisioError> {
        Ok(PlisioClient {
            http: PlisioHttp::new(&self.base_url, self.checked_key()?, self.timeout)?,
        })
    }

    /// Build a [`crate::blocking::PlisioClient`] with the same settings.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::PlisioClient, PlisioError> {
        Ok(crate::blocking::PlisioClient {
            http: crate::http::blocking::PlisioHttp::new(
                &self.base_url,
                self.checked_key()?,
                self.timeout,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let err = PlisioClient::builder().build().unwrap_err();
        assert!(matches!(err, PlisioError::Config(_)));
        let err = PlisioClient::new("   ").unwrap_err();
        assert!(matches!(err, PlisioError::Config(_)));
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let client = PlisioClient::new("key").unwrap();
        assert_eq!(client.http.base_url(), DEFAULT_API_URL);

        let client = PlisioClient::builder()
            .api_key("key")
            .base_url("http://127.0.0.1:9999/api/v1/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://127.0.0.1:9999/api/v1");
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = PlisioClient::builder()
            .api_key("key")
            .base_url("::nope::")
            .build()
            .unwrap_err();
        assert!(matches!(err, PlisioError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let builder = PlisioClient::builder().api_key("super-secret");
        assert!(!format!("{builder:?}").contains("super-secret"));
        let client = builder.build().unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }
}
