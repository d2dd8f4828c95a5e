//! Blocking client: the same capabilities as [`crate::client::PlisioClient`],
//! each call blocking the current thread until the response is decoded.
//!
//! ```rust,ignore
//! use plisio::blocking::PlisioClient;
//! use plisio::shared::CryptoCurrency;
//!
//! let client = PlisioClient::new("your-secret-key")?;
//! let balance = client.get_balance(CryptoCurrency::Btc)?;
//! ```

use crate::api::{
    self, CommissionRequest, FeeRequest, InvoiceRequest, OperationsQuery, WithdrawRequest,
};
use crate::client::PlisioClientBuilder;
use crate::domain::{
    Balance, Commission, Currency, Decoded, Fee, FeePlan, Invoice, Operation, OperationList,
    Withdraw,
};
use crate::error::PlisioError;
use crate::http::blocking::PlisioHttp;
use crate::request::PlisioRequest;
use crate::shared::{CryptoCurrency, FiatCurrency};

/// Blocking Plisio client. Build with [`PlisioClientBuilder::build_blocking`].
#[derive(Debug, Clone)]
pub struct PlisioClient {
    pub(crate) http: PlisioHttp,
}

impl PlisioClient {
    pub fn builder() -> PlisioClientBuilder {
        PlisioClientBuilder::default()
    }

    pub fn new(api_key: &str) -> Result<Self, PlisioError> {
        Self::builder().api_key(api_key).build_blocking()
    }

    pub fn send(&self, request: PlisioRequest) -> Result<Decoded, PlisioError> {
        self.http.send(request)
    }

    pub fn get_balance(&self, currency: CryptoCurrency) -> Result<Balance, PlisioError> {
        Ok(self.send(api::balance(currency))?.into_one()?)
    }

    pub fn get_currencies(&self, fiat: Option<FiatCurrency>) -> Result<Vec<Currency>, PlisioError> {
        Ok(self.send(api::currencies(fiat))?.into_many()?)
    }

    pub fn create_invoice(&self, req: &InvoiceRequest) -> Result<Invoice, PlisioError> {
        Ok(self.send(api::invoice(req))?.into_one()?)
    }

    pub fn get_commission(&self, req: &CommissionRequest) -> Result<Commission, PlisioError> {
        Ok(self.send(api::commission(req))?.into_one()?)
    }

    pub fn withdraw(&self, req: &WithdrawRequest) -> Result<Withdraw, PlisioError> {
        Ok(self.send(api::withdraw(req))?.into_one()?)
    }

    pub fn get_fee(&self, req: &FeeRequest) -> Result<Fee, PlisioError> {
        Ok(self.send(api::fee(req))?.into_one()?)
    }

    pub fn get_fee_plan(&self, currency: CryptoCurrency) -> Result<FeePlan, PlisioError> {
        Ok(self.send(api::fee_plan(currency))?.into_one()?)
    }

    pub fn get_operations(&self, query: &OperationsQuery) -> Result<OperationList, PlisioError> {
        Ok(self.send(api::operations(query))?.into_one()?)
    }

    pub fn get_operation(&self, id: &str) -> Result<Operation, PlisioError> {
        Ok(self.send(api::operation(id))?.into_one()?)
    }
}
