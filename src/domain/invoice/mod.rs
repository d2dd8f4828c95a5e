//! Invoice domain: a newly created payment invoice.

mod convert;
pub mod wire;

use crate::shared::{CryptoCurrency, FiatCurrency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of `invoices/new`.
///
/// With a white-label shop most fields are populated. With a standard shop,
/// or when the API answers with a redirect, only `invoice_url` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub txn_id: Option<String>,
    pub invoice_url: Option<String>,
    pub amount: Option<Decimal>,
    pub pending_amount: Option<Decimal>,
    pub wallet_hash: Option<String>,
    pub currency: Option<CryptoCurrency>,
    pub source_currency: Option<FiatCurrency>,
    pub source_rate: Option<Decimal>,
    pub expected_confirmations: Option<i64>,
    pub qr_code: Option<String>,
    pub verify_hash: Option<String>,
    pub invoice_commission: Option<Decimal>,
    pub invoice_sum: Option<Decimal>,
    pub invoice_total_sum: Option<Decimal>,
}
