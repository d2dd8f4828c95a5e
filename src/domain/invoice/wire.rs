//! Wire types for `invoices/new`.

use crate::shared::serde_util::{opt_code, opt_decimal, opt_int, opt_string};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceResponse {
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub txn_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub invoice_url: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub pending_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub wallet_hash: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub source_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub expected_confirmations: Option<i64>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub qr_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub verify_hash: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub invoice_commission: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub invoice_sum: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub invoice_total_sum: Option<Decimal>,
}
