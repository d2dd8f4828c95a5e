//! Operation domain: transaction history entries.

mod convert;
pub mod wire;

use crate::domain::commission::Plan;
use crate::domain::withdraw::Payout;
use crate::shared::{CryptoCurrency, FiatCurrency, OperationStatus, OperationType};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One on-chain transaction belonging to an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationTx {
    pub txid: Option<String>,
    pub block: Option<i64>,
    pub confirmations: Option<i64>,
    pub value: Option<Decimal>,
    pub processed: Option<bool>,
    pub fail_retry: Option<i64>,
    pub fee_rate: Option<Decimal>,
    pub fee_rate_unit: Option<String>,
    pub url: Option<String>,
    pub wallet_hash: Option<Vec<String>>,
}

/// Order details attached to an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationParams {
    pub order_number: Option<String>,
    pub order_name: Option<String>,
    pub source_amount: Option<Decimal>,
    pub source_currency: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<Decimal>,
    pub source_rate: Option<Decimal>,
    pub email: Option<String>,
    pub usd_rate: Option<Decimal>,
    pub fee: Option<Plan>,
}

/// A single operation: an invoice, a deposit or a withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub user_id: Option<i64>,
    pub shop_id: Option<String>,
    pub operation_type: Option<OperationType>,
    pub status: Option<OperationStatus>,
    pub pending_sum: Option<Decimal>,
    pub currency: Option<CryptoCurrency>,
    pub source_currency: Option<FiatCurrency>,
    pub source_rate: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub wallet_hash: Option<String>,
    pub sendmany: Option<Vec<Vec<Payout>>>,
    pub params: Option<OperationParams>,
    pub expire_at_utc: Option<i64>,
    pub created_at_utc: Option<i64>,
    pub amount: Option<Decimal>,
    pub sum: Option<Decimal>,
    pub commission: Option<Decimal>,
    pub tx_url: Option<String>,
    pub tx_id: Option<Vec<String>>,
    pub id: Option<String>,
    pub actual_sum: Option<Decimal>,
    pub actual_commission: Option<Decimal>,
    pub actual_fee: Option<Decimal>,
    pub actual_invoice_sum: Option<Decimal>,
    pub tx: Option<Vec<OperationTx>>,
    pub status_code: Option<i64>,
}

fn unix(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| Utc.timestamp_opt(s, 0).single())
}

impl Operation {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix(self.created_at_utc)
    }

    pub fn expire_at(&self) -> Option<DateTime<Utc>> {
        unix(self.expire_at_utc)
    }

    /// `true` once the status is terminal. Unknown status reads as not final.
    pub fn is_final(&self) -> bool {
        self.status.is_some_and(|s| s.is_final())
    }
}

/// One page of the operation history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationList {
    pub operations: Option<Vec<Operation>>,
    /// `_links`, passed through unchanged.
    pub links: Option<Map<String, Value>>,
    /// `_meta`, passed through unchanged.
    pub meta: Option<Map<String, Value>>,
}

impl OperationList {
    /// Operations on this page, in API order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.as_deref().unwrap_or_default().iter()
    }

    fn meta_int(&self, key: &str) -> Option<i64> {
        self.meta.as_ref()?.get(key)?.as_i64()
    }

    pub fn current_page(&self) -> Option<i64> {
        self.meta_int("currentPage")
    }

    pub fn page_count(&self) -> Option<i64> {
        self.meta_int("pageCount")
    }

    pub fn total_count(&self) -> Option<i64> {
        self.meta_int("totalCount")
    }
}
