//! Withdraw domain: outgoing transfers and their payout breakdown.

mod convert;
pub mod wire;

use crate::domain::commission::Plan;
use crate::shared::{CryptoCurrency, FiatCurrency, OperationType};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) use convert::payouts_from_wire;

/// One destination of a (mass) payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub address: String,
    pub amount: Decimal,
}

/// Rates and fee tier applied to a withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithdrawParams {
    /// Kept as sent; not always a fiat code.
    pub source_currency: Option<String>,
    pub source_rate: Option<Decimal>,
    pub usd_rate: Option<Decimal>,
    pub fee: Option<Plan>,
}

/// Result of `operations/withdraw`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Withdraw {
    pub operation_type: Option<OperationType>,
    /// Kept as sent; withdrawals report statuses outside the operation table.
    pub status: Option<String>,
    pub currency: Option<CryptoCurrency>,
    pub source_currency: Option<FiatCurrency>,
    pub source_rate: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub wallet_hash: Option<String>,
    pub sendmany: Option<Vec<Vec<Payout>>>,
    pub params: Option<WithdrawParams>,
    pub created_at_utc: Option<i64>,
    pub amount: Option<Decimal>,
    pub tx_url: Option<String>,
    pub tx_id: Option<Vec<String>>,
    pub id: Option<String>,
}

impl Withdraw {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at_utc
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}
