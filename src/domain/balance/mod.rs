//! Balance domain: per-currency wallet balance.

mod convert;
pub mod wire;

use crate::shared::CryptoCurrency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of one cryptocurrency wallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: Option<CryptoCurrency>,
    pub balance: Option<Decimal>,
    pub locked_balance: Option<Decimal>,
}
