//! Wire types for `balances/{psys_cid}`.

use crate::shared::serde_util::{opt_code, opt_decimal};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceResponse {
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub psys_cid: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub balance: Option<Decimal>,
    #[serde(default, rename = "lockedBalance", deserialize_with = "opt_decimal::deserialize")]
    pub locked_balance: Option<Decimal>,
}
