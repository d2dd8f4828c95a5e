//! Wire types for `operations/withdraw`.

use crate::domain::commission::wire::PlanResponse;
use crate::shared::serde_util::{opt_code, opt_decimal, opt_int, opt_string, opt_string_list};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithdrawParamsResponse {
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub source_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub usd_rate: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<PlanResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithdrawResponse {
    #[serde(default, rename = "type", deserialize_with = "opt_code::deserialize")]
    pub operation_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub psys_cid: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub source_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub fee: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub wallet_hash: Option<String>,
    /// `[{address: amount}, ...]`, decoded during conversion.
    #[serde(default)]
    pub sendmany: Option<Value>,
    #[serde(default)]
    pub params: Option<WithdrawParamsResponse>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub created_at_utc: Option<i64>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub tx_url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_list::deserialize")]
    pub tx_id: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub id: Option<String>,
}
