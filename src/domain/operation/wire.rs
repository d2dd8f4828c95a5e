//! Wire types for `operations` and `operations/{id}`.

use crate::domain::commission::wire::PlanResponse;
use crate::shared::serde_util::{
    opt_code, opt_decimal, opt_flag, opt_int, opt_string, opt_string_list,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationTxResponse {
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub txid: Option<String>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub block: Option<i64>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub confirmations: Option<i64>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub value: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_flag::deserialize")]
    pub processed: Option<bool>,
    #[serde(default, rename = "failRetry", deserialize_with = "opt_int::deserialize")]
    pub fail_retry: Option<i64>,
    #[serde(default, rename = "feeRate", deserialize_with = "opt_decimal::deserialize")]
    pub fee_rate: Option<Decimal>,
    #[serde(default, rename = "feeRateUnit", deserialize_with = "opt_string::deserialize")]
    pub fee_rate_unit: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_list::deserialize")]
    pub wallet_hash: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationParamsResponse {
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub order_name: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub source_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub usd_rate: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<PlanResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationResponse {
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub shop_id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "opt_code::deserialize")]
    pub operation_type: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub pending_sum: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub source_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub source_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub fee: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub wallet_hash: Option<String>,
    #[serde(default)]
    pub sendmany: Option<Value>,
    #[serde(default)]
    pub params: Option<OperationParamsResponse>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub expire_at_utc: Option<i64>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub created_at_utc: Option<i64>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub sum: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub commission: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub tx_url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_list::deserialize")]
    pub tx_id: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub actual_sum: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub actual_commission: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub actual_fee: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub actual_invoice_sum: Option<Decimal>,
    #[serde(default)]
    pub tx: Option<Vec<OperationTxResponse>>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub status_code: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationListResponse {
    #[serde(default)]
    pub operations: Option<Vec<OperationResponse>>,
    #[serde(default, rename = "_links")]
    pub links: Option<Map<String, Value>>,
    #[serde(default, rename = "_meta")]
    pub meta: Option<Map<String, Value>>,
}
