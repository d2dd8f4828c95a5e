//! Wire types for `operations/commission`, `operations/fee` and
//! `operations/fee-plan`.

use crate::shared::serde_util::{opt_code, opt_decimal, opt_int, opt_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanResponse {
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub conf_target: Option<i64>,
    #[serde(default, rename = "feeRate", deserialize_with = "opt_int::deserialize")]
    pub fee_rate: Option<i64>,
    #[serde(default, rename = "dynamicField", deserialize_with = "opt_string::deserialize")]
    pub dynamic_field: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub plan: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeePlanResponse {
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub psys_cid: Option<String>,
    #[serde(default)]
    pub economy: Option<PlanResponse>,
    #[serde(default)]
    pub normal: Option<PlanResponse>,
    #[serde(default)]
    pub priority: Option<PlanResponse>,
    #[serde(default)]
    pub custom: Option<PlanResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomResponse {
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub min: Option<i64>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub max: Option<i64>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub default: Option<i64>,
    #[serde(default, deserialize_with = "int_list")]
    pub borders: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommissionResponse {
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub commission: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub fee: Option<Decimal>,
    #[serde(default, rename = "maxAmount", deserialize_with = "opt_decimal::deserialize")]
    pub max_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub plan: Option<String>,
    #[serde(default, rename = "useWallet", deserialize_with = "opt_int::deserialize")]
    pub use_wallet: Option<i64>,
    #[serde(default, rename = "useWalletBalance", deserialize_with = "opt_int::deserialize")]
    pub use_wallet_balance: Option<i64>,
    #[serde(default)]
    pub plans: Option<FeePlanResponse>,
    #[serde(default)]
    pub custom: Option<CustomResponse>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub errors: Option<i64>,
    #[serde(default, rename = "customFeeRate", deserialize_with = "opt_int::deserialize")]
    pub custom_fee_rate: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeeResponse {
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub fee: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub psys_cid: Option<String>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub plan: Option<String>,
}

/// `borders` is a list of integers; a lone integer is promoted to a list.
fn int_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    use crate::shared::serde_util::coerce_int;
    use serde::de::Error as _;

    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    };
    items
        .iter()
        .map(|item| coerce_int(item)?.ok_or_else(|| "expected integer, found null".to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
        .map_err(D::Error::custom)
}
