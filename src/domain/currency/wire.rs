//! Wire types for `currencies[/{fiat}]`.

use crate::shared::serde_util::{opt_code, opt_decimal, opt_flag, opt_int, opt_string};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyResponse {
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub cid: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string::deserialize")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub rate_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub price_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_int::deserialize")]
    pub precision: Option<i64>,
    #[serde(default, deserialize_with = "opt_code::deserialize")]
    pub fiat: Option<String>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub fiat_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub min_sum_in: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub invoice_commission_percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_flag::deserialize")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag::deserialize")]
    pub maintenance: Option<bool>,
}
