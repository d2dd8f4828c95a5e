//! Currency domain: supported cryptocurrencies and their rates.

mod convert;
pub mod wire;

use crate::shared::{CryptoCurrency, FiatCurrency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supported cryptocurrency with its rate against a fiat currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub currency: Option<CryptoCurrency>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub rate_usd: Option<Decimal>,
    pub price_usd: Option<Decimal>,
    pub precision: Option<i64>,
    pub fiat: Option<FiatCurrency>,
    pub fiat_rate: Option<Decimal>,
    pub min_sum_in: Option<Decimal>,
    pub invoice_commission_percentage: Option<Decimal>,
    pub hidden: Option<bool>,
    pub maintenance: Option<bool>,
}

impl Currency {
    /// Whether invoices can currently be issued in this currency.
    pub fn is_available(&self) -> bool {
        !self.hidden.unwrap_or(false) && !self.maintenance.unwrap_or(false)
    }
}
