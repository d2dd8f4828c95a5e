//! Commission domain: fee plans, fee estimates and Plisio commission.
//!
//! [`FeePlan`] and [`Fee`] are top-level results of their own endpoints;
//! [`Plan`] and [`Custom`] only appear nested inside other results.

mod convert;
pub mod wire;

use crate::shared::{CryptoCurrency, PlanName};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) use convert::plan_from_wire;

/// One network fee tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Target number of blocks until confirmation.
    pub conf_target: Option<i64>,
    pub fee_rate: Option<i64>,
    pub dynamic_field: Option<String>,
    pub plan: Option<PlanName>,
    pub unit: Option<String>,
    pub value: Option<Decimal>,
}

/// Fee tiers available for a cryptocurrency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeePlan {
    pub currency: Option<CryptoCurrency>,
    pub economy: Option<Plan>,
    pub normal: Option<Plan>,
    pub priority: Option<Plan>,
    pub custom: Option<Plan>,
}

impl FeePlan {
    /// The tier matching `name`, if the API returned it.
    pub fn get(&self, name: PlanName) -> Option<&Plan> {
        match name {
            PlanName::Economy => self.economy.as_ref(),
            PlanName::Normal => self.normal.as_ref(),
            PlanName::Priority => self.priority.as_ref(),
            PlanName::Custom => self.custom.as_ref(),
        }
    }
}

/// Bounds for a custom fee rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Custom {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub default: Option<i64>,
    pub borders: Option<Vec<i64>>,
    pub unit: Option<String>,
}

/// Estimated network fee and Plisio commission for a withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub commission: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub plan: Option<PlanName>,
    pub use_wallet: Option<i64>,
    pub use_wallet_balance: Option<i64>,
    pub plans: Option<FeePlan>,
    pub custom: Option<Custom>,
    pub errors: Option<i64>,
    pub custom_fee_rate: Option<i64>,
}

/// Estimated network fee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub fee: Option<Decimal>,
    pub currency: Option<CryptoCurrency>,
    pub plan: Option<PlanName>,
}
