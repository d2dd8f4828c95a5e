//! Conversions from wire types to domain types for fees and commissions.

use super::wire::{CommissionResponse, CustomResponse, FeePlanResponse, FeeResponse, PlanResponse};
use super::{Commission, Custom, Fee, FeePlan, Plan};
use crate::domain::decode::{code, ResultShape};
use crate::error::DecodeError;

/// Convert a nested fee tier, reporting failures against the enclosing shape.
pub(crate) fn plan_from_wire(
    shape: ResultShape,
    w: Option<PlanResponse>,
) -> Result<Option<Plan>, DecodeError> {
    let Some(w) = w else {
        return Ok(None);
    };
    Ok(Some(Plan {
        conf_target: w.conf_target,
        fee_rate: w.fee_rate,
        dynamic_field: w.dynamic_field,
        plan: code(shape, "plan", w.plan)?,
        unit: w.unit,
        value: w.value,
    }))
}

fn fee_plan_from_wire(shape: ResultShape, w: FeePlanResponse) -> Result<FeePlan, DecodeError> {
    Ok(FeePlan {
        currency: code(shape, "psys_cid", w.psys_cid)?,
        economy: plan_from_wire(shape, w.economy)?,
        normal: plan_from_wire(shape, w.normal)?,
        priority: plan_from_wire(shape, w.priority)?,
        custom: plan_from_wire(shape, w.custom)?,
    })
}

impl From<CustomResponse> for Custom {
    fn from(w: CustomResponse) -> Self {
        Self {
            min: w.min,
            max: w.max,
            default: w.default,
            borders: w.borders,
            unit: w.unit,
        }
    }
}

impl TryFrom<FeePlanResponse> for FeePlan {
    type Error = DecodeError;

    fn try_from(w: FeePlanResponse) -> Result<Self, Self::Error> {
        fee_plan_from_wire(ResultShape::FeePlan, w)
    }
}

impl TryFrom<CommissionResponse> for Commission {
    type Error = DecodeError;

    fn try_from(w: CommissionResponse) -> Result<Self, Self::Error> {
        const SHAPE: ResultShape = ResultShape::Commission;
        Ok(Self {
            commission: w.commission,
            fee: w.fee,
            max_amount: w.max_amount,
            plan: code(SHAPE, "plan", w.plan)?,
            use_wallet: w.use_wallet,
            use_wallet_balance: w.use_wallet_balance,
            plans: w.plans.map(|p| fee_plan_from_wire(SHAPE, p)).transpose()?,
            custom: w.custom.map(Custom::from),
            errors: w.errors,
            custom_fee_rate: w.custom_fee_rate,
        })
    }
}

impl TryFrom<FeeResponse> for Fee {
    type Error = DecodeError;

    fn try_from(w: FeeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            fee: w.fee,
            currency: code(ResultShape::Fee, "psys_cid", w.psys_cid)?,
            plan: code(ResultShape::Fee, "plan", w.plan)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{CryptoCurrency, PlanName};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn tier(name: &str, rate: i64) -> serde_json::Value {
        json!({
            "conf_target": 6,
            "feeRate": rate,
            "dynamicField": "feeRate",
            "plan": name,
            "unit": "sat/b",
            "value": "0.00001"
        })
    }

    #[test]
    fn test_commission_with_nested_plans() {
        let w: CommissionResponse = serde_json::from_value(json!({
            "commission": "0.00000100",
            "fee": "0.00002500",
            "maxAmount": "1.23000000",
            "plan": "normal",
            "useWallet": 1,
            "useWalletBalance": "0",
            "plans": {
                "psys_cid": "BTC",
                "economy": tier("economy", 2),
                "normal": tier("normal", 5),
                "priority": tier("priority", 11)
            },
            "custom": {"min": 1, "max": 100, "default": 5, "borders": [1, 5, 100], "unit": "sat/b"},
            "errors": null,
            "customFeeRate": 7
        }))
        .unwrap();
        let c = Commission::try_from(w).unwrap();
        assert_eq!(c.plan, Some(PlanName::Normal));
        assert_eq!(c.max_amount, Some(Decimal::new(123, 2)));
        assert_eq!(c.use_wallet_balance, Some(0));
        assert_eq!(c.errors, None);

        let plans = c.plans.unwrap();
        assert_eq!(plans.currency, Some(CryptoCurrency::Btc));
        assert_eq!(plans.get(PlanName::Priority).unwrap().fee_rate, Some(11));
        assert!(plans.get(PlanName::Custom).is_none());

        let custom = c.custom.unwrap();
        assert_eq!(custom.borders, Some(vec![1, 5, 100]));
        assert_eq!(custom.default, Some(5));
    }

    #[test]
    fn test_nested_unknown_plan_reports_enclosing_shape() {
        let w: CommissionResponse = serde_json::from_value(json!({
            "plans": {"economy": tier("turbo", 1)}
        }))
        .unwrap();
        let err = Commission::try_from(w).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownVariant { shape: ResultShape::Commission, field: "plan", .. }
        ));
    }

    #[test]
    fn test_fee_plan_conversion() {
        let w: FeePlanResponse = serde_json::from_value(json!({
            "psys_cid": "LTC",
            "normal": tier("normal", 3)
        }))
        .unwrap();
        let fp = FeePlan::try_from(w).unwrap();
        assert_eq!(fp.currency, Some(CryptoCurrency::Ltc));
        assert!(fp.economy.is_none());
        assert_eq!(fp.normal.unwrap().plan, Some(PlanName::Normal));
    }

    #[test]
    fn test_fee_conversion() {
        let w: FeeResponse =
            serde_json::from_value(json!({"fee": "0.0001", "psys_cid": "ETH", "plan": "economy"}))
                .unwrap();
        let fee = Fee::try_from(w).unwrap();
        assert_eq!(fee.fee, Some(Decimal::new(1, 4)));
        assert_eq!(fee.currency, Some(CryptoCurrency::Eth));
        assert_eq!(fee.plan, Some(PlanName::Economy));
    }

    #[test]
    fn test_single_border_is_promoted() {
        let w: CustomResponse = serde_json::from_value(json!({"borders": "4"})).unwrap();
        assert_eq!(Custom::from(w).borders, Some(vec![4]));
    }
}
