//! Conversions from wire types to domain types for balances.

use super::wire::BalanceResponse;
use super::Balance;
use crate::domain::decode::{code, ResultShape};
use crate::error::DecodeError;

impl TryFrom<BalanceResponse> for Balance {
    type Error = DecodeError;

    fn try_from(w: BalanceResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            currency: code(ResultShape::Balance, "psys_cid", w.psys_cid)?,
            balance: w.balance,
            locked_balance: w.locked_balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CryptoCurrency;
    use rust_decimal::Decimal;

    #[test]
    fn test_balance_conversion() {
        let w: BalanceResponse = serde_json::from_value(serde_json::json!({
            "psys_cid": "BTC",
            "balance": "1.50000000"
        }))
        .unwrap();
        let balance = Balance::try_from(w).unwrap();
        assert_eq!(balance.currency, Some(CryptoCurrency::Btc));
        assert_eq!(balance.balance, Some(Decimal::new(15, 1)));
        assert_eq!(balance.locked_balance, None);
    }

    #[test]
    fn test_balance_unknown_currency() {
        let w = BalanceResponse {
            psys_cid: Some("XYZ".to_string()),
            ..Default::default()
        };
        let err = Balance::try_from(w).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownVariant { shape: ResultShape::Balance, field: "psys_cid", .. }
        ));
    }
}
