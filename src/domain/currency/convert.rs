//! Conversions from wire types to domain types for currencies.

use super::wire::CurrencyResponse;
use super::Currency;
use crate::domain::decode::{code, ResultShape};
use crate::error::{DecodeError, UnknownCode};
use crate::shared::CryptoCurrency;

const SHAPE: ResultShape = ResultShape::Currency;

impl TryFrom<CurrencyResponse> for Currency {
    type Error = DecodeError;

    fn try_from(w: CurrencyResponse) -> Result<Self, Self::Error> {
        let currency = w
            .cid
            .map(|cid| CryptoCurrency::from_cid(&cid))
            .transpose()
            .map_err(|source: UnknownCode| DecodeError::UnknownVariant {
                shape: SHAPE,
                field: "cid",
                source,
            })?;

        Ok(Self {
            currency,
            name: w.name,
            icon: w.icon,
            rate_usd: w.rate_usd,
            price_usd: w.price_usd,
            precision: w.precision,
            fiat: code(SHAPE, "fiat", w.fiat)?,
            fiat_rate: w.fiat_rate,
            min_sum_in: w.min_sum_in,
            invoice_commission_percentage: w.invoice_commission_percentage,
            hidden: w.hidden,
            maintenance: w.maintenance,
        })
    }
}
