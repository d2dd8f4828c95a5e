//! Conversions from wire types to domain types for invoices.

use super::wire::InvoiceResponse;
use super::Invoice;
use crate::domain::decode::{code, ResultShape};
use crate::error::DecodeError;

const SHAPE: ResultShape = ResultShape::Invoice;

impl TryFrom<InvoiceResponse> for Invoice {
    type Error = DecodeError;

    fn try_from(w: InvoiceResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            txn_id: w.txn_id,
            invoice_url: w.invoice_url,
            amount: w.amount,
            pending_amount: w.pending_amount,
            wallet_hash: w.wallet_hash,
            currency: code(SHAPE, "currency", w.currency)?,
            source_currency: code(SHAPE, "source_currency", w.source_currency)?,
            source_rate: w.source_rate,
            expected_confirmations: w.expected_confirmations,
            qr_code: w.qr_code,
            verify_hash: w.verify_hash,
            invoice_commission: w.invoice_commission,
            invoice_sum: w.invoice_sum,
            invoice_total_sum: w.invoice_total_sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{CryptoCurrency, FiatCurrency};
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_white_label_invoice() {
        let w: InvoiceResponse = serde_json::from_value(json!({
            "txn_id": "5f5b9c5e8d5c1a0b2c3d4e5f",
            "invoice_url": "https://plisio.net/invoice/5f5b9c5e8d5c1a0b2c3d4e5f",
            "amount": "0.00120000",
            "pending_amount": "0.00120000",
            "wallet_hash": "bc1qexample",
            "currency": "BTC",
            "source_currency": "USD",
            "source_rate": "41666.66",
            "expected_confirmations": "1",
            "qr_code": "data:image/png;base64,AAAA",
            "verify_hash": "abc",
            "invoice_commission": "0.00000600",
            "invoice_sum": "0.00120000",
            "invoice_total_sum": "0.00120600"
        }))
        .unwrap();
        let invoice = Invoice::try_from(w).unwrap();
        assert_eq!(invoice.currency, Some(CryptoCurrency::Btc));
        assert_eq!(invoice.source_currency, Some(FiatCurrency::Usd));
        assert_eq!(invoice.expected_confirmations, Some(1));
        assert_eq!(invoice.invoice_total_sum, Some(Decimal::new(120600, 8)));
    }

    #[test]
    fn test_url_only_invoice() {
        let w: InvoiceResponse = serde_json::from_value(json!({
            "txn_id": "abc",
            "invoice_url": "https://plisio.net/invoice/abc"
        }))
        .unwrap();
        let invoice = Invoice::try_from(w).unwrap();
        assert_eq!(invoice.invoice_url.as_deref(), Some("https://plisio.net/invoice/abc"));
        assert_eq!(invoice.amount, None);
        assert_eq!(invoice.currency, None);
    }
}
