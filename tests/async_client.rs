//! Async client against the in-process mock Plisio API.

mod common;

use std::str::FromStr;

use plisio::prelude::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn client() -> PlisioClient {
    let base = common::spawn_server().await;
    PlisioClient::builder()
        .api_key(common::API_KEY)
        .base_url(&base)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_balance() {
    let balance = client().await.get_balance(CryptoCurrency::Btc).await.unwrap();
    assert_eq!(
        balance,
        Balance {
            currency: Some(CryptoCurrency::Btc),
            balance: Some(dec("1.5")),
            locked_balance: None,
        }
    );
}

#[tokio::test]
async fn test_wrong_api_key_is_unauthorized() {
    let base = common::spawn_server().await;
    let client = PlisioClient::builder()
        .api_key("wrong")
        .base_url(&base)
        .build()
        .unwrap();
    let err = client.get_balance(CryptoCurrency::Btc).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::Unauthorized));
    assert_eq!(err.to_string(), "Invalid API key");
    assert_eq!(err.as_api().unwrap().status(), Some(401));
}

#[tokio::test]
async fn test_rate_limit_uses_default_reason() {
    let err = client().await.get_balance(CryptoCurrency::Doge).await.unwrap_err();
    let kind = err.kind().unwrap();
    assert_eq!(kind, ApiErrorKind::RateLimitReached);
    assert!(kind.is_retryable());
    assert_eq!(err.to_string(), kind.reason());
}

#[tokio::test]
async fn test_non_json_error_body_is_unknown() {
    let err = client().await.get_balance(CryptoCurrency::Ltc).await.unwrap_err();
    assert!(matches!(err, PlisioError::InvalidBody(_)));
    assert_eq!(err.kind(), Some(ApiErrorKind::Unknown));
}

#[tokio::test]
async fn test_unknown_code_in_payload_is_decode_error() {
    let err = client().await.get_balance(CryptoCurrency::Eth).await.unwrap_err();
    assert!(matches!(
        err,
        PlisioError::Decode(DecodeError::UnknownVariant { shape: ResultShape::Balance, .. })
    ));
}

#[tokio::test]
async fn test_get_currencies() {
    let client = client().await;

    let usd = client.get_currencies(None).await.unwrap();
    assert_eq!(usd.len(), 2);
    assert_eq!(usd[0].fiat, Some(FiatCurrency::Usd));
    assert_eq!(usd[1].currency, Some(CryptoCurrency::UsdtTrx));
    assert!(usd[0].is_available());
    assert!(!usd[1].is_available());

    let eur = client.get_currencies(Some(FiatCurrency::Eur)).await.unwrap();
    assert!(eur.iter().all(|c| c.fiat == Some(FiatCurrency::Eur)));
}

#[tokio::test]
async fn test_create_invoice() {
    let req = InvoiceRequest::new(CryptoCurrency::Btc, "Order #7", 7, dec("0.001"))
        .source(FiatCurrency::Usd, dec("42"));
    let invoice = client().await.create_invoice(&req).await.unwrap();
    assert_eq!(invoice.txn_id.as_deref(), Some("txn-7"));
    assert_eq!(invoice.amount, Some(dec("0.001")));
    assert_eq!(invoice.currency, Some(CryptoCurrency::Btc));
    assert_eq!(invoice.source_currency, Some(FiatCurrency::Usd));
    assert_eq!(invoice.expected_confirmations, Some(1));
}

#[tokio::test]
async fn test_invoice_amount_is_rounded_to_eight_digits() {
    let req = InvoiceRequest::new(CryptoCurrency::Btc, "o", 8, dec("0.123456789"));
    let invoice = client().await.create_invoice(&req).await.unwrap();
    assert_eq!(invoice.amount, Some(dec("0.12345679")));
}

#[tokio::test]
async fn test_invoice_redirect_yields_url_only_invoice() {
    let base = common::spawn_server().await;
    let client = PlisioClient::builder()
        .api_key(common::API_KEY)
        .base_url(&base)
        .build()
        .unwrap();
    let req = InvoiceRequest::new(CryptoCurrency::Btc, "Order #9", 9, dec("1")).redirect_to_invoice(true);
    let invoice = client.create_invoice(&req).await.unwrap();

    let origin = base.trim_end_matches("/api/v1");
    assert_eq!(
        invoice,
        Invoice {
            invoice_url: Some(format!("{origin}/pay/9")),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_validation_error_message() {
    let req = InvoiceRequest {
        language: None,
        ..InvoiceRequest::new(CryptoCurrency::Btc, "o", 1, dec("1"))
    };
    let err = client().await.create_invoice(&req).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::UnprocessableEntity));
    assert_eq!(err.to_string(), "language is required");
}

#[tokio::test]
async fn test_get_commission() {
    let req = CommissionRequest::new(CryptoCurrency::Btc)
        .to("bc1qa", dec("0.1"))
        .to("bc1qb", dec("0.2"))
        .fee_plan(PlanName::Priority)
        .custom_fee_rate(12);
    let commission = client().await.get_commission(&req).await.unwrap();
    assert_eq!(commission.plan, Some(PlanName::Priority));
    assert_eq!(commission.custom_fee_rate, Some(12));
    assert_eq!(commission.errors, None);
    let plans = commission.plans.unwrap();
    assert_eq!(plans.currency, Some(CryptoCurrency::Btc));
    assert_eq!(plans.get(PlanName::Normal).unwrap().fee_rate, Some(5));
    assert_eq!(commission.custom.unwrap().borders, Some(vec![1, 100]));
}

#[tokio::test]
async fn test_withdraw_mass_payout() {
    let req = WithdrawRequest::new(CryptoCurrency::Btc, "bc1qa", dec("0.1"))
        .and_to("bc1qb", dec("0.25"))
        .operation_type(OperationType::MassCashOut);
    let wd = client().await.withdraw(&req).await.unwrap();
    assert_eq!(wd.operation_type, Some(OperationType::MassCashOut));
    assert_eq!(wd.currency, Some(CryptoCurrency::Btc));
    assert_eq!(wd.tx_id, Some(vec!["deadbeef".to_string()]));

    let group = &wd.sendmany.as_ref().unwrap()[0];
    assert_eq!(group.len(), 2);
    assert_eq!(group[0], Payout { address: "bc1qa".to_string(), amount: dec("0.1") });
    assert_eq!(group[1].amount, dec("0.25"));
    assert_eq!(
        wd.params.as_ref().unwrap().fee.as_ref().unwrap().plan,
        Some(PlanName::Priority)
    );
    assert!(wd.created_at().is_some());
}

#[tokio::test]
async fn test_get_fee_and_fee_plan() {
    let client = client().await;
    let fee = client
        .get_fee(&FeeRequest::new(CryptoCurrency::Ltc, "ltc1q", dec("1")).fee_plan(PlanName::Economy))
        .await
        .unwrap();
    assert_eq!(fee.fee, Some(dec("0.000042")));
    assert_eq!(fee.currency, Some(CryptoCurrency::Ltc));
    assert_eq!(fee.plan, Some(PlanName::Economy));

    let plan = client.get_fee_plan(CryptoCurrency::Eth).await.unwrap();
    assert_eq!(plan.currency, Some(CryptoCurrency::Eth));
    assert_eq!(plan.priority.unwrap().fee_rate, Some(9));
    assert!(plan.custom.is_none());
}

#[tokio::test]
async fn test_get_operations_page() {
    let list = client()
        .await
        .get_operations(&OperationsQuery::default().page(2).limit(20))
        .await
        .unwrap();
    let ids: Vec<_> = list.iter().filter_map(|op| op.id.as_deref()).collect();
    assert_eq!(ids, ["op-a", "op-b"]);
    assert_eq!(list.current_page(), Some(2));
    assert_eq!(list.total_count(), Some(42));
    assert_eq!(
        list.links.as_ref().unwrap()["self"]["href"],
        "/api/v1/operations?page=2"
    );
    assert_eq!(list.operations.as_ref().unwrap()[1].status, Some(OperationStatus::Pending));
}

#[tokio::test]
async fn test_get_operation() {
    let client = client().await;
    let op = client.get_operation("op-z").await.unwrap();
    assert_eq!(op.id.as_deref(), Some("op-z"));
    assert_eq!(op.status, Some(OperationStatus::Completed));
    assert_eq!(op.tx.as_ref().unwrap()[0].processed, Some(true));
    assert_eq!(op.created_at().unwrap().timestamp(), 1_700_000_000);

    let err = client.get_operation("missing").await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::NotFound));
    assert_eq!(err.to_string(), "not found");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = PlisioClient::builder()
        .api_key(common::API_KEY)
        .base_url("http://127.0.0.1:1/api/v1")
        .build()
        .unwrap();
    let err = client.get_fee_plan(CryptoCurrency::Btc).await.unwrap_err();
    assert!(matches!(err, PlisioError::Transport(_)));
    assert_eq!(err.kind(), Some(ApiErrorKind::Unknown));
}

#[tokio::test]
async fn test_raw_send_with_custom_request() {
    let client = client().await;
    let request = PlisioRequest::new("operations/fee-plan/BTC", Params::new(), ResultShape::FeePlan);
    let decoded = client.send(request).await.unwrap();
    assert!(matches!(decoded, Decoded::One(Model::FeePlan(_))));
}
