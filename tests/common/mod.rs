//! In-process mock of the Plisio REST API for integration tests.
//!
//! Every route requires `api_key=test-key` and answers in the
//! `{"status": ..., "data": ...}` envelope the real API uses.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-key";

type Q = Query<HashMap<String, String>>;

fn ok(data: Value) -> Response {
    (StatusCode::OK, Json(json!({"status": "success", "data": data}))).into_response()
}

fn fail(status: StatusCode, message: Option<&str>) -> Response {
    let mut body = json!({"status": "error", "data": {"code": status.as_u16()}});
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    (status, Json(body)).into_response()
}

fn authorized(q: &HashMap<String, String>) -> Result<(), Response> {
    match q.get("api_key") {
        Some(key) if key == API_KEY => Ok(()),
        _ => Err(fail(StatusCode::UNAUTHORIZED, Some("Invalid API key"))),
    }
}

fn fraction_digits(raw: &str) -> usize {
    raw.split_once('.').map_or(0, |(_, frac)| frac.len())
}

pub fn app() -> Router {
    Router::new()
        .route("/api/v1/balances/{cid}", get(balance))
        .route("/api/v1/currencies", get(currencies_usd))
        .route("/api/v1/currencies/{fiat}", get(currencies))
        .route("/api/v1/invoices/new", get(new_invoice))
        .route("/api/v1/operations/commission/{cid}", get(commission))
        .route("/api/v1/operations/withdraw", get(withdraw))
        .route("/api/v1/operations/fee/{cid}", get(fee))
        .route("/api/v1/operations/fee-plan/{cid}", get(fee_plan))
        .route("/api/v1/operations", get(operations))
        .route("/api/v1/operations/{id}", get(operation))
        .route("/pay/{order}", get(pay_page))
}

/// Serve on an ephemeral port from the current runtime; returns the base URL.
pub async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app()).await.unwrap() });
    format!("http://{addr}/api/v1")
}

/// Serve from a dedicated thread with its own runtime, for blocking clients.
pub fn spawn_server_thread() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app()).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{addr}/api/v1")
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn tier(name: &str, rate: i64) -> Value {
    json!({
        "conf_target": 6,
        "feeRate": rate,
        "dynamicField": "feeRate",
        "plan": name,
        "unit": "sat/b",
        "value": format!("0.0000{rate}")
    })
}

pub fn operation_fixture(id: &str, status: &str) -> Value {
    json!({
        "user_id": 4242,
        "shop_id": "shop_1",
        "type": "invoice",
        "status": status,
        "pending_sum": "0",
        "currency": "BTC",
        "source_currency": "USD",
        "source_rate": "42000",
        "fee": "0.00001",
        "wallet_hash": "bc1qshop",
        "params": {"order_number": "17", "order_name": "Order #17", "amount": "0.001"},
        "expire_at_utc": 1700003600,
        "created_at_utc": 1700000000,
        "amount": "0.001",
        "tx_url": format!("https://blockchair.com/bitcoin/transaction/{id}"),
        "tx_id": [id],
        "id": id,
        "tx": [{"txid": id, "confirmations": 3, "processed": 1}],
        "status_code": 2
    })
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn balance(Path(cid): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    match cid.as_str() {
        "DOGE" => fail(StatusCode::TOO_MANY_REQUESTS, None),
        "LTC" => (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response(),
        "ETH" => ok(json!({"psys_cid": "NOPE", "balance": "1"})),
        _ => ok(json!({"psys_cid": cid, "balance": "1.50000000"})),
    }
}

async fn currencies_usd(q: Q) -> Response {
    currencies(Path("USD".to_string()), q).await
}

async fn currencies(Path(fiat): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    ok(json!([
        {"name": "Bitcoin", "cid": "BTC", "precision": 8, "fiat": fiat, "fiat_rate": "42000.1", "rate_usd": "42000.1"},
        {"name": "Tether", "cid": "USDT-TRX", "precision": 6, "fiat": fiat, "fiat_rate": "1", "hidden": 0, "maintenance": true}
    ]))
}

async fn new_invoice(Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    if q.get("language").is_none() {
        return fail(StatusCode::UNPROCESSABLE_ENTITY, Some("language is required"));
    }
    let amount = q.get("amount").cloned().unwrap_or_default();
    if fraction_digits(&amount) > 8 {
        return fail(StatusCode::UNPROCESSABLE_ENTITY, Some("amount has too many digits"));
    }
    let order = q.get("order_number").cloned().unwrap_or_default();
    if q.get("redirect_to_invoice").map(String::as_str) == Some("1") {
        return Redirect::to(&format!("/pay/{order}")).into_response();
    }
    ok(json!({
        "txn_id": format!("txn-{order}"),
        "invoice_url": format!("https://plisio.net/invoice/txn-{order}"),
        "amount": amount,
        "currency": q.get("currency"),
        "source_currency": q.get("source_currency"),
        "source_rate": "41666.66",
        "expected_confirmations": "1"
    }))
}

async fn pay_page(Path(order): Path<String>) -> Response {
    (StatusCode::OK, format!("<html>Pay for order {order}</html>")).into_response()
}

async fn commission(Path(cid): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    let addresses = q.get("addresses").map_or(0, |a| a.split(',').count());
    let amounts = q.get("amounts").map_or(0, |a| a.split(',').count());
    if addresses != amounts {
        return fail(StatusCode::UNPROCESSABLE_ENTITY, Some("addresses and amounts differ"));
    }
    ok(json!({
        "commission": "0.00000100",
        "fee": "0.00002500",
        "maxAmount": "1.2",
        "plan": q.get("feePlan").cloned().unwrap_or_else(|| "normal".to_string()),
        "useWallet": 1,
        "useWalletBalance": "1",
        "plans": {"psys_cid": cid, "economy": tier("economy", 2), "normal": tier("normal", 5)},
        "custom": {"min": 1, "max": 100, "default": 5, "borders": [1, 100], "unit": "sat/b"},
        "errors": null,
        "customFeeRate": q.get("customFeeRate")
    }))
}

async fn withdraw(Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    let to: Vec<&str> = q.get("to").map(|s| s.split(',').collect()).unwrap_or_default();
    let amounts: Vec<&str> = q.get("amount").map(|s| s.split(',').collect()).unwrap_or_default();
    if to.is_empty() || to.len() != amounts.len() {
        return fail(StatusCode::BAD_REQUEST, None);
    }
    let group: serde_json::Map<String, Value> = to
        .iter()
        .zip(&amounts)
        .map(|(addr, amount)| (addr.to_string(), json!(amount)))
        .collect();
    ok(json!({
        "type": q.get("type").cloned().unwrap_or_else(|| "cash_out".to_string()),
        "status": "pending",
        "psys_cid": q.get("psys_cid"),
        "fee": "0.00001",
        "sendmany": [group],
        "params": {"source_currency": "BTC", "usd_rate": "42000", "fee": tier("priority", 9)},
        "created_at_utc": 1700000000,
        "tx_id": "deadbeef",
        "id": "wd-1"
    }))
}

async fn fee(Path(cid): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    ok(json!({
        "fee": "0.00004200",
        "psys_cid": cid,
        "plan": q.get("feePlan").cloned().unwrap_or_else(|| "normal".to_string())
    }))
}

async fn fee_plan(Path(cid): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    ok(json!({
        "psys_cid": cid,
        "economy": tier("economy", 2),
        "normal": tier("normal", 5),
        "priority": tier("priority", 9)
    }))
}

async fn operations(Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    let page: i64 = q.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    ok(json!({
        "operations": [operation_fixture("op-a", "completed"), operation_fixture("op-b", "pending")],
        "_links": {"self": {"href": format!("/api/v1/operations?page={page}")}},
        "_meta": {"totalCount": 42, "pageCount": 3, "currentPage": page, "perPage": 20}
    }))
}

async fn operation(Path(id): Path<String>, Query(q): Q) -> Response {
    if let Err(resp) = authorized(&q) {
        return resp;
    }
    if id == "missing" {
        return fail(StatusCode::NOT_FOUND, Some("not found"));
    }
    ok(operation_fixture(&id, "completed"))
}
