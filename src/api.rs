//! Endpoint builders: one function per Plisio capability.
//!
//! Each builder turns typed arguments into a ready-to-send [`PlisioRequest`]
//! with its path, parameters and expected [`ResultShape`]. Nothing here talks
//! to the network; the clients add `api_key` and dispatch.

use crate::domain::ResultShape;
use crate::request::{ParamValue, Params, PlisioRequest};
use crate::shared::{CryptoCurrency, FiatCurrency, OperationStatus, OperationType, PlanName};
use rust_decimal::Decimal;

/// Endpoint path segments.
pub mod path {
    pub const BALANCES: &str = "balances";
    pub const CURRENCIES: &str = "currencies";
    pub const INVOICE: &str = "invoices/new";
    pub const COMMISSION: &str = "operations/commission";
    pub const WITHDRAW: &str = "operations/withdraw";
    pub const FEE: &str = "operations/fee";
    pub const FEE_PLAN: &str = "operations/fee-plan";
    pub const OPERATIONS: &str = "operations";
}

/// Invoice language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en_US";

fn items(values: &[String]) -> ParamValue {
    if values.is_empty() {
        ParamValue::Absent
    } else {
        ParamValue::Items(values.to_vec())
    }
}

fn amounts(values: &[Decimal]) -> ParamValue {
    if values.is_empty() {
        ParamValue::Absent
    } else {
        ParamValue::Amounts(values.to_vec())
    }
}

// ─── Request arguments ───────────────────────────────────────────────────────

/// Arguments for [`invoice`].
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRequest {
    pub currency: CryptoCurrency,
    pub order_name: String,
    pub order_number: String,
    pub amount: Decimal,
    pub source_currency: Option<FiatCurrency>,
    pub source_amount: Option<Decimal>,
    /// Currencies the payer may choose from.
    pub allowed_currencies: Vec<CryptoCurrency>,
    pub description: Option<String>,
    pub callback_url: Option<String>,
    pub email: Option<String>,
    pub language: Option<String>,
    pub plugin: Option<String>,
    pub version: Option<String>,
    pub redirect_to_invoice: bool,
    /// Minutes until the invoice expires.
    pub expire_min: Option<u32>,
}

impl InvoiceRequest {
    pub fn new(
        currency: CryptoCurrency,
        order_name: impl Into<String>,
        order_number: impl ToString,
        amount: Decimal,
    ) -> Self {
        Self {
            currency,
            order_name: order_name.into(),
            order_number: order_number.to_string(),
            amount,
            source_currency: None,
            source_amount: None,
            allowed_currencies: Vec::new(),
            description: None,
            callback_url: None,
            email: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            plugin: None,
            version: None,
            redirect_to_invoice: false,
            expire_min: None,
        }
    }

    /// Price the invoice in fiat; Plisio converts at the current rate.
    pub fn source(mut self, currency: FiatCurrency, amount: Decimal) -> Self {
        self.source_currency = Some(currency);
        self.source_amount = Some(amount);
        self
    }

    pub fn allowed_currencies(mut self, currencies: impl IntoIterator<Item = CryptoCurrency>) -> Self {
        self.allowed_currencies = currencies.into_iter().collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn plugin(mut self, plugin: impl Into<String>, version: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self.version = Some(version.into());
        self
    }

    pub fn redirect_to_invoice(mut self, redirect: bool) -> Self {
        self.redirect_to_invoice = redirect;
        self
    }

    pub fn expire_min(mut self, minutes: u32) -> Self {
        self.expire_min = Some(minutes);
        self
    }
}

/// Arguments for [`commission`]. Addresses and amounts are optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionRequest {
    pub currency: CryptoCurrency,
    pub addresses: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub operation_type: Option<OperationType>,
    pub fee_plan: Option<PlanName>,
    pub custom_fee_rate: Option<i64>,
}

impl CommissionRequest {
    pub fn new(currency: CryptoCurrency) -> Self {
        Self {
            currency,
            addresses: Vec::new(),
            amounts: Vec::new(),
            operation_type: None,
            fee_plan: None,
            custom_fee_rate: None,
        }
    }

    /// Add one destination.
    pub fn to(mut self, address: impl Into<String>, amount: Decimal) -> Self {
        self.addresses.push(address.into());
        self.amounts.push(amount);
        self
    }

    pub fn operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }

    pub fn fee_plan(mut self, plan: PlanName) -> Self {
        self.fee_plan = Some(plan);
        self
    }

    pub fn custom_fee_rate(mut self, rate: i64) -> Self {
        self.custom_fee_rate = Some(rate);
        self
    }
}

/// Arguments for [`withdraw`]. Several destinations make a mass payout.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub currency: CryptoCurrency,
    pub to: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub operation_type: Option<OperationType>,
    pub fee_plan: Option<PlanName>,
    pub fee_rate: Option<Decimal>,
}

impl WithdrawRequest {
    pub fn new(currency: CryptoCurrency, to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency,
            to: vec![to.into()],
            amounts: vec![amount],
            operation_type: None,
            fee_plan: None,
            fee_rate: None,
        }
    }

    /// Add another destination.
    pub fn and_to(mut self, address: impl Into<String>, amount: Decimal) -> Self {
        self.to.push(address.into());
        self.amounts.push(amount);
        self
    }

    pub fn operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }

    pub fn fee_plan(mut self, plan: PlanName) -> Self {
        self.fee_plan = Some(plan);
        self
    }

    pub fn fee_rate(mut self, rate: Decimal) -> Self {
        self.fee_rate = Some(rate);
        self
    }
}

/// Arguments for [`fee`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeeRequest {
    pub currency: CryptoCurrency,
    pub addresses: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub fee_plan: Option<PlanName>,
}

impl FeeRequest {
    pub fn new(currency: CryptoCurrency, address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency,
            addresses: vec![address.into()],
            amounts: vec![amount],
            fee_plan: None,
        }
    }

    pub fn and_to(mut self, address: impl Into<String>, amount: Decimal) -> Self {
        self.addresses.push(address.into());
        self.amounts.push(amount);
        self
    }

    pub fn fee_plan(mut self, plan: PlanName) -> Self {
        self.fee_plan = Some(plan);
        self
    }
}

/// Filters for [`operations`]. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub shop_id: Option<String>,
    pub operation_type: Option<OperationType>,
    pub status: Option<OperationStatus>,
    pub currency: Option<CryptoCurrency>,
    pub search: Option<String>,
}

impl OperationsQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn shop_id(mut self, shop_id: impl Into<String>) -> Self {
        self.shop_id = Some(shop_id.into());
        self
    }

    pub fn operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }

    pub fn status(mut self, status: OperationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn currency(mut self, currency: CryptoCurrency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

// ─── Endpoint builders ───────────────────────────────────────────────────────

/// `balances/{psys_cid}`
pub fn balance(currency: CryptoCurrency) -> PlisioRequest {
    PlisioRequest::new(
        format!("{}/{}", path::BALANCES, currency),
        Params::new(),
        ResultShape::Balance,
    )
}

/// `currencies[/{fiat}]`
pub fn currencies(fiat: Option<FiatCurrency>) -> PlisioRequest {
    let path = match fiat {
        Some(fiat) => format!("{}/{}", path::CURRENCIES, fiat),
        None => path::CURRENCIES.to_string(),
    };
    PlisioRequest::new(path, Params::new(), ResultShape::Currency)
}

/// `invoices/new`
pub fn invoice(req: &InvoiceRequest) -> PlisioRequest {
    let params = Params::new()
        .with("currency", req.currency)
        .with("order_name", &req.order_name)
        .with("order_number", &req.order_number)
        .with("amount", req.amount)
        .with("source_currency", req.source_currency)
        .with("source_amount", req.source_amount)
        .with(
            "allowed_psys_cids",
            if req.allowed_currencies.is_empty() {
                ParamValue::Absent
            } else {
                ParamValue::items(&req.allowed_currencies)
            },
        )
        .with("description", req.description.clone())
        .with("callback_url", req.callback_url.clone())
        .with("email", req.email.clone())
        .with("language", req.language.clone())
        .with("plugin", req.plugin.clone())
        .with("version", req.version.clone())
        .with("redirect_to_invoice", req.redirect_to_invoice)
        .with("expire_min", req.expire_min);
    PlisioRequest::new(path::INVOICE, params, ResultShape::Invoice)
}

/// `operations/commission/{psys_cid}`
pub fn commission(req: &CommissionRequest) -> PlisioRequest {
    let params = Params::new()
        .with("addresses", items(&req.addresses))
        .with("amounts", amounts(&req.amounts))
        .with("type", req.operation_type)
        .with("feePlan", req.fee_plan)
        .with("customFeeRate", req.custom_fee_rate);
    PlisioRequest::new(
        format!("{}/{}", path::COMMISSION, req.currency),
        params,
        ResultShape::Commission,
    )
}

/// `operations/withdraw`
pub fn withdraw(req: &WithdrawRequest) -> PlisioRequest {
    let params = Params::new()
        .with("psys_cid", req.currency)
        .with("to", items(&req.to))
        .with("amount", amounts(&req.amounts))
        .with("type", req.operation_type)
        .with("feePlan", req.fee_plan)
        .with("feeRate", req.fee_rate);
    PlisioRequest::new(path::WITHDRAW, params, ResultShape::Withdraw)
}

/// `operations/fee/{psys_cid}`
pub fn fee(req: &FeeRequest) -> PlisioRequest {
    let params = Params::new()
        .with("addresses", items(&req.addresses))
        .with("amounts", amounts(&req.amounts))
        .with("feePlan", req.fee_plan);
    PlisioRequest::new(
        format!("{}/{}", path::FEE, req.currency),
        params,
        ResultShape::Fee,
    )
}

/// `operations/fee-plan/{psys_cid}`
pub fn fee_plan(currency: CryptoCurrency) -> PlisioRequest {
    PlisioRequest::new(
        format!("{}/{}", path::FEE_PLAN, currency),
        Params::new(),
        ResultShape::FeePlan,
    )
}

/// `operations`
pub fn operations(query: &OperationsQuery) -> PlisioRequest {
    let params = Params::new()
        .with("page", query.page)
        .with("limit", query.limit)
        .with("shop_id", query.shop_id.clone())
        .with("type", query.operation_type)
        .with("status", query.status)
        .with("currency", query.currency)
        .with("search", query.search.clone());
    PlisioRequest::new(path::OPERATIONS, params, ResultShape::OperationList)
}

/// `operations/{id}`
pub fn operation(id: &str) -> PlisioRequest {
    PlisioRequest::new(
        format!("{}/{}", path::OPERATIONS, id),
        Params::new(),
        ResultShape::Operation,
    )
}
