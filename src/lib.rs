//! # Plisio SDK
//!
//! A Rust client for the Plisio cryptocurrency payment API: balances,
//! invoices, fee and commission estimates, withdrawals and operation history.
//!
//! ## Architecture
//!
//! 1. **Core**: code tables, parameter encoding, the request lifecycle, error
//!    classification and model decoding. Pure, always available.
//! 2. **Endpoints**: `api` builds one ready-to-send request per capability.
//! 3. **HTTP**: async (`reqwest`) and blocking (`reqwest::blocking`, feature
//!    `blocking`) transports that finish a request with its response.
//! 4. **Clients**: `PlisioClient` (async) and `blocking::PlisioClient`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plisio::prelude::*;
//!
//! let client = PlisioClient::builder().api_key("your-secret-key").build()?;
//!
//! let balance = client.get_balance(CryptoCurrency::Btc).await?;
//! let invoice = client
//!     .create_invoice(&InvoiceRequest::new(CryptoCurrency::Btc, "Order #1", 1, dec!(0.001)))
//!     .await?;
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Code tables and shared helpers.
pub mod shared;

/// Domain models and the shape dispatch table.
pub mod domain;

/// Request descriptors and wire parameter encoding.
pub mod request;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Endpoints ────────────────────────────────────────────────────────────────

/// Endpoint builders and request arguments.
pub mod api;

// ── HTTP ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod http;

// ── Clients ──────────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "blocking")]
pub mod blocking;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Code tables
    pub use crate::shared::{
        CryptoCurrency, FiatCurrency, OperationStatus, OperationType, PlanName,
    };

    // Domain types
    pub use crate::domain::{
        Balance, Commission, Currency, Custom, Decoded, Fee, FeePlan, Invoice, Model, Operation,
        OperationList, OperationParams, OperationTx, Payout, Plan, ResultShape, Withdraw,
        WithdrawParams,
    };

    // Requests
    pub use crate::api::{
        CommissionRequest, FeeRequest, InvoiceRequest, OperationsQuery, WithdrawRequest,
    };
    pub use crate::request::{HttpMethod, ParamValue, Params, PlisioRequest};

    // Errors
    pub use crate::error::{ApiError, ApiErrorKind, DecodeError, PlisioError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Clients
    #[cfg(feature = "http")]
    pub use crate::client::{PlisioClient, PlisioClientBuilder};

    pub use rust_decimal::Decimal;
}
