//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types handed to callers
//! - `wire.rs`: lenient serde structs matching API payloads
//! - `convert.rs`: `TryFrom` conversions, code-table lookups
//!
//! [`decode`] ties them together: it maps a [`ResultShape`] to the slice that
//! decodes it.

pub mod balance;
pub mod commission;
pub mod currency;
pub mod decode;
pub mod invoice;
pub mod operation;
pub mod withdraw;

pub use balance::Balance;
pub use commission::{Commission, Custom, Fee, FeePlan, Plan};
pub use currency::Currency;
pub use decode::{decode_shape, Decoded, Model, ResultShape};
pub use invoice::Invoice;
pub use operation::{Operation, OperationList, OperationParams, OperationTx};
pub use withdraw::{Payout, Withdraw, WithdrawParams};
