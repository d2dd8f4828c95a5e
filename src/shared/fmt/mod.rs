//! Wire formatting for numeric request parameters.

pub mod decimal;
