//! Shared code tables and utilities used across all domain modules.
//!
//! The enumerations here are closed sets of Plisio wire identifiers. Each one
//! serializes to, and parses from, exactly the string the API sends, so they can
//! be used directly as request parameters and in decoded models.

pub mod currency;
pub mod fmt;
pub mod serde_util;

pub use currency::{CryptoCurrency, FiatCurrency};

/// Declares a closed wire enumeration: variants, `ALL`, `as_str`, `Display`,
/// `FromStr` and conversion into a request parameter tag.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The identifier used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    _ => Err($crate::error::UnknownCode {
                        table: $what,
                        code: s.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for $crate::request::params::ParamValue {
            fn from(value: $name) -> Self {
                $crate::request::params::ParamValue::Tag(value.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

// ─── Operation codes ─────────────────────────────────────────────────────────

wire_enum! {
    /// Kind of a balance operation.
    pub enum OperationType ("operation type") {
        CashIn => "cash_in",
        CashOut => "cash_out",
        MassCashOut => "mass_cash_out",
        Invoice => "invoice",
    }
}

wire_enum! {
    /// Lifecycle status of an operation.
    pub enum OperationStatus ("operation status") {
        New => "new",
        Pending => "pending",
        Expired => "expired",
        Completed => "completed",
        Mismatch => "mismatch",
        Error => "error",
        Cancelled => "cancelled",
    }
}

impl OperationStatus {
    /// No further transitions are expected once an operation reaches this status.
    pub fn is_final(&self) -> bool {
        !matches!(self, OperationStatus::New | OperationStatus::Pending)
    }
}

wire_enum! {
    /// Network fee plan tier.
    pub enum PlanName ("fee plan") {
        Economy => "economy",
        Normal => "normal",
        Priority => "priority",
        Custom => "custom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_operation_type_roundtrip_through_wire_code() {
        for ty in OperationType::ALL {
            assert_eq!(OperationType::from_str(ty.as_str()).unwrap(), *ty);
        }
        assert_eq!(OperationType::MassCashOut.as_str(), "mass_cash_out");
    }

    #[test]
    fn test_unknown_code_names_the_table() {
        let err = OperationStatus::from_str("refunded").unwrap_err();
        assert_eq!(err.code, "refunded");
        assert!(err.to_string().contains("operation status"));
    }

    #[test]
    fn test_plan_name_serde() {
        let plan: PlanName = serde_json::from_str("\"priority\"").unwrap();
        assert_eq!(plan, PlanName::Priority);
        assert_eq!(serde_json::to_string(&PlanName::Economy).unwrap(), "\"economy\"");
    }

    #[test]
    fn test_operation_status_is_final() {
        assert!(!OperationStatus::Pending.is_final());
        assert!(!OperationStatus::New.is_final());
        assert!(OperationStatus::Completed.is_final());
        assert!(OperationStatus::Mismatch.is_final());
    }
}
