//! Shape dispatch: turn a response `data` payload into typed models.
//!
//! Every request names the [`ResultShape`] it expects. [`decode_shape`] picks
//! the matching wire struct, deserializes it leniently and converts it to the
//! domain type, producing one [`Model`] per JSON object.

use super::balance::{wire::BalanceResponse, Balance};
use super::commission::wire::{CommissionResponse, FeePlanResponse, FeeResponse};
use super::commission::{Commission, Fee, FeePlan};
use super::currency::{wire::CurrencyResponse, Currency};
use super::invoice::{wire::InvoiceResponse, Invoice};
use super::operation::wire::{OperationListResponse, OperationResponse};
use super::operation::{Operation, OperationList};
use super::withdraw::{wire::WithdrawResponse, Withdraw};
use crate::error::{DecodeError, UnknownCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The model a request decodes its payload into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultShape {
    Balance,
    Currency,
    Invoice,
    Commission,
    Withdraw,
    Fee,
    FeePlan,
    Operation,
    OperationList,
}

impl ResultShape {
    pub fn name(&self) -> &'static str {
        match self {
            ResultShape::Balance => "Balance",
            ResultShape::Currency => "Currency",
            ResultShape::Invoice => "Invoice",
            ResultShape::Commission => "Commission",
            ResultShape::Withdraw => "Withdraw",
            ResultShape::Fee => "Fee",
            ResultShape::FeePlan => "FeePlan",
            ResultShape::Operation => "Operation",
            ResultShape::OperationList => "OperationList",
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded model of any shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Balance(Balance),
    Currency(Currency),
    Invoice(Invoice),
    Commission(Commission),
    Withdraw(Withdraw),
    Fee(Fee),
    FeePlan(FeePlan),
    Operation(Operation),
    OperationList(OperationList),
}

impl Model {
    pub fn shape(&self) -> ResultShape {
        match self {
            Model::Balance(_) => ResultShape::Balance,
            Model::Currency(_) => ResultShape::Currency,
            Model::Invoice(_) => ResultShape::Invoice,
            Model::Commission(_) => ResultShape::Commission,
            Model::Withdraw(_) => ResultShape::Withdraw,
            Model::Fee(_) => ResultShape::Fee,
            Model::FeePlan(_) => ResultShape::FeePlan,
            Model::Operation(_) => ResultShape::Operation,
            Model::OperationList(_) => ResultShape::OperationList,
        }
    }
}

macro_rules! model_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl TryFrom<Model> for $variant {
                type Error = DecodeError;

                fn try_from(model: Model) -> Result<Self, Self::Error> {
                    match model {
                        Model::$variant(inner) => Ok(inner),
                        other => Err(DecodeError::UnexpectedShape {
                            expected: ResultShape::$variant.name(),
                            found: other.shape().name(),
                        }),
                    }
                }
            }
        )+
    };
}

model_conversions!(
    Balance,
    Currency,
    Invoice,
    Commission,
    Withdraw,
    Fee,
    FeePlan,
    Operation,
    OperationList,
);

/// A decoded `data` payload: one model for an object, a list for an array.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    One(Model),
    Many(Vec<Model>),
}

impl Decoded {
    /// Extract a single model of type `T`.
    pub fn into_one<T>(self) -> Result<T, DecodeError>
    where
        T: TryFrom<Model, Error = DecodeError>,
    {
        match self {
            Decoded::One(model) => T::try_from(model),
            Decoded::Many(_) => Err(DecodeError::UnexpectedShape {
                expected: "object",
                found: "array",
            }),
        }
    }

    /// Extract every model as `T`. A single object becomes a one-element list.
    pub fn into_many<T>(self) -> Result<Vec<T>, DecodeError>
    where
        T: TryFrom<Model, Error = DecodeError>,
    {
        match self {
            Decoded::One(model) => Ok(vec![T::try_from(model)?]),
            Decoded::Many(models) => models.into_iter().map(T::try_from).collect(),
        }
    }
}

/// Look up an optional wire code in its table.
pub(crate) fn code<T>(
    shape: ResultShape,
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, DecodeError>
where
    T: FromStr<Err = UnknownCode>,
{
    raw.map(|s| s.parse::<T>())
        .transpose()
        .map_err(|source| DecodeError::UnknownVariant {
            shape,
            field,
            source,
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode_as<W, T>(shape: ResultShape, value: Value) -> Result<T, DecodeError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = DecodeError>,
{
    let wire: W = serde_json::from_value(value).map_err(|e| DecodeError::InvalidField {
        shape,
        message: e.to_string(),
    })?;
    T::try_from(wire)
}

fn decode_object(shape: ResultShape, value: Value) -> Result<Model, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::NotAnObject {
            shape,
            found: json_type(&value),
        });
    }
    Ok(match shape {
        ResultShape::Balance => Model::Balance(decode_as::<BalanceResponse, _>(shape, value)?),
        ResultShape::Currency => Model::Currency(decode_as::<CurrencyResponse, _>(shape, value)?),
        ResultShape::Invoice => Model::Invoice(decode_as::<InvoiceResponse, _>(shape, value)?),
        ResultShape::Commission => {
            Model::Commission(decode_as::<CommissionResponse, _>(shape, value)?)
        }
        ResultShape::Withdraw => Model::Withdraw(decode_as::<WithdrawResponse, _>(shape, value)?),
        ResultShape::Fee => Model::Fee(decode_as::<FeeResponse, _>(shape, value)?),
        ResultShape::FeePlan => Model::FeePlan(decode_as::<FeePlanResponse, _>(shape, value)?),
        ResultShape::Operation => {
            Model::Operation(decode_as::<OperationResponse, _>(shape, value)?)
        }
        ResultShape::OperationList => {
            Model::OperationList(decode_as::<OperationListResponse, _>(shape, value)?)
        }
    })
}

/// Decode a `data` payload. An array yields one model per element, in order;
/// an object yields a single model.
pub fn decode_shape(shape: ResultShape, data: Value) -> Result<Decoded, DecodeError> {
    match data {
        Value::Array(items) => items
            .into_iter()
            .map(|item| decode_object(shape, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Decoded::Many),
        other => decode_object(shape, other).map(Decoded::One),
    }
}
