//! Conversions from wire types to domain types for withdrawals.

use super::wire::{WithdrawParamsResponse, WithdrawResponse};
use super::{Payout, Withdraw, WithdrawParams};
use crate::domain::commission::plan_from_wire;
use crate::domain::decode::{code, ResultShape};
use crate::error::DecodeError;
use crate::shared::serde_util::coerce_decimal;
use serde_json::{Map, Value};

const SHAPE: ResultShape = ResultShape::Withdraw;

fn payout_group(shape: ResultShape, group: &Map<String, Value>) -> Result<Vec<Payout>, DecodeError> {
    group
        .iter()
        .map(|(address, amount)| {
            let amount = coerce_decimal(amount)
                .and_then(|d| d.ok_or_else(|| "missing amount".to_string()))
                .map_err(|message| DecodeError::InvalidField {
                    shape,
                    message: format!("sendmany `{address}`: {message}"),
                })?;
            Ok(Payout {
                address: address.clone(),
                amount,
            })
        })
        .collect()
}

/// Decode `sendmany`: a list of `{address: amount}` objects. A bare object is
/// taken as a single group.
pub(crate) fn payouts_from_wire(
    shape: ResultShape,
    raw: Option<Value>,
) -> Result<Option<Vec<Vec<Payout>>>, DecodeError> {
    let groups = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(group)) => vec![Value::Object(group)],
        Some(Value::Array(groups)) => groups,
        Some(_) => {
            return Err(DecodeError::InvalidField {
                shape,
                message: "sendmany: expected a list of objects".to_string(),
            })
        }
    };
    groups
        .iter()
        .map(|group| match group {
            Value::Object(map) => payout_group(shape, map),
            _ => Err(DecodeError::InvalidField {
                shape,
                message: "sendmany: expected an object per group".to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn params_from_wire(w: WithdrawParamsResponse) -> Result<WithdrawParams, DecodeError> {
    Ok(WithdrawParams {
        source_currency: w.source_currency,
        source_rate: w.source_rate,
        usd_rate: w.usd_rate,
        fee: plan_from_wire(SHAPE, w.fee)?,
    })
}

impl TryFrom<WithdrawResponse> for Withdraw {
    type Error = DecodeError;

    fn try_from(w: WithdrawResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            operation_type: code(SHAPE, "type", w.operation_type)?,
            status: w.status,
            currency: code(SHAPE, "psys_cid", w.psys_cid)?,
            source_currency: code(SHAPE, "source_currency", w.source_currency)?,
            source_rate: w.source_rate,
            fee: w.fee,
            wallet_hash: w.wallet_hash,
            sendmany: payouts_from_wire(SHAPE, w.sendmany)?,
            params: w.params.map(params_from_wire).transpose()?,
            created_at_utc: w.created_at_utc,
            amount: w.amount,
            tx_url: w.tx_url,
            tx_id: w.tx_id,
            id: w.id,
        })
    }
}
