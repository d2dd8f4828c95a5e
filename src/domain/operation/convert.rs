//! Conversions from wire types to domain types for operations.

use super::wire::{
    OperationListResponse, OperationParamsResponse, OperationResponse, OperationTxResponse,
};
use super::{Operation, OperationList, OperationParams, OperationTx};
use crate::domain::commission::plan_from_wire;
use crate::domain::decode::{code, ResultShape};
use crate::domain::withdraw::payouts_from_wire;
use crate::error::DecodeError;

impl From<OperationTxResponse> for OperationTx {
    fn from(w: OperationTxResponse) -> Self {
        Self {
            txid: w.txid,
            block: w.block,
            confirmations: w.confirmations,
            value: w.value,
            processed: w.processed,
            fail_retry: w.fail_retry,
            fee_rate: w.fee_rate,
            fee_rate_unit: w.fee_rate_unit,
            url: w.url,
            wallet_hash: w.wallet_hash,
        }
    }
}

fn params_from_wire(
    shape: ResultShape,
    w: OperationParamsResponse,
) -> Result<OperationParams, DecodeError> {
    Ok(OperationParams {
        order_number: w.order_number,
        order_name: w.order_name,
        source_amount: w.source_amount,
        source_currency: w.source_currency,
        currency: w.currency,
        amount: w.amount,
        source_rate: w.source_rate,
        email: w.email,
        usd_rate: w.usd_rate,
        fee: plan_from_wire(shape, w.fee)?,
    })
}

fn operation_from_wire(shape: ResultShape, w: OperationResponse) -> Result<Operation, DecodeError> {
    Ok(Operation {
        user_id: w.user_id,
        shop_id: w.shop_id,
        operation_type: code(shape, "type", w.operation_type)?,
        status: code(shape, "status", w.status)?,
        pending_sum: w.pending_sum,
        currency: code(shape, "currency", w.currency)?,
        source_currency: code(shape, "source_currency", w.source_currency)?,
        source_rate: w.source_rate,
        fee: w.fee,
        wallet_hash: w.wallet_hash,
        sendmany: payouts_from_wire(shape, w.sendmany)?,
        params: w.params.map(|p| params_from_wire(shape, p)).transpose()?,
        expire_at_utc: w.expire_at_utc,
        created_at_utc: w.created_at_utc,
        amount: w.amount,
        sum: w.sum,
        commission: w.commission,
        tx_url: w.tx_url,
        tx_id: w.tx_id,
        id: w.id,
        actual_sum: w.actual_sum,
        actual_commission: w.actual_commission,
        actual_fee: w.actual_fee,
        actual_invoice_sum: w.actual_invoice_sum,
        tx: w.tx.map(|txs| txs.into_iter().map(OperationTx::from).collect()),
        status_code: w.status_code,
    })
}

impl TryFrom<OperationResponse> for Operation {
    type Error = DecodeError;

    fn try_from(w: OperationResponse) -> Result<Self, Self::Error> {
        operation_from_wire(ResultShape::Operation, w)
    }
}

impl TryFrom<OperationListResponse> for OperationList {
    type Error = DecodeError;

    fn try_from(w: OperationListResponse) -> Result<Self, Self::Error> {
        let operations = w
            .operations
            .map(|ops| {
                ops.into_iter()
                    .map(|op| operation_from_wire(ResultShape::OperationList, op))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(Self {
            operations,
            links: w.links,
            meta: w.meta,
        })
    }
}
