//! Decimal formatting for outgoing request parameters.
//!
//! Plisio expects amounts as plain decimal strings with at most eight
//! fractional digits. Two renderings are in use on the wire:
//!
//! - [`fixed`]: exactly eight fractional digits (`"0.10000000"`), used for
//!   comma-joined amount lists.
//! - [`stripped`]: the fixed form with trailing `'0'` characters removed
//!   (`"0.1"`). The decimal point is never removed, so whole numbers keep a
//!   trailing point (`"1."`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits carried by every amount on the wire.
pub const WIRE_SCALE: u32 = 8;

/// Render with exactly [`WIRE_SCALE`] fractional digits, rounding half to even.
///
/// `Decimal` holds 28 significant digits, so values with more than 20 integer
/// digits cannot carry all eight fractional digits. Those render with as many
/// as fit (none at [`Decimal::MAX`]).
pub fn fixed(value: &Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(WIRE_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(WIRE_SCALE);
    rounded.to_string()
}

/// Render via [`fixed`] and strip trailing zero digits, keeping the point.
pub fn stripped(value: &Decimal) -> String {
    fixed(value).trim_end_matches('0').to_string()
}

/// Render a list via [`fixed`], comma-joined.
pub fn fixed_list(values: &[Decimal]) -> String {
    values.iter().map(fixed).collect::<Vec<_>>().join(",")
}
