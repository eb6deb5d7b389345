use crate::{constants::MAX_UINT_128, error::Error};
use alloy_primitives::{I256, U256};

/// Add a signed liquidity delta to liquidity and revert if it overflows or underflows
///
/// ## Arguments
///
/// * `x`: The liquidity before change
/// * `y`: The delta by which liquidity should be changed
///
/// ## Returns
///
/// The liquidity after the change
#[inline]
pub fn add_delta(x: u128, y: i128) -> Result<u128, Error> {
    if y < 0 {
        let (z, underflow) = x.overflowing_sub(y.unsigned_abs());
        if underflow {
            Err(Error::Underflow)
        } else {
            Ok(z)
        }
    } else {
        let (z, overflow) = x.overflowing_add(y as u128);
        if overflow {
            Err(Error::Overflow)
        } else {
            Ok(z)
        }
    }
}

/// Same as [`add_delta`], for a liquidity and delta held in 256-bit words.
///
/// Both operands are bounds checked against [`MAX_UINT_128`] before the sign of the delta is
/// looked at, so a delta of `-MAX_UINT_128` is accepted where an `i128` could not hold it.
#[inline]
pub fn add_delta_x256(x: U256, y: I256) -> Result<u128, Error> {
    if x > MAX_UINT_128 {
        return Err(Error::Overflow);
    }
    if y > I256::from_raw(MAX_UINT_128) {
        return Err(Error::Overflow);
    }
    let x = x.to::<u128>();
    if y.is_negative() {
        let neg_y = y.unsigned_abs();
        if neg_y > U256::from(x) {
            return Err(Error::Underflow);
        }
        Ok(x - neg_y.to::<u128>())
    } else {
        x.checked_add(y.into_raw().to::<u128>())
            .ok_or(Error::Overflow)
    }
}
