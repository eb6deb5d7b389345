//! ## Tick Math Library in Rust
//! Conversions between ticks and Q64.96 sqrt prices, bit-exact with the
//! [TickMath library](https://github.com/uniswap/v3-core/blob/main/contracts/libraries/TickMath.sol) in Solidity.

use super::most_significant_bit;
use crate::{
    constants::{Q128, Q32},
    error::{DomainError, Error},
};
use alloy_primitives::{ruint::UintTryFrom, uint, Uint, U160, U256};

/// The maximum tick that can be passed to `get_sqrt_ratio_at_tick`.
pub const MAX_TICK: i32 = 887272;
/// The minimum tick that can be passed to `get_sqrt_ratio_at_tick`.
pub const MIN_TICK: i32 = -MAX_TICK;

/// The minimum value that can be returned from `get_sqrt_ratio_at_tick`. Equivalent to
/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U160 = uint!(4295128739_U160);
/// The maximum value that can be returned from `get_sqrt_ratio_at_tick`. Equivalent to
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U160 = uint!(1461446703485210103287273052203988822378723970342_U160);

/// `2**128 / sqrt(1.0001)`, the starting ratio for odd ticks.
const SQRT_RATIO_ODD_SEED: U256 = uint!(0xfffcb933bd6fad37aa2d162d1a594001_U256);

/// `(1 << 128) / 1.0001.pow(1 << (i - 1))` for the `i`th bit of the absolute tick, `i` in
/// `1..20` because `MAX_TICK < 2**20`.
const SQRT_RATIO_LADDER: [U256; 19] = [
    uint!(0xfff97272373d413259a46990580e213a_U256),
    uint!(0xfff2e50f5f656932ef12357cf3c7fdcc_U256),
    uint!(0xffe5caca7e10e4e61c3624eaa0941cd0_U256),
    uint!(0xffcb9843d60f6159c9db58835c926644_U256),
    uint!(0xff973b41fa98c081472e6896dfb254c0_U256),
    uint!(0xff2ea16466c96a3843ec78b326b52861_U256),
    uint!(0xfe5dee046a99a2a811c461f1969c3053_U256),
    uint!(0xfcbe86c7900a88aedcffc83b479aa3a4_U256),
    uint!(0xf987a7253ac413176f2b074cf7815e54_U256),
    uint!(0xf3392b0822b70005940c7a398e4b70f3_U256),
    uint!(0xe7159475a2c29b7443b29c7fa6e889d9_U256),
    uint!(0xd097f3bdfd2022b8845ad8f792aa5825_U256),
    uint!(0xa9f746462d870fdf8a65dc1f90e061e5_U256),
    uint!(0x70d869a156d2a1b890bb3df62baf32f7_U256),
    uint!(0x31be135f97d08fd981231505542fcfa6_U256),
    uint!(0x9aa508b5b7a84e1c677de54f3e99bc9_U256),
    uint!(0x5d6af8dedb81196699c329225ee604_U256),
    uint!(0x2216e584f5fa1ea926041bedfe98_U256),
    uint!(0x48a170391f7dc42444e8fa2_U256),
];

/// `2**64 / log_2(sqrt(1.0001))`
const LOG_SQRT10001_MULTIPLIER: U256 = uint!(255738958999603826347141_U256);
/// Lower error bound of the 14 digit `log_2` approximation, in Q128 ticks.
const TICK_LOW_ERROR: U256 = uint!(3402992956809132418596140100660247210_U256);
/// Upper error bound of the 14 digit `log_2` approximation, in Q128 ticks.
const TICK_HIGH_ERROR: U256 = uint!(291339464771989622907027621153398088495_U256);

/// Trait to provide tick math functions for [`Uint`] types.
pub trait TickMath: Sized {
    fn get_sqrt_ratio_at_tick(tick: i32) -> Result<Self, Error>;
    fn get_tick_at_sqrt_ratio(self) -> Result<i32, Error>;
}

impl<const BITS: usize, const LIMBS: usize> TickMath for Uint<BITS, LIMBS> {
    #[inline]
    fn get_sqrt_ratio_at_tick(tick: i32) -> Result<Self, Error> {
        let sqrt_ratio_x96 = get_sqrt_ratio_at_tick(tick)?;
        Self::uint_try_from(sqrt_ratio_x96).map_err(|_| Error::Overflow)
    }

    /// Values wider than 256 bits saturate and are rejected as out of range.
    #[inline]
    fn get_tick_at_sqrt_ratio(self) -> Result<i32, Error> {
        get_tick_at_sqrt_ratio(U256::saturating_from(self))
    }
}

/// Returns the sqrt ratio as a Q64.96 for the given tick. The sqrt ratio is computed as
/// sqrt(1.0001)^tick
///
/// ## Arguments
///
/// * `tick`: the tick for which to compute the sqrt ratio
///
/// ## Returns
///
/// The sqrt ratio as a Q64.96, rounded up
#[inline]
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U160, Error> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(DomainError::TickOutOfRange(tick).into());
    }
    let abs_tick = tick.unsigned_abs();

    // ratio is a Q128.128 of 1 / sqrt(1.0001)^abs_tick
    let mut ratio = if abs_tick & 0x1 != 0 {
        SQRT_RATIO_ODD_SEED
    } else {
        Q128
    };
    for (i, multiplier) in SQRT_RATIO_LADDER.into_iter().enumerate() {
        if abs_tick & (1 << (i + 1)) != 0 {
            ratio = (ratio * multiplier) >> 128_usize;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Equivalent: ceil(ratio / 2**32), Q128.128 down to Q64.96
    let (quotient, remainder) = ratio.div_rem(Q32);
    let sqrt_ratio_x96 = if remainder.is_zero() {
        quotient
    } else {
        quotient + U256::ONE
    };
    Ok(U160::from(sqrt_ratio_x96))
}

/// Returns the tick corresponding to a given sqrt ratio,
/// s.t. get_sqrt_ratio_at_tick(tick) <= sqrt_ratio_x96 and get_sqrt_ratio_at_tick(tick + 1) >
/// sqrt_ratio_x96
///
/// ## Arguments
///
/// * `sqrt_ratio_x96`: the sqrt ratio as a Q64.96 for which to compute the tick, in
///   `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`
///
/// ## Returns
///
/// The greatest tick whose sqrt ratio is less than or equal to `sqrt_ratio_x96`
#[inline]
pub fn get_tick_at_sqrt_ratio(sqrt_ratio_x96: U256) -> Result<i32, Error> {
    if sqrt_ratio_x96 < U256::from(MIN_SQRT_RATIO) || sqrt_ratio_x96 >= U256::from(MAX_SQRT_RATIO)
    {
        return Err(DomainError::SqrtPriceOutOfRange(sqrt_ratio_x96).into());
    }

    // Q128.128, 192 > msb >= 64
    let ratio: U256 = sqrt_ratio_x96 << 32_usize;
    let msb = most_significant_bit(ratio)?;

    // The first 128 significant figures of `ratio`, 2**128 > r >= 2**127
    let mut r: U256 = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    // Integer part of log_2(ratio / 2**128) as a signed 64.64 number, kept in two's complement
    let mut log_2: U256 = U256::from(msb).wrapping_sub(uint!(128_U256)) << 64_usize;

    // Approximate the fractional part to 14 binary digits by repeated squaring
    for i in 0..14_usize {
        r = (r * r) >> 127_usize;
        // f = (r**2 >= 2**255)
        let f: U256 = r >> 128_usize;
        log_2 |= f << (63 - i);
        r >>= f.as_limbs()[0] as usize;
    }

    // tick = log_2(sqrt_ratio) / log_2(sqrt(1.0001)), as a Q128.128
    let log_sqrt10001 = log_2.wrapping_mul(LOG_SQRT10001_MULTIPLIER);

    // The shifted values fit in an i32, so their low limb truncates to the same two's complement
    // value an arithmetic shift would give.
    let tick_low: U256 = log_sqrt10001.wrapping_sub(TICK_LOW_ERROR) >> 128_usize;
    let tick_low = tick_low.as_limbs()[0] as i32;
    let tick_high: U256 = log_sqrt10001.wrapping_add(TICK_HIGH_ERROR) >> 128_usize;
    let tick_high = tick_high.as_limbs()[0] as i32;

    if tick_low == tick_high {
        return Ok(tick_low);
    }
    if U256::from(get_sqrt_ratio_at_tick(tick_high)?) <= sqrt_ratio_x96 {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}
