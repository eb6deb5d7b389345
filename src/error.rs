#[cfg(doc)]
use crate::prelude::*;

use alloy_primitives::U256;
#[cfg(not(feature = "std"))]
use derive_more::From;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(not(feature = "std"), derive(From))]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Thrown when an input lies outside the range a function is defined on.
    #[cfg_attr(feature = "std", error("{0}"))]
    Domain(#[from] DomainError),

    /// Thrown when a liquidity value or delta exceeds [`MAX_UINT_128`], or when
    /// [`add_delta`] would produce one.
    #[cfg_attr(feature = "std", error("Overflow when adding liquidity delta"))]
    Overflow,

    /// Thrown when a negative liquidity delta is larger than the liquidity it is applied to.
    #[cfg_attr(feature = "std", error("Underflow when adding liquidity delta"))]
    Underflow,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum DomainError {
    /// Thrown when [`most_significant_bit`] or [`least_significant_bit`] is given zero.
    #[cfg_attr(feature = "std", error("Zero has no set bit"))]
    Zero,

    /// Thrown when [`most_significant_bit`] is given a value above [`MAX_UINT_256`].
    #[cfg_attr(feature = "std", error("Value exceeds 256 bits"))]
    TooLarge,

    /// Thrown when the tick passed to [`get_sqrt_ratio_at_tick`] is not between [`MIN_TICK`] and
    /// [`MAX_TICK`].
    #[cfg_attr(feature = "std", error("Invalid tick: {0}"))]
    TickOutOfRange(i32),

    /// Thrown when the price passed to [`get_tick_at_sqrt_ratio`] is not in
    /// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`.
    #[cfg_attr(feature = "std", error("Invalid square root price: {0}"))]
    SqrtPriceOutOfRange(U256),
}
