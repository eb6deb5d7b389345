use crate::utils::tick_spacing_to_max_liquidity_per_tick;
use alloy_primitives::U256;

/// 2^32, the scale between the Q128.128 ratio and a Q64.96 sqrt price.
pub const Q32: U256 = U256::from_limbs([1 << 32, 0, 0, 0]);
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

/// The largest liquidity value, `2^128 - 1`.
pub const MAX_UINT_128: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0, 0]);
pub const MAX_UINT_256: U256 = U256::MAX;

/// The default factory enabled fee amounts, denominated in hundredths of bips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeAmount {
    LOWEST = 100,
    LOW = 500,
    MEDIUM = 3000,
    HIGH = 10000,
}

impl FeeAmount {
    /// The default factory tick spacings by fee amount.
    pub const fn tick_spacing(&self) -> i32 {
        match self {
            Self::LOWEST => 1,
            Self::LOW => 10,
            Self::MEDIUM => 60,
            Self::HIGH => 200,
        }
    }

    /// The per-tick liquidity ceiling of a pool created with this fee tier.
    #[inline]
    pub fn max_liquidity_per_tick(&self) -> u128 {
        tick_spacing_to_max_liquidity_per_tick(self.tick_spacing())
    }
}
