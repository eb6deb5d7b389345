//! ## Bit Math Library in Rust
//!
//! Bit scans over 256-bit integers, following the binary search of the Solidity
//! [BitMath library](https://github.com/uniswap/v3-core/blob/main/contracts/libraries/BitMath.sol).

use crate::error::{DomainError, Error};
use alloy_primitives::{ruint::UintTryFrom, Uint, U256};

const fn pow2(exp: usize) -> U256 {
    let mut limbs = [0_u64; 4];
    limbs[exp / 64] = 1 << (exp % 64);
    U256::from_limbs(limbs)
}

/// Descending `(i, 2^i)` pairs used to halve the search window on each step.
const POWERS_OF_2: [(u8, U256); 8] = [
    (128, pow2(128)),
    (64, pow2(64)),
    (32, pow2(32)),
    (16, pow2(16)),
    (8, pow2(8)),
    (4, pow2(4)),
    (2, pow2(2)),
    (1, pow2(1)),
];

/// Returns the index of the most significant bit of `x`, s.t. `x >= 2**msb` and
/// `x < 2**(msb + 1)`
///
/// ## Arguments
///
/// * `x`: the value for which to compute the most significant bit, must be greater than 0 and at
///   most [`U256::MAX`]
///
/// ## Returns
///
/// The index of the most significant bit
#[inline]
pub fn most_significant_bit<const BITS: usize, const LIMBS: usize>(
    x: Uint<BITS, LIMBS>,
) -> Result<u8, Error> {
    if x.is_zero() {
        return Err(DomainError::Zero.into());
    }
    let mut x = U256::uint_try_from(x).map_err(|_| DomainError::TooLarge)?;

    let mut msb = 0;
    for (i, pow) in POWERS_OF_2 {
        if x >= pow {
            x >>= i as usize;
            msb += i;
        }
    }
    Ok(msb)
}

/// Returns the index of the least significant bit of `x`, s.t. `x & 2**lsb != 0` and
/// `x & (2**lsb - 1) == 0`
#[inline]
pub fn least_significant_bit(x: U256) -> Result<u8, Error> {
    if x.is_zero() {
        return Err(DomainError::Zero.into());
    }
    let mut x = x;

    let mut lsb = 0;
    for (i, pow) in POWERS_OF_2 {
        // the low `i` bits are all clear
        if (x & (pow - U256::ONE)).is_zero() {
            x >>= i as usize;
            lsb += i;
        }
    }
    Ok(lsb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U160, U512};
    use core::ops::{Shl, Sub};

    #[test]
    fn most_significant_bit_throws_for_zero() {
        assert_eq!(
            most_significant_bit(U256::ZERO),
            Err(Error::Domain(DomainError::Zero))
        );
        assert_eq!(
            most_significant_bit(U160::ZERO),
            Err(Error::Domain(DomainError::Zero))
        );
    }

    #[test]
    fn most_significant_bit_throws_above_max_uint_256() {
        let x = U512::from(U256::MAX) + U512::from(1);
        assert_eq!(
            most_significant_bit(x),
            Err(Error::Domain(DomainError::TooLarge))
        );
        assert_eq!(most_significant_bit(U512::from(U256::MAX)), Ok(255));
        assert_eq!(most_significant_bit(U512::from(1).shl(200)), Ok(200));
        assert_eq!(
            most_significant_bit(U512::MAX),
            Err(Error::Domain(DomainError::TooLarge))
        );
    }

    #[test]
    fn test_most_significant_bit() {
        assert_eq!(most_significant_bit(U256::from(1)), Ok(0));
        assert_eq!(most_significant_bit(U256::from(2)), Ok(1));
        assert_eq!(most_significant_bit(U256::from(1).shl(128)), Ok(128));
        for i in 1u8..=255 {
            let x = U256::from(1).shl(i);
            assert_eq!(most_significant_bit(x), Ok(i));
        }
        for i in 2u8..=255 {
            let x = U256::from(1).shl(i).sub(U256::from(1));
            assert_eq!(most_significant_bit(x), Ok(i - 1));
        }
        assert_eq!(most_significant_bit(U256::MAX), Ok(255));
    }

    #[test]
    fn most_significant_bit_of_narrow_types() {
        assert_eq!(most_significant_bit(U160::MAX), Ok(159));
        assert_eq!(most_significant_bit(U160::from(4295128739_u64)), Ok(32));
    }

    #[test]
    fn least_significant_bit_throws_for_zero() {
        assert_eq!(
            least_significant_bit(U256::ZERO),
            Err(Error::Domain(DomainError::Zero))
        );
    }

    #[test]
    fn test_least_significant_bit() {
        for i in 1u8..=255 {
            let x = U256::from(1).shl(i);
            assert_eq!(least_significant_bit(x), Ok(i));
        }
        for i in 2u8..=255 {
            let x = U256::from(1).shl(i).sub(U256::from(1));
            assert_eq!(least_significant_bit(x), Ok(0));
        }
        assert_eq!(least_significant_bit(U256::MAX), Ok(0));
    }
}
