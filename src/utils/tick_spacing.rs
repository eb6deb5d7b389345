use super::tick_math::{MAX_TICK, MIN_TICK};

/// The lowest tick that is a multiple of `tick_spacing`.
#[inline]
pub const fn min_usable_tick(tick_spacing: i32) -> i32 {
    assert!(tick_spacing > 0, "TICK_SPACING");
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// The highest tick that is a multiple of `tick_spacing`.
#[inline]
pub const fn max_usable_tick(tick_spacing: i32) -> i32 {
    assert!(tick_spacing > 0, "TICK_SPACING");
    (MAX_TICK / tick_spacing) * tick_spacing
}

/// Derives max liquidity per tick from given tick spacing
///
/// ## Arguments
///
/// * `tick_spacing`: the amount of required tick separation, realized in multiples of
///   `tick_spacing`, e.g. a spacing of 3 requires ticks to be initialized every 3rd tick
///
/// ## Returns
///
/// The max liquidity per tick, such that the liquidity of every usable tick summed together
/// still fits in a `u128`
#[inline]
pub fn tick_spacing_to_max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let min_tick = min_usable_tick(tick_spacing);
    let max_tick = max_usable_tick(tick_spacing);
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    u128::MAX / num_ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FeeAmount;

    fn num_ticks(tick_spacing: i32) -> u128 {
        ((max_usable_tick(tick_spacing) - min_usable_tick(tick_spacing)) / tick_spacing) as u128
            + 1
    }

    #[test]
    fn usable_ticks_are_symmetric_multiples() {
        assert_eq!(min_usable_tick(1), MIN_TICK);
        assert_eq!(max_usable_tick(1), MAX_TICK);
        assert_eq!(min_usable_tick(60), -887220);
        assert_eq!(max_usable_tick(60), 887220);
        assert_eq!(max_usable_tick(200), 887200);
        assert_eq!(min_usable_tick(200), -887200);
    }

    #[test]
    #[should_panic(expected = "TICK_SPACING")]
    fn panics_if_tick_spacing_is_0() {
        tick_spacing_to_max_liquidity_per_tick(0);
    }

    #[test]
    #[should_panic(expected = "TICK_SPACING")]
    fn panics_if_tick_spacing_is_negative() {
        tick_spacing_to_max_liquidity_per_tick(-60);
    }

    #[test]
    fn returns_correct_value_for_low_fee() {
        assert_eq!(
            tick_spacing_to_max_liquidity_per_tick(FeeAmount::LOW.tick_spacing()),
            1917569901783203986719870431555990
        );
        assert_eq!(num_ticks(10), 177455);
    }

    #[test]
    fn returns_correct_value_for_medium_fee() {
        assert_eq!(
            tick_spacing_to_max_liquidity_per_tick(FeeAmount::MEDIUM.tick_spacing()),
            11505743598341114571880798222544994
        );
        assert_eq!(num_ticks(60), 29575);
    }

    #[test]
    fn returns_correct_value_for_high_fee() {
        assert_eq!(
            tick_spacing_to_max_liquidity_per_tick(FeeAmount::HIGH.tick_spacing()),
            38350317471085141830651933667504588
        );
    }

    #[test]
    fn returns_correct_value_for_entire_range() {
        assert_eq!(
            tick_spacing_to_max_liquidity_per_tick(887272),
            u128::MAX / 3
        );
    }

    #[test]
    fn returns_correct_value_for_2302() {
        assert_eq!(
            tick_spacing_to_max_liquidity_per_tick(2302),
            441351967472034323558203122479595605
        );
        assert_eq!(num_ticks(2302), 771);
    }

    #[test]
    fn total_liquidity_fits_in_u128() {
        for tick_spacing in [1, 10, 60, 200, 2302, 16384, 887272] {
            let max_liquidity = tick_spacing_to_max_liquidity_per_tick(tick_spacing);
            assert!(num_ticks(tick_spacing).checked_mul(max_liquidity).is_some());
            assert!((num_ticks(tick_spacing) + 1).checked_mul(max_liquidity).is_none());
        }
    }
}
